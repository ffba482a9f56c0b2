use chrono::prelude::*;
use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Tabs},
};

use crate::theme::Theme;

static TIME_FORMAT: &str = "%A %-l:%M%P";

fn time_format() -> String {
    Local::now().format(TIME_FORMAT).to_string()
}

pub struct TopBar<'a> {
    theme: Theme,
    tab_titles: &'a [&'a str],
    active_tab: usize,
    clock_display: bool,
}

impl<'a> TopBar<'a> {
    pub fn new(theme: Theme, tab_titles: &'a [&'a str], active_tab: usize, clock_display: bool) -> Self {
        Self {
            theme,
            tab_titles,
            active_tab,
            clock_display,
        }
    }
}

impl Widget for TopBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tab_titles: Vec<Line> = self
            .tab_titles
            .iter()
            .map(|t| {
                Line::from(Span::styled(
                    (**t).to_string(),
                    Style::default().fg(self.theme.foreground),
                ))
            })
            .collect();

        let tabs = Tabs::new(tab_titles)
            .block(Block::default())
            .select(self.active_tab)
            .style(
                Style::default()
                    .fg(self.theme.foreground)
                    .bg(self.theme.top_bar_background),
            )
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(self.theme.top_bar_foreground_selected),
            );
        tabs.render(area, buf);

        if self.clock_display {
            Line::from(time_format()).right_aligned().render(area, buf);
        }
    }
}
