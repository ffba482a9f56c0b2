use ratatui::{
    prelude::*,
    style::Style,
    text::{Line, Span},
};

use crate::theme::Theme;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

pub struct StatusBar<'a> {
    theme: Theme,
    notice: Option<&'a Notice>,
    general_len: usize,
    favorites_len: usize,
}

impl<'a> StatusBar<'a> {
    pub fn new(theme: Theme, notice: Option<&'a Notice>, general_len: usize, favorites_len: usize) -> Self {
        Self {
            theme,
            notice,
            general_len,
            favorites_len,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [area_notice, area_counts] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(32)]).areas(area);

        if let Some(notice) = self.notice {
            let color = if notice.is_error {
                self.theme.error
            } else {
                self.theme.foreground
            };
            Line::from(Span::styled(notice.text.as_str(), Style::default().fg(color))).render(area_notice, buf);
        }

        Line::from(format!("General {} · Favorites {}", self.general_len, self.favorites_len))
            .style(Style::default().fg(self.theme.foreground_secondary))
            .right_aligned()
            .render(area_counts, buf);
    }
}
