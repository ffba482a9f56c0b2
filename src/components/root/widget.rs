use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    prelude::{Style, Widget},
    widgets::{Block, WidgetRef},
};

use super::root::Root;
use crate::{
    actions::ScreenAction,
    ui::{StatusBar, TopBar},
};

const SCREEN_TITLES: [&str; 3] = ["General", "Favorites", "Help"];

impl WidgetRef for Root {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(self.theme.background))
            .render(area, buf);

        let [area_top, _, area_center, area_bottom] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let active_tab = match self.focused_screen {
            ScreenAction::General => 0,
            ScreenAction::Favorites => 1,
            ScreenAction::Help => 2,
        };

        TopBar::new(self.theme, &SCREEN_TITLES, active_tab, self.settings.clock_display).render(area_top, buf);

        match self.focused_playlist_screen() {
            Some(screen) => {
                screen.set_is_focused(self.modal.is_none());
                screen.render_ref(area_center, buf);
            }
            None => self.help_screen.render_ref(area_center, buf),
        }

        if let Some(modal) = &self.modal {
            modal.render(&self.theme, area_center, buf);
        }

        StatusBar::new(
            self.theme,
            self.notice.as_ref(),
            self.manager.general_playlist().len(),
            self.manager.favorites_playlist().len(),
        )
        .render(area_bottom, buf);
    }
}
