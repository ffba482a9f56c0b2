use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    prelude::Widget,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, WidgetRef},
};

use crate::{
    components::{List, SongForm, TextInput},
    structs::{SortKey, Song},
    theme::Theme,
};

/// A dialog on top of the current screen. While one is open, it receives every action.
pub enum Modal {
    AddSong(SongForm),
    AskFavorites(Song),
    RemoveSong(TextInput),
    Sort(List<SortKey>),
}

impl Modal {
    fn title(&self) -> &'static str {
        match self {
            Modal::AddSong(_) => " Add Song ",
            Modal::AskFavorites(_) => " Add to Favorites? ",
            Modal::RemoveSong(_) => " Remove Song ",
            Modal::Sort(_) => " Sort Songs ",
        }
    }

    fn size(&self) -> (u16, u16) {
        match self {
            Modal::AddSong(_) => (64, 8),
            Modal::AskFavorites(_) => (64, 5),
            Modal::RemoveSong(_) => (64, 4),
            Modal::Sort(_) => (30, 6),
        }
    }

    pub fn render(&self, theme: &Theme, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.size();
        let area = centered(area, width, height);

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title())
            .border_style(Style::default().fg(theme.search))
            .style(Style::default().fg(theme.foreground).bg(theme.background));
        let inner = block.inner(area);
        block.render(area, buf);

        let [inner] = Layout::horizontal([Constraint::Min(0)]).horizontal_margin(1).areas(inner);

        match self {
            Modal::AddSong(form) => form.render_ref(inner, buf),
            Modal::AskFavorites(song) => {
                let [area_song, area_hint] =
                    Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).areas(inner);
                Line::from(song.to_string()).render(area_song, buf);
                Line::from("y / Enter: yes · n / Esc: no")
                    .style(Style::default().fg(theme.foreground_secondary))
                    .render(area_hint, buf);
            }
            Modal::RemoveSong(input) => {
                let [area_input, area_hint] =
                    Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);
                input.render_ref(area_input, buf);
                Line::from("Removes every song with this title from both playlists")
                    .style(Style::default().fg(theme.foreground_secondary))
                    .render(area_hint, buf);
            }
            Modal::Sort(keys) => keys.render_ref(inner, buf),
        }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
