use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    prelude::Widget,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::WidgetRef,
};

use super::PlaylistScreen;

fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds / 60) % 60;
    let seconds = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

impl WidgetRef for PlaylistScreen {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        let [area_header, _, area_list] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .horizontal_margin(2)
        .areas(area);

        let len = self.len();

        Line::from(vec![
            Span::styled(
                format!("{} playlist", self.kind),
                Style::default().fg(self.theme.foreground).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  {len} {}, {}",
                    if len == 1 { "song" } else { "songs" },
                    format_duration(self.total_duration.get())
                ),
                Style::default().fg(self.theme.foreground_secondary),
            ),
        ])
        .render(area_header, buf);

        self.song_list.render_ref(area_list, buf);
    }
}
