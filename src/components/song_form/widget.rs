use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    prelude::Widget,
    style::Style,
    text::Line,
    widgets::WidgetRef,
};

use super::component::SongForm;

impl WidgetRef for SongForm {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        let [area_inputs, area_hint] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let rows = Layout::vertical(self.inputs.iter().map(|_| Constraint::Length(1))).split(area_inputs);

        for (input, row) in self.inputs.iter().zip(rows.iter()) {
            input.render_ref(*row, buf);
        }

        let hint = if self.is_last_field_focused() {
            "Enter: add song · Tab: next field · Esc: cancel"
        } else {
            "Enter/Tab: next field · Esc: cancel"
        };

        Line::from(hint)
            .style(Style::default().fg(self.theme.foreground_secondary))
            .render(area_hint, buf);
    }
}
