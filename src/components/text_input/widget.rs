use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::Widget,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::WidgetRef,
};

use super::component::TextInput;

impl WidgetRef for TextInput {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.is_focused {
            Style::default().fg(self.theme.search).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.foreground_secondary)
        };

        let mut spans = vec![
            Span::styled(format!("{}: ", self.label), label_style),
            Span::styled(self.value.as_str(), Style::default().fg(self.theme.foreground)),
        ];

        if self.is_focused {
            spans.push(Span::styled("⎸", Style::default().fg(self.theme.search)));
        }

        Line::from(spans).render(area, buf);
    }
}
