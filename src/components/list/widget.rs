use std::fmt::Display;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::Widget,
    style::Style,
    text::Line,
    widgets::WidgetRef,
};

use super::component::List;
use crate::theme::Theme;

fn line_style(theme: &Theme, index: usize, selected_index: usize, list_has_focus: bool) -> Style {
    if index == selected_index {
        if list_has_focus {
            Style::default().fg(theme.foreground_selected).bg(theme.background_selected)
        } else {
            Style::default().fg(theme.foreground_selected).bg(theme.background_selected_blur)
        }
    } else {
        Style::default().fg(theme.foreground_secondary).bg(theme.background)
    }
}

impl<T: Display> WidgetRef for List<T> {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        self.height.set(area.height as usize);

        let items = self.items.borrow();

        if items.is_empty() {
            if let Some(empty_message) = &self.empty_message {
                Line::from(empty_message.as_str())
                    .style(Style::default().fg(self.theme.foreground_secondary))
                    .centered()
                    .render(area, buf);
            }
            return;
        }

        let selected_item_index = self.selected_item_index.get();
        let offset = self.offset.get();
        let is_focused = self.is_focused.get();

        for (i, item) in items.iter().enumerate().skip(offset).take(area.height as usize) {
            let area = Rect {
                y: area.y + (i - offset) as u16,
                height: 1,
                ..area
            };

            Line::from(item.to_string())
                .style(line_style(&self.theme, i, selected_item_index, is_focused))
                .render(area, buf);
        }
    }
}
