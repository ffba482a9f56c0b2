use std::collections::HashMap;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, WidgetRef, Wrap},
};

use crate::{
    actions::{Action, Actions, KeyBinding, OnAction, OnActionMut},
    components::List,
    theme::Theme,
};

pub struct Help {
    actions: List<String>,
    theme: Theme,
}

impl Help {
    pub fn new(actions: &Actions, theme: Theme) -> Self {
        let mut actions_by_action: HashMap<Action, Vec<KeyBinding>> = HashMap::new();

        for (k, v) in actions.actions() {
            for action in v {
                actions_by_action.entry(action).or_default().push(k);
            }
        }

        let mut actions_by_action: Vec<(Action, Vec<KeyBinding>)> = actions_by_action.into_iter().collect();
        actions_by_action.sort_by_key(|e| e.0);

        let actions: Vec<String> = actions_by_action
            .into_iter()
            .map(|(action, key_bindings)| {
                let mut key_bindings: Vec<String> = key_bindings.into_iter().map(|kb| kb.to_string()).collect();
                key_bindings.sort();
                format!("{:32} {}", format!("{action:?}"), key_bindings.join(" "))
            })
            .collect();

        Self {
            actions: List::new(theme, actions),
            theme,
        }
    }

    #[cfg(test)]
    pub fn lines(&self) -> Vec<String> {
        self.actions.with_items(|items| items.to_vec())
    }
}

impl OnActionMut for Help {
    fn on_action(&mut self, action: Vec<Action>) {
        self.actions.on_action(action);
    }
}

impl WidgetRef for Help {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        let [area_top, area_main] = Layout::vertical([Constraint::Length(4), Constraint::Min(5)])
            .horizontal_margin(2)
            .areas(area);

        Paragraph::new(vec![
            Line::raw("Songbook keeps two playlists for this session: General and Favorites."),
            Line::raw("Songs you add always go to General; you'll be asked whether they should go to Favorites too."),
            Line::raw("Nothing is saved when you quit. Key bindings:"),
        ])
        .style(Style::new().fg(self.theme.foreground_secondary))
        .wrap(Wrap { trim: true })
        .render_ref(area_top, buf);

        self.actions.render_ref(area_main, buf);
    }
}

impl Drop for Help {
    fn drop(&mut self) {
        log::trace!("Help.drop()");
    }
}
