use std::{error::Error, time::Duration};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::widgets::WidgetRef;

use crate::{
    actions::{Action, Actions, OnActionMut},
    components::Root,
    settings::Settings,
    term::set_terminal,
    theme::Theme,
};

pub fn run() -> Result<(), Box<dyn Error>> {
    let actions = Actions::from_file_or_default();
    assert!(
        actions.contains(Action::Quit),
        "No key binding for Action::Quit! User would not be able to exit Songbook. This is 100% a bug."
    );

    let settings = Settings::from_file();
    let theme = Theme::from_built_in(settings.theme);

    let mut terminal = set_terminal()?;

    let mut root = Root::new(theme, settings, &actions);

    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            root.render_ref(area, frame.buffer_mut());
        })?;

        if !event::poll(tick_rate)? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };

        if key.kind != KeyEventKind::Press {
            continue;
        }

        let action = actions.action_by_key(key);

        if action.contains(&Action::Quit) {
            break;
        }

        if !action.is_empty() {
            root.on_action(action);
        }
    }

    let manager = root.manager();
    log::info!(
        "quitting with {} songs in General and {} in Favorites",
        manager.general_playlist().len(),
        manager.favorites_playlist().len()
    );

    Ok(())
}
