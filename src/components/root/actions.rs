use super::{Modal, Root};
use crate::{
    actions::{Action, ListAction, OnAction, OnActionMut, PlaylistsAction, ScreenAction, TextAction},
    ui::Notice,
};

impl OnActionMut for Root {
    fn on_action(&mut self, actions: Vec<Action>) {
        if let Some(modal) = self.modal.take() {
            self.modal = self.exec_modal_action(modal, actions);
            return;
        }

        for action in &actions {
            match action {
                Action::Screen(screen) => self.focused_screen = *screen,
                Action::ListAction(ListAction::Insert) => self.open_add_song(),
                Action::ListAction(ListAction::Delete) => self.open_remove_song(),
                Action::Playlists(PlaylistsAction::Sort) => self.open_sort(),
                Action::Navigation(_) => match self.focused_screen {
                    ScreenAction::General => self.general_screen.on_action(actions.clone()),
                    ScreenAction::Favorites => self.favorites_screen.on_action(actions.clone()),
                    ScreenAction::Help => self.help_screen.on_action(actions.clone()),
                },
                _ => continue,
            }
            return;
        }
    }
}

impl Root {
    fn exec_modal_action(&mut self, modal: Modal, actions: Vec<Action>) -> Option<Modal> {
        if actions.contains(&Action::Cancel) {
            log::trace!(target: "::root", "modal cancelled");
            return None;
        }

        let is_confirm = actions.contains(&Action::Confirm);

        match modal {
            Modal::AddSong(mut form) => {
                if !is_confirm {
                    form.on_action(actions);
                    return Some(Modal::AddSong(form));
                }

                if !form.is_last_field_focused() {
                    form.focus_next();
                    return Some(Modal::AddSong(form));
                }

                match form.submit() {
                    Ok(song) => self.add_song(song),
                    Err(err) => {
                        log::debug!(target: "::root", "invalid song: {err:?}");
                        self.notice = Some(Notice::error(err.to_string()));
                        form.focus_field(err.field());
                        Some(Modal::AddSong(form))
                    }
                }
            }
            Modal::AskFavorites(song) => {
                let answer = actions.iter().find_map(|action| match action {
                    Action::Confirm | Action::Text(TextAction::Char('y' | 'Y')) => Some(true),
                    Action::Text(TextAction::Char('n' | 'N')) => Some(false),
                    _ => None,
                });

                match answer {
                    Some(true) => {
                        self.add_song_to_favorites(song);
                        None
                    }
                    Some(false) => None,
                    None => Some(Modal::AskFavorites(song)),
                }
            }
            Modal::RemoveSong(mut input) => {
                if is_confirm {
                    self.remove_song(input.value());
                    None
                } else {
                    input.on_action(actions);
                    Some(Modal::RemoveSong(input))
                }
            }
            Modal::Sort(keys) => {
                if is_confirm {
                    if let Some(key) = keys.with_selected_item(|key| *key) {
                        self.sort(key);
                    }
                    None
                } else {
                    keys.on_action(actions);
                    Some(Modal::Sort(keys))
                }
            }
        }
    }
}
