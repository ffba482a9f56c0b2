use crate::{
    actions::{Actions, ScreenAction},
    components::{Help, List, PlaylistScreen, SongForm, TextInput},
    settings::Settings,
    structs::{PlaylistKind, PlaylistManager, SortKey, Song},
    theme::Theme,
    ui::Notice,
};

use super::Modal;
use strum::IntoEnumIterator;

pub struct Root {
    pub(super) theme: Theme,
    pub(super) settings: Settings,

    pub(super) manager: PlaylistManager,

    pub(super) general_screen: PlaylistScreen,
    pub(super) favorites_screen: PlaylistScreen,
    pub(super) help_screen: Help,
    pub(super) focused_screen: ScreenAction,

    pub(super) modal: Option<Modal>,
    pub(super) notice: Option<Notice>,
}

impl Root {
    pub fn new(theme: Theme, settings: Settings, actions: &Actions) -> Self {
        Self {
            theme,
            settings,

            manager: PlaylistManager::new(),

            general_screen: PlaylistScreen::new(theme, PlaylistKind::General),
            favorites_screen: PlaylistScreen::new(theme, PlaylistKind::Favorites),
            help_screen: Help::new(actions, theme),
            focused_screen: ScreenAction::General,

            modal: None,
            notice: None,
        }
    }

    pub fn manager(&self) -> &PlaylistManager {
        &self.manager
    }

    /// Screen switching is disabled while a dialog is open.
    pub fn is_focus_trapped(&self) -> bool {
        self.modal.is_some()
    }

    pub(super) fn focused_playlist_screen(&self) -> Option<&PlaylistScreen> {
        match self.focused_screen {
            ScreenAction::General => Some(&self.general_screen),
            ScreenAction::Favorites => Some(&self.favorites_screen),
            ScreenAction::Help => None,
        }
    }

    fn refresh(&self) {
        for screen in [&self.general_screen, &self.favorites_screen] {
            screen.refresh(self.manager.playlist(screen.kind()));
        }
    }

    pub(super) fn open_add_song(&mut self) {
        log::debug!(target: "::root", "open_add_song");
        self.notice = None;
        self.modal = Some(Modal::AddSong(SongForm::new(self.theme)));
    }

    pub(super) fn open_remove_song(&mut self) {
        let title = self
            .focused_playlist_screen()
            .and_then(PlaylistScreen::selected_song)
            .map(|song| song.title().to_string())
            .unwrap_or_default();

        log::debug!(target: "::root", "open_remove_song '{title}'");
        self.modal = Some(Modal::RemoveSong(TextInput::new(self.theme, "Title").with_value(title)));
    }

    pub(super) fn open_sort(&mut self) {
        log::debug!(target: "::root", "open_sort");
        self.modal = Some(Modal::Sort(List::new(self.theme, SortKey::iter().collect())));
    }

    /// Adds the song to General. Returns the follow-up dialog, if any.
    pub(super) fn add_song(&mut self, song: Song) -> Option<Modal> {
        log::info!(target: "::root", "adding '{}'", song.title());

        self.manager.add_song_to_general(song.clone());
        self.refresh();
        self.notice = Some(Notice::info(format!("Added \"{}\" to General.", song.title())));

        if self.settings.ask_favorites {
            Some(Modal::AskFavorites(song))
        } else {
            None
        }
    }

    pub(super) fn add_song_to_favorites(&mut self, song: Song) {
        log::info!(target: "::root", "adding '{}' to favorites", song.title());

        self.notice = Some(Notice::info(format!(
            "Added \"{}\" to General and Favorites.",
            song.title()
        )));
        self.manager.add_song_to_favorites(song);
        self.refresh();
    }

    pub(super) fn remove_song(&mut self, title: &str) {
        if title.trim().is_empty() {
            return;
        }

        let removed = self.manager.remove_song(title);
        log::info!(target: "::root", "removing '{title}': {removed:?}");

        self.notice = Some(if removed.total() == 0 {
            Notice::info(format!("No song titled \"{title}\" found."))
        } else {
            Notice::info(format!(
                "Removed \"{title}\": {} from General, {} from Favorites.",
                removed.general, removed.favorites
            ))
        });
        self.refresh();
    }

    pub(super) fn sort(&mut self, key: SortKey) {
        self.manager.sort_songs_by(key);
        self.refresh();
        self.notice = Some(Notice::info(format!("Sorted by {key}.")));
    }

    #[cfg(test)]
    pub(super) fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

impl Drop for Root {
    fn drop(&mut self) {
        log::trace!("Root.drop");
    }
}
