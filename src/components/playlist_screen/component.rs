use std::cell::Cell;

use crate::{
    components::List,
    structs::{Playlist, PlaylistKind, Song},
    theme::Theme,
};

pub struct PlaylistScreen {
    pub(super) theme: Theme,
    pub(super) kind: PlaylistKind,
    pub(super) song_list: List<Song>,
    pub(super) total_duration: Cell<u64>,
}

impl PlaylistScreen {
    pub fn new(theme: Theme, kind: PlaylistKind) -> Self {
        let mut song_list = List::new(theme, vec![]);
        song_list.set_empty_message("No songs in this playlist yet.");

        Self {
            theme,
            kind,
            song_list,
            total_duration: Cell::new(0),
        }
    }

    pub fn kind(&self) -> PlaylistKind {
        self.kind
    }

    /// Mirrors the playlist's current contents.
    pub fn refresh(&self, playlist: &Playlist) {
        debug_assert_eq!(playlist.kind(), self.kind);
        log::trace!(target: "::playlist_screen", "{}: refresh, {} songs", self.kind, playlist.len());

        self.total_duration
            .set(playlist.songs().iter().map(|song| song.duration() as u64).sum());
        self.song_list.set_items(playlist.songs().to_vec());
    }

    pub fn selected_song(&self) -> Option<Song> {
        self.song_list.with_selected_item(Song::clone)
    }

    pub fn set_is_focused(&self, v: bool) {
        self.song_list.set_is_focused(v);
    }

    pub fn len(&self) -> usize {
        self.song_list.len()
    }
}
