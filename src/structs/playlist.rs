use strum::Display;

use crate::structs::{SortKey, Song};

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Display)]
pub enum PlaylistKind {
    General,
    Favorites,
}

#[derive(Clone, Debug)]
pub struct Playlist {
    kind: PlaylistKind,
    songs: Vec<Song>,
}

impl Playlist {
    pub fn new(kind: PlaylistKind) -> Self {
        Self { kind, songs: vec![] }
    }

    pub fn kind(&self) -> PlaylistKind {
        self.kind
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn add_song(&mut self, song: Song) {
        log::trace!(target: "::playlist", "{}: add '{}'", self.kind, song.title());
        self.songs.push(song);
    }

    /// Removes every song titled `title`, ignoring case. Returns how many were removed.
    pub fn remove_song(&mut self, title: &str) -> usize {
        let len = self.songs.len();
        self.songs.retain(|song| !song.has_title(title));
        let removed = len - self.songs.len();
        log::trace!(target: "::playlist", "{}: removed {removed} songs titled '{title}'", self.kind);
        removed
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.songs.sort_by(|a, b| key.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(playlist: &Playlist) -> Vec<&str> {
        playlist.songs().iter().map(Song::title).collect()
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut playlist = Playlist::new(PlaylistKind::General);
        playlist.add_song(Song::new("Imagine", "John Lennon", "Rock", 183));
        playlist.add_song(Song::new("Bold", "X", "Pop", 200));
        playlist.add_song(Song::new("Imagine", "A Perfect Circle", "Rock", 288));

        assert_eq!(titles(&playlist), ["Imagine", "Bold", "Imagine"]);
        assert_eq!(playlist.len(), 3);
    }

    #[test]
    fn remove_all_matches_ignoring_case() {
        let mut playlist = Playlist::new(PlaylistKind::General);
        playlist.add_song(Song::new("Imagine", "John Lennon", "Rock", 183));
        playlist.add_song(Song::new("Bold", "X", "Pop", 200));
        playlist.add_song(Song::new("IMAGINE", "A Perfect Circle", "Rock", 288));

        assert_eq!(playlist.remove_song("imagine"), 2);
        assert_eq!(titles(&playlist), ["Bold"]);
    }

    #[test]
    fn remove_missing_title_is_a_no_op() {
        let mut playlist = Playlist::new(PlaylistKind::Favorites);
        playlist.add_song(Song::new("Bold", "X", "Pop", 200));

        assert_eq!(playlist.remove_song("Imagine"), 0);
        assert_eq!(titles(&playlist), ["Bold"]);

        let mut empty = Playlist::new(PlaylistKind::Favorites);
        assert_eq!(empty.remove_song("Bold"), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn sort_is_stable() {
        let mut playlist = Playlist::new(PlaylistKind::General);
        playlist.add_song(Song::new("c", "Same", "Rock", 3));
        playlist.add_song(Song::new("a", "same", "Rock", 1));
        playlist.add_song(Song::new("b", "Other", "Rock", 2));
        playlist.add_song(Song::new("d", "SAME", "Rock", 1));

        playlist.sort_by(SortKey::Artist);
        assert_eq!(titles(&playlist), ["b", "c", "a", "d"]);

        playlist.sort_by(SortKey::Duration);
        assert_eq!(titles(&playlist), ["a", "d", "b", "c"]);
    }
}
