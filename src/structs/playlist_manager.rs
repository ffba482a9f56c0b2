use crate::structs::{Playlist, PlaylistKind, SortKey, Song};

/// Owns the general and the favorites playlist for the whole session.
#[derive(Debug)]
pub struct PlaylistManager {
    general: Playlist,
    favorites: Playlist,
}

/// Songs removed from each playlist by [`PlaylistManager::remove_song`].
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct Removed {
    pub general: usize,
    pub favorites: usize,
}

impl Removed {
    pub fn total(&self) -> usize {
        self.general + self.favorites
    }
}

impl PlaylistManager {
    pub fn new() -> Self {
        Self {
            general: Playlist::new(PlaylistKind::General),
            favorites: Playlist::new(PlaylistKind::Favorites),
        }
    }

    pub fn general_playlist(&self) -> &Playlist {
        &self.general
    }

    pub fn favorites_playlist(&self) -> &Playlist {
        &self.favorites
    }

    pub fn playlist(&self, kind: PlaylistKind) -> &Playlist {
        match kind {
            PlaylistKind::General => &self.general,
            PlaylistKind::Favorites => &self.favorites,
        }
    }

    pub fn add_song_to_general(&mut self, song: Song) {
        self.general.add_song(song);
    }

    pub fn add_song_to_favorites(&mut self, song: Song) {
        self.favorites.add_song(song);
    }

    pub fn remove_song_from_general(&mut self, title: &str) -> usize {
        self.general.remove_song(title)
    }

    pub fn remove_song_from_favorites(&mut self, title: &str) -> usize {
        self.favorites.remove_song(title)
    }

    /// Removes `title` from both playlists.
    pub fn remove_song(&mut self, title: &str) -> Removed {
        Removed {
            general: self.remove_song_from_general(title),
            favorites: self.remove_song_from_favorites(title),
        }
    }

    pub fn sort_songs_by(&mut self, key: SortKey) {
        log::debug!(target: "::playlist_manager", "sorting by {key}");
        self.general.sort_by(key);
        self.favorites.sort_by(key);
    }
}

impl Default for PlaylistManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imagine() -> Song {
        Song::new("Imagine", "John Lennon", "Rock", 183)
    }

    fn bold() -> Song {
        Song::new("Bold", "X", "Pop", 200)
    }

    fn titles(playlist: &Playlist) -> Vec<&str> {
        playlist.songs().iter().map(Song::title).collect()
    }

    #[test]
    fn add_goes_only_where_requested() {
        let mut manager = PlaylistManager::new();

        manager.add_song_to_general(imagine());
        assert_eq!(titles(manager.general_playlist()), ["Imagine"]);
        assert!(manager.favorites_playlist().is_empty());

        manager.add_song_to_favorites(bold());
        assert_eq!(titles(manager.general_playlist()), ["Imagine"]);
        assert_eq!(titles(manager.favorites_playlist()), ["Bold"]);
    }

    #[test]
    fn remove_from_one_leaves_the_other() {
        let mut manager = PlaylistManager::new();
        manager.add_song_to_general(imagine());
        manager.add_song_to_favorites(imagine());

        assert_eq!(manager.remove_song_from_general("imagine"), 1);
        assert!(manager.general_playlist().is_empty());
        assert_eq!(titles(manager.favorites_playlist()), ["Imagine"]);

        manager.add_song_to_general(imagine());
        assert_eq!(manager.remove_song_from_favorites("IMAGINE"), 1);
        assert_eq!(titles(manager.general_playlist()), ["Imagine"]);
        assert!(manager.favorites_playlist().is_empty());
    }

    #[test]
    fn remove_matches_titles_the_sort_treats_as_equal() {
        let mut manager = PlaylistManager::new();
        manager.add_song_to_general(Song::new("ΣΑΣ", "Unknown", "Folk", 200));

        assert_eq!(manager.remove_song_from_general("σασ"), 1);
        assert!(manager.general_playlist().is_empty());
    }

    #[test]
    fn remove_from_both() {
        let mut manager = PlaylistManager::new();
        manager.add_song_to_general(imagine());
        manager.add_song_to_general(bold());
        manager.add_song_to_favorites(imagine());

        let removed = manager.remove_song("imagine");
        assert_eq!(removed, Removed { general: 1, favorites: 1 });
        assert_eq!(removed.total(), 2);
        assert_eq!(titles(manager.general_playlist()), ["Bold"]);
        assert!(manager.favorites_playlist().is_empty());

        assert_eq!(manager.remove_song("nothing"), Removed::default());
    }

    #[test]
    fn sort_by_title() {
        let mut manager = PlaylistManager::new();
        manager.add_song_to_general(imagine());
        manager.add_song_to_general(bold());

        manager.sort_songs_by(SortKey::Title);
        assert_eq!(titles(manager.general_playlist()), ["Bold", "Imagine"]);
    }

    #[test]
    fn sort_applies_to_both_and_is_idempotent() {
        let mut manager = PlaylistManager::new();
        for song in [
            Song::new("zebra", "b", "Jazz", 30),
            Song::new("Apple", "a", "jazz", 10),
            Song::new("mango", "c", "JAZZ", 20),
        ] {
            manager.add_song_to_general(song.clone());
            manager.add_song_to_favorites(song);
        }

        manager.sort_songs_by(SortKey::Title);
        let once = titles(manager.general_playlist())
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        assert_eq!(once, ["Apple", "mango", "zebra"]);
        assert_eq!(titles(manager.favorites_playlist()), once);

        manager.sort_songs_by(SortKey::Title);
        assert_eq!(titles(manager.general_playlist()), once);

        // genre ties keep the title order
        manager.sort_songs_by(SortKey::Genre);
        assert_eq!(titles(manager.general_playlist()), once);

        manager.sort_songs_by(SortKey::Duration);
        assert_eq!(titles(manager.favorites_playlist()), ["Apple", "mango", "zebra"]);
    }

    #[test]
    fn playlist_by_kind() {
        let mut manager = PlaylistManager::default();
        manager.add_song_to_favorites(bold());

        assert_eq!(manager.playlist(PlaylistKind::Favorites).kind(), PlaylistKind::Favorites);
        assert_eq!(manager.playlist(PlaylistKind::Favorites).len(), 1);
        assert!(manager.playlist(PlaylistKind::General).is_empty());
    }
}
