use std::fmt::{Display, Formatter};

/// A song as entered by the user. Fields can't change after construction.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Song {
    title: String,
    artist: String,
    genre: String,
    duration: u32,
}

impl Song {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, genre: impl Into<String>, duration: u32) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            genre: genre.into(),
            duration,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// In seconds.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn has_title(&self, title: &str) -> bool {
        fold_case(&self.title).eq(fold_case(title))
    }
}

/// Lowercases one char at a time. Sorting and title matching both go through this, so they agree on equality.
pub(crate) fn fold_case(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

impl Display for Song {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} by {} ({}, {} seconds)",
            self.title, self.artist, self.genre, self.duration
        )
    }
}
