use strum::Display;
use thiserror::Error;

use crate::structs::Song;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Display)]
pub enum SongField {
    Title,
    Artist,
    Genre,
    Duration,
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum SongInputError {
    #[error("{0} can't be empty.")]
    MissingField(SongField),
    #[error("Please enter a valid non-negative number for duration.")]
    InvalidDuration(String),
}

impl SongInputError {
    /// The field to fix.
    pub fn field(&self) -> SongField {
        match self {
            SongInputError::MissingField(field) => *field,
            SongInputError::InvalidDuration(_) => SongField::Duration,
        }
    }
}

/// Raw text typed into the add-song form.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SongInput {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub duration: String,
}

impl SongInput {
    pub fn field_mut(&mut self, field: SongField) -> &mut String {
        match field {
            SongField::Title => &mut self.title,
            SongField::Artist => &mut self.artist,
            SongField::Genre => &mut self.genre,
            SongField::Duration => &mut self.duration,
        }
    }

    pub fn into_song(self) -> Result<Song, SongInputError> {
        for (field, value) in [
            (SongField::Title, &self.title),
            (SongField::Artist, &self.artist),
            (SongField::Genre, &self.genre),
        ] {
            if value.trim().is_empty() {
                return Err(SongInputError::MissingField(field));
            }
        }

        let duration = parse_duration(&self.duration)?;

        Ok(Song::new(self.title, self.artist, self.genre, duration))
    }
}

/// Accepts `0..=i32::MAX` seconds.
pub fn parse_duration(s: &str) -> Result<u32, SongInputError> {
    s.trim()
        .parse::<i32>()
        .ok()
        .and_then(|d| u32::try_from(d).ok())
        .ok_or_else(|| SongInputError::InvalidDuration(s.to_string()))
}
