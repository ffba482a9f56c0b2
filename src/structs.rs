mod direction;
mod playlist;
mod playlist_manager;
mod song;
mod song_input;
mod sort_key;

pub use direction::Direction;
pub use playlist::{Playlist, PlaylistKind};
pub use playlist_manager::PlaylistManager;
pub use song::Song;
pub use song_input::{SongField, SongInput, SongInputError};
pub use sort_key::SortKey;
