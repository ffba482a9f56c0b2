mod help;
mod list;
mod playlist_screen;
mod root;
mod song_form;
mod text_input;

pub use help::Help;
pub use list::List;
pub use playlist_screen::PlaylistScreen;
pub use root::Root;
pub use song_form::SongForm;
pub use text_input::TextInput;
