mod component;
mod keyboard_handler;
mod widget;

pub use component::PlaylistScreen;
