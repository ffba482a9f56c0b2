mod status_bar;
mod top_bar;

pub use status_bar::{Notice, StatusBar};
pub use top_bar::TopBar;
