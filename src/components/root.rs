mod actions;
mod modal;
mod root;
mod widget;

use modal::Modal;
pub use root::Root;
