mod component;
mod widget;

pub use component::TextInput;
