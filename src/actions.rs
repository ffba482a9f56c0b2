mod action;

pub use action::*;
