mod help;

pub use help::Help;
