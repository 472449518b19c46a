//! Front-end components driving the shell core.

pub mod terminal;

pub use terminal::{EditorEvent, Key, LineEditor};
