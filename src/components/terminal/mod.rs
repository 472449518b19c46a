//! Terminal front-end pieces: the editable input line and output rendering.

mod input;
mod output;

pub use input::{EditorEvent, Key, LineEditor};
pub use output::{render_line, render_prompt};
