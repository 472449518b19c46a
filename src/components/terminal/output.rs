use crate::config::NON_BREAKING_SPACE;
use crate::models::{OutputLine, OutputLineData, TextStyle};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

/// Get the ANSI color for a listing style
fn style_color(style: TextStyle) -> &'static str {
    match style {
        TextStyle::Directory => CYAN,
        TextStyle::File | TextStyle::Default | TextStyle::InputEcho => "",
    }
}

/// Render one output line for a character terminal.
///
/// Non-breaking spaces typed in the editor are shown as plain spaces.
pub fn render_line(line: &OutputLine, color: bool) -> String {
    let text = match &line.data {
        OutputLineData::Command { prompt, input } if color => {
            format!("{}{}{}{}{}", GREEN, BOLD, prompt, RESET, input)
        }
        OutputLineData::Error(text) if color => format!("{}{}{}", RED, text, RESET),
        OutputLineData::ListEntry { name, style } if color => {
            let is_dir = *style == TextStyle::Directory;
            let weight = if is_dir { BOLD } else { "" };
            format!("{}{}{}{}", style_color(*style), weight, name, RESET)
        }
        _ => line.text_content(),
    };
    text.replace(NON_BREAKING_SPACE, " ")
}

/// Render the prompt shown before the input line.
pub fn render_prompt(prompt: &str, color: bool) -> String {
    if color {
        format!("{}{}{}{}", GREEN, BOLD, prompt, RESET)
    } else {
        prompt.to_string()
    }
}
