//! Terminal-related data types for output rendering.

/// Style tag attached to every output line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// Plain output (including error messages)
    Default,
    /// Echo of a submitted command line
    InputEcho,
    /// Directory entries in a listing
    Directory,
    /// File entries in a listing
    File,
}

/// Represents a single line of output in the terminal.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputLine {
    pub data: OutputLineData,
}

/// The actual content of an output line
#[derive(Clone, Debug, PartialEq)]
pub enum OutputLineData {
    /// Command with prompt and user input
    Command { prompt: String, input: String },
    /// Plain text output
    Text(String),
    /// Error message
    Error(String),
    /// Listing entry (ls, ambiguous completion)
    ListEntry { name: String, style: TextStyle },
}

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self { data }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    /// Create a directory listing entry
    pub fn dir_entry(name: impl Into<String>) -> Self {
        Self::new(OutputLineData::ListEntry {
            name: name.into(),
            style: TextStyle::Directory,
        })
    }

    /// Create a file listing entry
    pub fn file_entry(name: impl Into<String>) -> Self {
        Self::new(OutputLineData::ListEntry {
            name: name.into(),
            style: TextStyle::File,
        })
    }

    /// Display text of the line.
    pub fn text_content(&self) -> String {
        match &self.data {
            OutputLineData::Command { prompt, input } => format!("{}{}", prompt, input),
            OutputLineData::Text(s) | OutputLineData::Error(s) => s.clone(),
            OutputLineData::ListEntry { name, .. } => name.clone(),
        }
    }

    /// Style tag of the line. Errors carry no dedicated style.
    pub fn style(&self) -> TextStyle {
        match &self.data {
            OutputLineData::Command { .. } => TextStyle::InputEcho,
            OutputLineData::Text(_) | OutputLineData::Error(_) => TextStyle::Default,
            OutputLineData::ListEntry { style, .. } => *style,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.data, OutputLineData::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_line_constructors() {
        assert_eq!(
            OutputLine::text("hello").data,
            OutputLineData::Text("hello".to_string())
        );
        assert_eq!(
            OutputLine::error("error").data,
            OutputLineData::Error("error".to_string())
        );
    }

    #[test]
    fn test_command_line() {
        let cmd = OutputLine::command("justin@host:~$ ", "ls");
        assert_eq!(cmd.text_content(), "justin@host:~$ ls");
        assert_eq!(cmd.style(), TextStyle::InputEcho);
    }

    #[test]
    fn test_entry_styles() {
        assert_eq!(
            OutputLine::dir_entry("Desktop").style(),
            TextStyle::Directory
        );
        assert_eq!(
            OutputLine::file_entry("GT_Scheduler").style(),
            TextStyle::File
        );
        assert_eq!(
            OutputLine::file_entry("GT_Scheduler").text_content(),
            "GT_Scheduler"
        );
    }

    #[test]
    fn test_error_is_default_styled() {
        let line = OutputLine::error("cd: x: No such file or directory");
        assert!(line.is_error());
        assert_eq!(line.style(), TextStyle::Default);
    }
}
