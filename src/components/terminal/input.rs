//! Terminal input line: text buffer, cursor, and key handling.
//!
//! The editor only owns its buffer and cursor. Submission, history navigation
//! and completion are requested from the terminal through [`EditorEvent`]s.

use log::trace;

use crate::config::NON_BREAKING_SPACE;

/// Keys with defined behavior. Anything printable arrives as [`Key::Char`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Tab,
    Space,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    /// Control combined with a key
    Ctrl(char),
    /// Printable character
    Char(char),
}

impl Key {
    /// Map a raw input character to a key, if it has a meaning here.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\r' | '\n' => Some(Self::Enter),
            '\t' => Some(Self::Tab),
            ' ' => Some(Self::Space),
            '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            // ^A..^Z other than the ones above
            '\u{1}'..='\u{1a}' => Some(Self::Ctrl((b'A' + c as u8 - 1) as char)),
            c if c.is_control() => None,
            c => Some(Self::Char(c)),
        }
    }
}

/// Request raised by a key press for the terminal to handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorEvent {
    /// Enter pressed with this line
    Submit(String),
    /// Up (-1) or Down (+1) pressed; `buffer` is the line being left
    NavigateHistory { offset: i32, buffer: String },
    /// Tab pressed with this line
    Autocomplete(String),
}

/// Single-line editor with a cursor.
///
/// The cursor counts characters, `0 <= cursor <= len`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineEditor {
    buffer: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current line.
    pub fn buffer(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replace the line, placing the cursor at the end.
    pub fn load(&mut self, text: &str) {
        self.buffer = text.chars().collect();
        self.cursor = self.buffer.len();
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, key: Key) -> Option<EditorEvent> {
        trace!("key {:?} at {}", key, self.cursor);
        match key {
            Key::Enter => {
                let line = self.buffer();
                self.buffer.clear();
                self.cursor = 0;
                return Some(EditorEvent::Submit(line));
            }
            Key::Tab => return Some(EditorEvent::Autocomplete(self.buffer())),
            Key::Up => return Some(self.history_request(-1)),
            Key::Down => return Some(self.history_request(1)),
            Key::Space => self.insert(&[NON_BREAKING_SPACE]),
            Key::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.buffer.remove(self.cursor);
                }
            }
            Key::Delete => {
                if self.cursor < self.buffer.len() {
                    self.buffer.remove(self.cursor);
                }
            }
            Key::Ctrl(letter) if letter.is_ascii_alphabetic() => {
                self.insert(&['^', letter.to_ascii_uppercase()])
            }
            Key::Ctrl(_) => {}
            Key::Left => self.cursor = self.cursor.saturating_sub(1),
            Key::Right => self.cursor = (self.cursor + 1).min(self.buffer.len()),
            Key::Char(c) => self.insert(&[c]),
        }
        None
    }

    fn history_request(&self, offset: i32) -> EditorEvent {
        EditorEvent::NavigateHistory {
            offset,
            buffer: self.buffer(),
        }
    }

    fn insert(&mut self, chars: &[char]) {
        for &c in chars {
            self.buffer.insert(self.cursor, c);
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(editor: &mut LineEditor, s: &str) {
        for c in s.chars() {
            if let Some(key) = Key::from_char(c) {
                editor.handle_key(key);
            }
        }
    }

    #[test]
    fn test_typing_and_submit() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "ls");
        assert_eq!(editor.buffer(), "ls");
        assert_eq!(editor.cursor(), 2);

        let event = editor.handle_key(Key::Enter);
        assert_eq!(event, Some(EditorEvent::Submit("ls".to_string())));
        assert!(editor.is_empty());
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_space_is_non_breaking() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "cd x");
        assert_eq!(editor.buffer(), "cd\u{a0}x");
        assert_eq!(editor.cursor(), 4);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut editor = LineEditor::new();
        editor.handle_key(Key::Backspace);
        assert_eq!(editor.cursor(), 0);

        editor.load("abc");
        editor.handle_key(Key::Delete);
        assert_eq!(editor.buffer(), "abc");

        editor.handle_key(Key::Backspace);
        assert_eq!(editor.buffer(), "ab");
        assert_eq!(editor.cursor(), 2);

        editor.handle_key(Key::Left);
        editor.handle_key(Key::Left);
        editor.handle_key(Key::Delete);
        assert_eq!(editor.buffer(), "b");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_cursor_clamped() {
        let mut editor = LineEditor::new();
        editor.load("ab");
        editor.handle_key(Key::Right);
        assert_eq!(editor.cursor(), 2);
        for _ in 0..5 {
            editor.handle_key(Key::Left);
        }
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_insert_mid_line() {
        let mut editor = LineEditor::new();
        editor.load("cd");
        editor.handle_key(Key::Left);
        editor.handle_key(Key::Char('x'));
        assert_eq!(editor.buffer(), "cxd");
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn test_ctrl_caret_notation() {
        let mut editor = LineEditor::new();
        editor.handle_key(Key::Ctrl('c'));
        assert_eq!(editor.buffer(), "^C");
        assert_eq!(editor.cursor(), 2);
        editor.handle_key(Key::Ctrl('1'));
        assert_eq!(editor.buffer(), "^C");
    }

    #[test]
    fn test_history_and_tab_requests() {
        let mut editor = LineEditor::new();
        editor.load("pw");
        assert_eq!(
            editor.handle_key(Key::Up),
            Some(EditorEvent::NavigateHistory {
                offset: -1,
                buffer: "pw".to_string()
            })
        );
        assert_eq!(
            editor.handle_key(Key::Tab),
            Some(EditorEvent::Autocomplete("pw".to_string()))
        );
        assert_eq!(editor.buffer(), "pw");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut editor = LineEditor::new();
        editor.load("héllo");
        editor.handle_key(Key::Left);
        editor.handle_key(Key::Backspace);
        assert_eq!(editor.buffer(), "hélo");
        assert_eq!(editor.cursor(), 3);
    }

    #[test]
    fn test_key_from_char() {
        assert_eq!(Key::from_char('\t'), Some(Key::Tab));
        assert_eq!(Key::from_char(' '), Some(Key::Space));
        assert_eq!(Key::from_char('\u{3}'), Some(Key::Ctrl('C')));
        assert_eq!(Key::from_char('a'), Some(Key::Char('a')));
        assert_eq!(Key::from_char('\u{1b}'), None);
    }
}
