//! Shell session.
//!
//! Contains [`TerminalState`] (current directory, output log, command history)
//! and [`Terminal`], which owns the filesystem, the session state and the
//! input line, and implements the editor-to-shell interface.

use log::debug;

use crate::components::{EditorEvent, Key, LineEditor};
use crate::config::{DEFAULT_SEED, ShellConfig};
use crate::core::error::SeedError;
use crate::core::{
    AutocompleteResult, Command, Completion, VirtualFs, complete, execute_command, listing,
    parse_input,
};
use crate::models::{NodeId, OpenAction, OutputLine};

// ============================================================================
// TerminalState
// ============================================================================

/// Session state of one shell.
///
/// `command_history` always ends with the mutable "current line" slot, so it
/// is never empty and `history_index` always points inside it.
#[derive(Clone, Debug)]
pub struct TerminalState {
    /// Current working directory.
    pub current_dir: NodeId,
    /// Session user.
    pub user: String,
    /// Terminal output log.
    pub output: Vec<OutputLine>,
    /// Submitted lines followed by the current line slot.
    pub command_history: Vec<String>,
    /// Current position in command history (for navigation).
    pub history_index: usize,
    /// Set by an ambiguous Tab; the next consecutive Tab lists the matches.
    pub needs_help: bool,
}

impl TerminalState {
    /// Creates a new terminal state in `current_dir` with an empty log and history.
    pub fn new(user: impl Into<String>, current_dir: NodeId) -> Self {
        Self {
            current_dir,
            user: user.into(),
            output: Vec::new(),
            command_history: vec![String::new()],
            history_index: 0,
            needs_help: false,
        }
    }

    /// Appends a single output line.
    pub fn push_output(&mut self, line: OutputLine) {
        self.output.push(line);
    }

    /// Appends multiple output lines.
    pub fn push_lines(&mut self, lines: Vec<OutputLine>) {
        self.output.extend(lines);
    }

    /// Clears all terminal output.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Record a submitted line before the current line slot and point at that
    /// slot, which is emptied to match the fresh input line.
    ///
    /// At most `max_entries` submitted lines are kept; the oldest go first.
    pub fn add_to_command_history(&mut self, cmd: &str, max_entries: usize) {
        let slot = self.command_history.len() - 1;
        self.command_history[slot].clear();
        self.command_history.insert(slot, cmd.to_string());
        while self.command_history.len() > max_entries + 1 {
            self.command_history.remove(0);
        }
        self.history_index = self.command_history.len() - 1;
    }

    /// Move through history by `offset`, saving `buffer` into the slot being left.
    ///
    /// Returns the line to show, or `None` when the move would leave the history.
    pub fn navigate_history(&mut self, offset: i32, buffer: &str) -> Option<String> {
        let new_index = self.history_index as i64 + offset as i64;
        if new_index < 0 || new_index >= self.command_history.len() as i64 {
            return None;
        }
        let new_index = new_index as usize;

        self.command_history[self.history_index] = buffer.to_string();
        self.history_index = new_index;
        debug!("history index -> {}", new_index);
        Some(self.command_history[new_index].clone())
    }

    /// Store `buffer` in the history slot currently shown.
    pub fn set_current_line(&mut self, buffer: &str) {
        self.command_history[self.history_index] = buffer.to_string();
    }
}

// ============================================================================
// Terminal
// ============================================================================

/// A complete shell: filesystem, session state and input line.
#[derive(Clone, Debug)]
pub struct Terminal {
    fs: VirtualFs,
    state: TerminalState,
    editor: LineEditor,
    config: ShellConfig,
}

impl Terminal {
    /// Start a session in the configured user's home directory.
    pub fn new(fs: VirtualFs, config: ShellConfig) -> Self {
        let home = fs.home(&config.user);
        Self {
            state: TerminalState::new(config.user.clone(), home),
            fs,
            editor: LineEditor::new(),
            config,
        }
    }

    /// Start a session on the bundled default seed.
    pub fn with_default_seed(config: ShellConfig) -> Result<Self, SeedError> {
        Ok(Self::new(VirtualFs::from_seed_json(DEFAULT_SEED)?, config))
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn state(&self) -> &TerminalState {
        &self.state
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn output(&self) -> &[OutputLine] {
        &self.state.output
    }

    pub fn current_dir(&self) -> NodeId {
        self.state.current_dir
    }

    /// Path shown in the prompt: `/`, `~`-abbreviated home, or absolute.
    pub fn prompt_path(&self) -> String {
        let path = self.fs.path(self.state.current_dir);
        if path.len() == 1 {
            return "/".to_string();
        }
        if path.len() >= 3 && path[1] == "home" && path[2] == self.state.user {
            let mut short = vec!["~".to_string()];
            short.extend_from_slice(&path[3..]);
            return short.join("/");
        }
        path.join("/")
    }

    /// Gets the current prompt string for display.
    ///
    /// Format: `{user}@{hostname}:{path}$ `
    pub fn prompt(&self) -> String {
        format!(
            "{}@{}:{}$ ",
            self.state.user,
            self.config.hostname,
            self.prompt_path()
        )
    }

    // ========================================================================
    // Editor-to-shell interface
    // ========================================================================

    /// Run a submitted line.
    ///
    /// The echo, the command output, the directory change and the history
    /// entry are applied together. Returns the action requested by `open`.
    pub fn submit(&mut self, line: &str) -> Option<OpenAction> {
        let echo = OutputLine::command(self.prompt(), line);
        let parsed = parse_input(line);
        let cmd = Command::parse(&parsed.name, &parsed.args);
        let result = execute_command(cmd, &mut self.fs, self.state.current_dir, &self.state.user);

        if result.clear {
            self.state.clear_output();
        } else {
            self.state.push_output(echo);
            self.state.push_lines(result.output);
        }
        if let Some(dir) = result.navigate_to {
            self.state.current_dir = dir;
        }
        self.state
            .add_to_command_history(line, self.config.max_command_history);
        self.state.needs_help = false;

        result.open
    }

    /// Move through command history; see [`TerminalState::navigate_history`].
    pub fn navigate_history(&mut self, offset: i32, buffer: &str) -> Option<String> {
        self.state.navigate_history(offset, buffer)
    }

    /// Tab completion with the two-press listing of ambiguous matches.
    pub fn autocomplete(&mut self, buffer: &str) -> AutocompleteResult {
        match complete(buffer, &self.fs, self.state.current_dir, &self.state.user) {
            Completion::Extended(completed) => {
                self.state.set_current_line(&completed);
                self.state.needs_help = false;
                AutocompleteResult::Completed(completed)
            }
            Completion::Ambiguous(matches) => {
                self.state.set_current_line(buffer);
                if self.state.needs_help {
                    let echo = OutputLine::command(self.prompt(), buffer);
                    self.state.push_output(echo);
                    self.state.push_lines(listing(&self.fs, &matches));
                    self.state.needs_help = false;
                    AutocompleteResult::Listed
                } else {
                    self.state.needs_help = true;
                    AutocompleteResult::Armed
                }
            }
            Completion::None => AutocompleteResult::None,
        }
    }

    /// Feed one key press through the input line.
    pub fn handle_key(&mut self, key: Key) -> Option<OpenAction> {
        if key != Key::Tab {
            self.state.needs_help = false;
        }

        match self.editor.handle_key(key)? {
            EditorEvent::Submit(line) => self.submit(&line),
            EditorEvent::NavigateHistory { offset, buffer } => {
                if let Some(line) = self.navigate_history(offset, &buffer) {
                    self.editor.load(&line);
                }
                None
            }
            EditorEvent::Autocomplete(buffer) => {
                if let AutocompleteResult::Completed(line) = self.autocomplete(&buffer) {
                    self.editor.load(&line);
                }
                None
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
