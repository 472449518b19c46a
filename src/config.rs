//! Shell configuration.
//!
//! Centralizes all configuration constants used throughout the shell.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Help text for `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Default filesystem seed (JSON tree of `{name, children}` / `{name, url}`).
pub const DEFAULT_SEED: &str = include_str!("../assets/seed.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name.
pub const APP_NAME: &str = "memsh";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Session Configuration
// =============================================================================

/// User whose home directory the session starts in.
pub const DEFAULT_USER: &str = "justin";

/// Host name shown in the prompt.
pub const DEFAULT_HOSTNAME: &str = "mygaminghut";

/// Maximum number of command history entries to keep (excluding the current line).
pub const MAX_COMMAND_HISTORY: usize = 1000;

/// Character the line editor inserts for the space key.
pub const NON_BREAKING_SPACE: char = '\u{a0}';

/// Runtime settings for a shell session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Session user, selects `/home/<user>`
    pub user: String,
    /// Host name shown in the prompt
    pub hostname: String,
    /// Command history bound
    pub max_command_history: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            hostname: DEFAULT_HOSTNAME.to_string(),
            max_command_history: MAX_COMMAND_HISTORY,
        }
    }
}
