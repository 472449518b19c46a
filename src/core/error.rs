//! Custom error types for the shell.
//!
//! - [`FsError`] - Filesystem lookups and node creation
//! - [`ShellError`] - User-facing command failures, rendered as output lines
//! - [`SeedError`] - Defects in the seed tree, fatal at startup

use thiserror::Error;

/// Filesystem errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// A path segment is missing, or segments follow a file
    #[error("No such file or directory")]
    NotFound,
    /// A sibling with this name already exists
    #[error("File exists")]
    DuplicateName(String),
    /// Name can never be a node name
    #[error("Invalid name")]
    InvalidName(String),
}

/// Command errors. `Display` is the exact line shown in the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("{cmd}: {arg}: No such file or directory")]
    NotFound { cmd: String, arg: String },
    #[error("{cmd}: cannot create directory '{arg}': {reason}")]
    CannotCreate {
        cmd: String,
        arg: String,
        reason: FsError,
    },
    #[error("{cmd}: too many arguments")]
    TooManyArguments { cmd: String },
    #[error("{cmd}: missing operand")]
    MissingOperand { cmd: String },
    #[error("{cmd}: command not found")]
    UnknownCommand { cmd: String },
}

/// Errors raised while building the filesystem from a seed tree.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid seed descriptor: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate name in seed: {path}")]
    DuplicateName { path: String },
    #[error("invalid name in seed: {path:?}")]
    InvalidName { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_error_messages() {
        let err = ShellError::NotFound {
            cmd: "cd".into(),
            arg: "nowhere".into(),
        };
        assert_eq!(err.to_string(), "cd: nowhere: No such file or directory");

        let err = ShellError::CannotCreate {
            cmd: "mkdir".into(),
            arg: "foo".into(),
            reason: FsError::DuplicateName("foo".into()),
        };
        assert_eq!(
            err.to_string(),
            "mkdir: cannot create directory 'foo': File exists"
        );

        let err = ShellError::CannotCreate {
            cmd: "mkdir".into(),
            arg: "a/b".into(),
            reason: FsError::NotFound,
        };
        assert_eq!(
            err.to_string(),
            "mkdir: cannot create directory 'a/b': No such file or directory"
        );

        assert_eq!(
            ShellError::TooManyArguments { cmd: "cd".into() }.to_string(),
            "cd: too many arguments"
        );
        assert_eq!(
            ShellError::UnknownCommand { cmd: "foo".into() }.to_string(),
            "foo: command not found"
        );
    }
}
