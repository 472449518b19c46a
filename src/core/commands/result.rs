//! Command execution result type.

use crate::models::{NodeId, OpenAction, OutputLine};

/// Result of executing a command.
///
/// Commands produce output and may request a directory change, a clear of the
/// output log, or an open action. The terminal applies all of it in one step.
#[derive(Clone, Debug, Default)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// New current directory (e.g., for `cd` command)
    pub navigate_to: Option<NodeId>,
    /// Discard the whole output log, this command's echo included
    pub clear: bool,
    /// Effect requested by `open`
    pub open: Option<OpenAction>,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            ..Self::default()
        }
    }

    /// Create a result that changes the current directory.
    pub fn navigate(dir: NodeId) -> Self {
        Self {
            navigate_to: Some(dir),
            ..Self::default()
        }
    }

    /// Create a result that empties the output log.
    pub fn clear() -> Self {
        Self {
            clear: true,
            ..Self::default()
        }
    }

    /// Create a result carrying an open action.
    pub fn open(action: OpenAction) -> Self {
        Self {
            open: Some(action),
            ..Self::default()
        }
    }

    /// Create an empty result.
    pub fn empty() -> Self {
        Self::default()
    }
}
