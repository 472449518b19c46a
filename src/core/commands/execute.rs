//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results.

use log::debug;

use crate::config::{APP_NAME, APP_VERSION, HELP_TEXT};
use crate::core::VirtualFs;
use crate::core::error::ShellError;
use crate::core::parser::split_path;
use crate::models::{NodeId, NodeKind, OutputLine};

use super::{Command, CommandResult, PathArg};

/// Execute a parsed command.
///
/// # Arguments
///
/// * `cmd` - The parsed command to execute
/// * `fs` - Virtual filesystem (mutated by `mkdir` only)
/// * `cwd` - Current directory, for relative paths
/// * `user` - Session user, for `~` and `cd` without arguments
pub fn execute_command(cmd: Command, fs: &mut VirtualFs, cwd: NodeId, user: &str) -> CommandResult {
    match cmd {
        Command::Empty | Command::Exit => CommandResult::empty(),
        Command::Clear => CommandResult::clear(),
        Command::Help => execute_help(),
        Command::Pwd => CommandResult::output(vec![OutputLine::text(fs.display_path(cwd))]),
        Command::Ls => execute_ls(fs, cwd),
        Command::Cd(path) => execute_cd(path, fs, cwd, user),
        Command::Mkdir(paths) => execute_mkdir(&paths, fs, cwd, user),
        Command::Open(path) => execute_open(&path, fs, cwd, user),
        Command::Invalid(err) => error(err),
        Command::Unknown(cmd) => error(ShellError::UnknownCommand { cmd }),
    }
}

fn error(err: ShellError) -> CommandResult {
    CommandResult::output(vec![OutputLine::error(err.to_string())])
}

fn execute_help() -> CommandResult {
    let mut lines = vec![
        OutputLine::text(format!("{}, version {}", APP_NAME, APP_VERSION)),
        OutputLine::text(""),
    ];
    lines.extend(HELP_TEXT.lines().map(OutputLine::text));
    CommandResult::output(lines)
}

/// Execute `ls` command.
fn execute_ls(fs: &VirtualFs, cwd: NodeId) -> CommandResult {
    CommandResult::output(listing(fs, fs.children(cwd)))
}

/// One listing line per node, tagged by kind.
pub(crate) fn listing(fs: &VirtualFs, nodes: &[NodeId]) -> Vec<OutputLine> {
    nodes
        .iter()
        .map(|&id| {
            let node = fs.node(id);
            match node.kind {
                NodeKind::Directory { .. } => OutputLine::dir_entry(&node.name),
                NodeKind::File(_) => OutputLine::file_entry(&node.name),
            }
        })
        .collect()
}

/// Execute `cd` command.
fn execute_cd(path: Option<PathArg>, fs: &VirtualFs, cwd: NodeId, user: &str) -> CommandResult {
    let Some(path) = path else {
        return CommandResult::navigate(fs.home(user));
    };

    let (start, segments) = fs.anchor(cwd, user, &split_path(path.as_str()));
    match fs.resolve_directory(start, &segments) {
        Ok(dir) => CommandResult::navigate(dir),
        Err(_) => error(ShellError::NotFound {
            cmd: "cd".to_string(),
            arg: path.to_string(),
        }),
    }
}

/// Execute `mkdir` command. Each argument is handled independently.
fn execute_mkdir(paths: &[PathArg], fs: &mut VirtualFs, cwd: NodeId, user: &str) -> CommandResult {
    let output = paths
        .iter()
        .filter_map(|path| make_directory(path, fs, cwd, user).err())
        .map(|err| OutputLine::error(err.to_string()))
        .collect();
    CommandResult::output(output)
}

fn make_directory(
    path: &PathArg,
    fs: &mut VirtualFs,
    cwd: NodeId,
    user: &str,
) -> Result<NodeId, ShellError> {
    let cannot_create = |reason| ShellError::CannotCreate {
        cmd: "mkdir".to_string(),
        arg: path.to_string(),
        reason,
    };

    let mut segments = split_path(path.as_str());
    if segments.len() > 1 && segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    let name = segments.pop().unwrap_or_default();

    let (start, parent_segments) = fs.anchor(cwd, user, &segments);
    let parent = fs
        .resolve_directory(start, &parent_segments)
        .map_err(cannot_create)?;
    let created = fs.add_directory(parent, &name).map_err(cannot_create)?;
    debug!("mkdir {} -> {}", path, created);
    Ok(created)
}

/// Execute `open` command.
fn execute_open(path: &PathArg, fs: &VirtualFs, cwd: NodeId, user: &str) -> CommandResult {
    let not_found = || {
        error(ShellError::NotFound {
            cmd: "open".to_string(),
            arg: path.to_string(),
        })
    };

    let (start, segments) = fs.anchor(cwd, user, &split_path(path.as_str()));
    let Ok((file, _)) = fs.resolve_file(start, &segments) else {
        return not_found();
    };
    match fs.open(file) {
        Some(action) => CommandResult::open(action),
        None => not_found(),
    }
}
