//! Tab autocomplete for the first argument of a command line.
//!
//! The argument is treated as a path: everything up to the last `/` names the
//! directory to search, the rest is a name prefix. Matching children are found
//! in insertion order and the input is extended by the longest extension all
//! of them share. When nothing can be added the caller decides whether to list
//! the matches (see [`crate::app::Terminal::autocomplete`]).

use crate::core::VirtualFs;
use crate::core::parser::{split_path, word_ranges};
use crate::models::NodeId;

// ============================================================================
// Public Types
// ============================================================================

/// Outcome of the completion computation for one input.
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    /// Input extended by an unambiguous suffix.
    Extended(String),
    /// Several matches share no further characters.
    Ambiguous(Vec<NodeId>),
    /// Nothing to complete: no argument, unknown directory, no match, or the
    /// single match is already fully typed.
    None,
}

/// Result of a Tab press after the needs-help state machine ran.
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteResult {
    /// Buffer replaced with this completed line.
    Completed(String),
    /// Ambiguous matches; the next consecutive Tab lists them.
    Armed,
    /// Ambiguous matches were listed in the output log.
    Listed,
    /// Nothing happened.
    None,
}

// ============================================================================
// Public API
// ============================================================================

/// Compute the completion of the first argument of `input`.
///
/// With no argument typed yet, completion starts from an empty prefix only
/// when the input ends in whitespace (`"cd "`); otherwise it is a no-op.
pub fn complete(input: &str, fs: &VirtualFs, cwd: NodeId, user: &str) -> Completion {
    let words = word_ranges(input);
    let (argument, insert_at) = match words.get(1) {
        Some(range) => (&input[range.clone()], range.end),
        None if words.len() == 1 && input.ends_with(char::is_whitespace) => ("", input.len()),
        None => return Completion::None,
    };

    let mut segments = split_path(argument);
    let prefix = segments.pop().unwrap_or_default();

    let (start, dir_segments) = fs.anchor(cwd, user, &segments);
    let Ok(dir) = fs.resolve_directory(start, &dir_segments) else {
        return Completion::None;
    };

    let matches: Vec<NodeId> = fs
        .children(dir)
        .iter()
        .copied()
        .filter(|&id| fs.name(id).starts_with(prefix.as_str()))
        .collect();
    if matches.is_empty() {
        return Completion::None;
    }

    let names: Vec<&str> = matches.iter().map(|&id| fs.name(id)).collect();
    let extension = common_extension(&names, prefix.chars().count());

    if !extension.is_empty() {
        let mut completed = String::with_capacity(input.len() + extension.len());
        completed.push_str(&input[..insert_at]);
        completed.push_str(&extension);
        completed.push_str(&input[insert_at..]);
        Completion::Extended(completed)
    } else if matches.len() == 1 {
        Completion::None
    } else {
        Completion::Ambiguous(matches)
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Longest run of characters after the first `skip` that every name shares.
fn common_extension(names: &[&str], skip: usize) -> String {
    let Some((first, rest)) = names.split_first() else {
        return String::new();
    };

    let mut extension: Vec<char> = first.chars().skip(skip).collect();
    for name in rest {
        let shared = extension
            .iter()
            .zip(name.chars().skip(skip))
            .take_while(|(a, b)| **a == *b)
            .count();
        extension.truncate(shared);
    }

    extension.into_iter().collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SeedDirectory, SeedLink, SeedNode};

    fn create_test_fs() -> (VirtualFs, NodeId) {
        let seed = SeedDirectory::new(
            "",
            vec![SeedNode::Directory(SeedDirectory::new(
                "home",
                vec![SeedNode::Directory(SeedDirectory::new(
                    "justin",
                    vec![
                        SeedNode::Directory(SeedDirectory::new(
                            "Desktop",
                            vec![
                                SeedNode::Link(SeedLink::new("QLearning_Snake", "https://q")),
                                SeedNode::Link(SeedLink::new("Multiplayer_Snake", "https://m")),
                                SeedNode::Link(SeedLink::new("MGH_Stocks", "https://s")),
                            ],
                        )),
                        SeedNode::Directory(SeedDirectory::new("Documents", vec![])),
                        SeedNode::Directory(SeedDirectory::new("Downloads", vec![])),
                    ],
                ))],
            ))],
        );
        let fs = VirtualFs::from_seed(&seed).unwrap();
        let home = fs.home("justin");
        (fs, home)
    }

    #[test]
    fn test_common_extension() {
        assert_eq!(common_extension(&["hello", "help", "helicopter"], 2), "l");
        assert_eq!(common_extension(&["Documents", "Downloads"], 1), "o");
        assert_eq!(common_extension(&["Desktop"], 2), "sktop");
        assert_eq!(common_extension(&["foo", "foobar"], 3), "");
        assert_eq!(common_extension(&[], 0), "");
    }

    #[test]
    fn test_single_match() {
        let (fs, home) = create_test_fs();
        assert_eq!(
            complete("cd Des", &fs, home, "justin"),
            Completion::Extended("cd Desktop".to_string())
        );
        assert_eq!(
            complete("cd Desktop", &fs, home, "justin"),
            Completion::None
        );
    }

    #[test]
    fn test_partial_extension() {
        let (fs, home) = create_test_fs();
        assert_eq!(
            complete("cd D", &fs, home, "justin"),
            Completion::Ambiguous(vec![
                fs.resolve(home, &["Desktop"]).unwrap(),
                fs.resolve(home, &["Documents"]).unwrap(),
                fs.resolve(home, &["Downloads"]).unwrap(),
            ])
        );
        assert_eq!(
            complete("cd Do", &fs, home, "justin"),
            Completion::Ambiguous(vec![
                fs.resolve(home, &["Documents"]).unwrap(),
                fs.resolve(home, &["Downloads"]).unwrap(),
            ])
        );
        assert_eq!(
            complete("open Desktop/M", &fs, home, "justin"),
            Completion::Ambiguous(vec![
                fs.resolve(home, &["Desktop", "Multiplayer_Snake"]).unwrap(),
                fs.resolve(home, &["Desktop", "MGH_Stocks"]).unwrap(),
            ])
        );
        assert_eq!(
            complete("open Desktop/Mu", &fs, home, "justin"),
            Completion::Extended("open Desktop/Multiplayer_Snake".to_string())
        );
    }

    #[test]
    fn test_nested_and_anchored_paths() {
        let (fs, home) = create_test_fs();
        let root = fs.root();
        assert_eq!(
            complete("open ~/Desktop/Q", &fs, root, "justin"),
            Completion::Extended("open ~/Desktop/QLearning_Snake".to_string())
        );
        assert_eq!(
            complete("cd /ho", &fs, home, "justin"),
            Completion::Extended("cd /home".to_string())
        );
        assert_eq!(
            complete("cd ../ju", &fs, home, "justin"),
            Completion::Extended("cd ../justin".to_string())
        );
    }

    #[test]
    fn test_only_first_argument() {
        let (fs, home) = create_test_fs();
        assert_eq!(
            complete("mkdir Des other", &fs, home, "justin"),
            Completion::Extended("mkdir Desktop other".to_string())
        );
    }

    #[test]
    fn test_no_argument() {
        let (fs, home) = create_test_fs();
        assert_eq!(complete("", &fs, home, "justin"), Completion::None);
        assert_eq!(complete("cd", &fs, home, "justin"), Completion::None);
        // Desktop, Documents and Downloads all start with "D".
        assert_eq!(
            complete("cd\u{a0}", &fs, home, "justin"),
            Completion::Extended("cd\u{a0}D".to_string())
        );
    }

    #[test]
    fn test_unresolvable_directory() {
        let (fs, home) = create_test_fs();
        assert_eq!(complete("cd nope/x", &fs, home, "justin"), Completion::None);
        assert_eq!(complete("cd zzz", &fs, home, "justin"), Completion::None);
    }
}
