//! Loads trees and rosters from plain-text data files.
//!
//! Tree files carry one integer key per line; roster files carry one
//! `<name> <code>` operation per line, where the code is `a` (add) or
//! `d` (delete). Blank lines are skipped in both formats, anything else
//! malformed is rejected with the offending line number.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::errors::{DataError, DataResult};
use crate::roster::{Roster, RosterOp};
use crate::tree::OrderedTree;

fn ensure_data_file(path: &Path) -> DataResult<()> {
    if !path.exists() {
        return Err(DataError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(DataError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

fn open_data_file(path: &Path) -> DataResult<BufReader<File>> {
    ensure_data_file(path)?;
    let file = File::open(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Read integer keys from `path` and insert them into a fresh tree.
///
/// Duplicate keys are dropped by the tree itself; the loader only logs
/// them. An empty file yields an empty tree.
#[instrument(level = "debug")]
pub fn load_tree(path: &Path) -> DataResult<OrderedTree> {
    let reader = open_data_file(path)?;

    let mut tree = OrderedTree::new();
    let mut total = 0usize;
    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let key: i64 = text.parse().map_err(|_| DataError::InvalidKey {
            path: path.to_path_buf(),
            line: number + 1,
            text: text.to_string(),
        })?;
        total += 1;
        if !tree.insert(key) {
            debug!("dropping duplicate key {} read from {}", key, path.display());
        }
    }

    info!(
        "loaded {} distinct keys out of {} from {}",
        tree.len(),
        total,
        path.display()
    );
    Ok(tree)
}

/// Parse roster operations from `path` without applying them.
#[instrument(level = "debug")]
pub fn parse_ops(path: &Path) -> DataResult<Vec<RosterOp>> {
    let reader = open_data_file(path)?;

    let mut ops = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        ops.push(parse_op_line(path, number + 1, text)?);
    }

    debug!("parsed {} operations from {}", ops.len(), path.display());
    Ok(ops)
}

/// Read roster operations from `path` and apply them in file order.
///
/// Additions of present names and deletions of absent ones are no-ops;
/// they are logged and skipped rather than treated as errors.
#[instrument(level = "debug")]
pub fn load_roster(path: &Path) -> DataResult<Roster> {
    let ops = parse_ops(path)?;

    let mut roster = Roster::new();
    for op in &ops {
        if !roster.apply(op) {
            debug!("operation had no effect: {:?}", op);
        }
    }

    info!(
        "roster holds {} names after {} operations from {}",
        roster.len(),
        ops.len(),
        path.display()
    );
    Ok(roster)
}

fn parse_op_line(path: &Path, line: usize, text: &str) -> DataResult<RosterOp> {
    let mut parts = text.split_whitespace();
    let name = parts.next();
    let code = parts.next();
    let extra = parts.next();

    match (name, code, extra) {
        (Some(name), Some(code), None) => match code {
            "a" => Ok(RosterOp::Add(name.to_string())),
            "d" => Ok(RosterOp::Remove(name.to_string())),
            other => Err(DataError::InvalidOp {
                path: path.to_path_buf(),
                line,
                reason: format!("unknown operation code {:?}", other),
            }),
        },
        _ => Err(DataError::InvalidOp {
            path: path.to_path_buf(),
            line,
            reason: format!("expected '<name> <a|d>', got {:?}", text),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn parse(text: &str) -> DataResult<RosterOp> {
        parse_op_line(&PathBuf::from("ops.data"), 1, text)
    }

    #[test]
    fn test_parse_op_line_add() {
        assert_eq!(parse("Riley a").unwrap(), RosterOp::Add("Riley".to_string()));
    }

    #[test]
    fn test_parse_op_line_delete() {
        assert_eq!(parse("Riley d").unwrap(), RosterOp::Remove("Riley".to_string()));
    }

    #[test]
    fn test_parse_op_line_rejects_unknown_code() {
        let err = parse("Riley x").unwrap_err();
        assert!(matches!(err, DataError::InvalidOp { line: 1, .. }));
    }

    #[test]
    fn test_parse_op_line_rejects_missing_code() {
        assert!(parse("Riley").is_err());
    }

    #[test]
    fn test_parse_op_line_rejects_trailing_tokens() {
        assert!(parse("Riley a extra").is_err());
    }
}
