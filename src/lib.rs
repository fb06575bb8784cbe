//! Ordered collections backed by generational arenas.
//!
//! [`OrderedTree`] is a binary search tree that also remembers the order
//! its keys arrived in; [`Roster`] is a doubly linked list of names kept
//! in alphabetical order. Both store their nodes in a single arena, so
//! links are plain indices and teardown drops everything at once.
//!
//! [`loader`] reads the plain-text data formats, [`report`] renders
//! transcript-style output, and [`cli`] wires both into the `ordtree`
//! binary.

pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod loader;
pub mod report;
pub mod roster;
pub mod tree;
pub mod util;

pub use config::Settings;
pub use errors::{DataError, DataResult};
pub use loader::{load_roster, load_tree, parse_ops};
pub use report::TreeRender;
pub use roster::{Roster, RosterOp};
pub use tree::OrderedTree;
