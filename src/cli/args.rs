//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Ordered collections workbench: search trees with insertion history and alphabetical rosters
#[derive(Parser, Debug)]
#[command(name = "ordtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect a search tree built from a key file
    Tree {
        #[command(subcommand)]
        command: TreeCommands,
    },

    /// Inspect a roster built from an operations file
    Roster {
        #[command(subcommand)]
        command: RosterCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show status
    Info,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Tree subcommands
#[derive(Subcommand, Debug)]
pub enum TreeCommands {
    /// Print all four key orderings
    Show {
        /// Key file (default: configured tree_file)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Print keys in ascending order
    Inorder {
        /// Key file (default: configured tree_file)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Print keys node-before-children
    Preorder {
        /// Key file (default: configured tree_file)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Print keys children-before-node
    Postorder {
        /// Key file (default: configured tree_file)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Print keys in first-insertion order
    Insertion {
        /// Key file (default: configured tree_file)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Sketch the tree shape
    View {
        /// Key file (default: configured tree_file)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Print key count, depth and value range
    Stats {
        /// Key file (default: configured tree_file)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },
}

/// Roster subcommands
#[derive(Subcommand, Debug)]
pub enum RosterCommands {
    /// Print the roster in both directions
    Show {
        /// Operations file (default: configured roster_file)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Print names head to tail
    Forward {
        /// Operations file (default: configured roster_file)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Print names tail to head
    Backward {
        /// Operations file (default: configured roster_file)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config paths
    Path,
}
