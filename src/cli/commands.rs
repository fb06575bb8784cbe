//! Command dispatch: resolves file arguments against settings and runs
//! the corresponding library calls.

use std::fmt::Display;
use std::io;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, RosterCommands, TreeCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{self, Settings, SettingsError};
use crate::loader;
use crate::report::{self, TreeRender};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree { command }) => execute_tree(command),
        Some(Commands::Roster { command }) => execute_roster(command),
        Some(Commands::Config { command }) => execute_config(command),
        Some(Commands::Info) => execute_info(),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    }
}

fn print_completions(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// File argument wins over the configured default.
fn resolve(file: &Option<PathBuf>, default: PathBuf) -> PathBuf {
    let path = match file {
        Some(path) => path.clone(),
        None => default,
    };
    debug!("data file: {}", path.display());
    path
}

fn print_lines<T: Display>(mut items: impl Iterator<Item = T>) {
    let body = items.join("\n");
    if !body.is_empty() {
        output::info(&body);
    }
}

#[instrument]
fn execute_tree(command: &TreeCommands) -> CliResult<()> {
    let settings = Settings::load()?;
    match command {
        TreeCommands::Show { file } => {
            let tree = loader::load_tree(&resolve(file, settings.tree_file))?;
            output::info(&report::render_traversals(&tree));
        }
        TreeCommands::Inorder { file } => {
            let tree = loader::load_tree(&resolve(file, settings.tree_file))?;
            print_lines(tree.iter_inorder());
        }
        TreeCommands::Preorder { file } => {
            let tree = loader::load_tree(&resolve(file, settings.tree_file))?;
            print_lines(tree.iter_preorder());
        }
        TreeCommands::Postorder { file } => {
            let tree = loader::load_tree(&resolve(file, settings.tree_file))?;
            print_lines(tree.iter_postorder());
        }
        TreeCommands::Insertion { file } => {
            let tree = loader::load_tree(&resolve(file, settings.tree_file))?;
            print_lines(tree.iter_insertion());
        }
        TreeCommands::View { file } => {
            let tree = loader::load_tree(&resolve(file, settings.tree_file))?;
            output::info(&tree.to_tree_string());
        }
        TreeCommands::Stats { file } => {
            let tree = loader::load_tree(&resolve(file, settings.tree_file))?;
            output::info(&report::render_stats(&tree));
        }
    }
    Ok(())
}

#[instrument]
fn execute_roster(command: &RosterCommands) -> CliResult<()> {
    let settings = Settings::load()?;
    match command {
        RosterCommands::Show { file } => {
            let roster = loader::load_roster(&resolve(file, settings.roster_file))?;
            output::info(&report::render_roster(&roster));
        }
        RosterCommands::Forward { file } => {
            let roster = loader::load_roster(&resolve(file, settings.roster_file))?;
            print_lines(roster.iter_forward());
        }
        RosterCommands::Backward { file } => {
            let roster = loader::load_roster(&resolve(file, settings.roster_file))?;
            print_lines(roster.iter_backward());
        }
    }
    Ok(())
}

#[instrument]
fn execute_config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            print!("{}", settings.to_toml()?);
        }
        ConfigCommands::Path => match config::global_config_path() {
            Some(path) if path.exists() => output::info(&path.display()),
            Some(path) => output::info(&format!("{} (not created)", path.display())),
            None => output::warning("cannot determine config directory"),
        },
        ConfigCommands::Init => config_init()?,
    }
    Ok(())
}

fn config_init() -> CliResult<()> {
    let path = config::global_config_path().ok_or_else(|| SettingsError {
        message: "cannot determine config directory".to_string(),
    })?;

    if path.exists() {
        output::warning(&format!("config already exists: {}", path.display()));
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SettingsError {
            message: format!("create {}: {}", parent.display(), e),
        })?;
    }
    std::fs::write(&path, Settings::template()).map_err(|e| SettingsError {
        message: format!("write {}: {}", path.display(), e),
    })?;

    output::success(&format!("created {}", path.display()));
    Ok(())
}

fn execute_info() -> CliResult<()> {
    let settings = Settings::load()?;
    for line in info_lines(&settings) {
        output::info(&line);
    }
    Ok(())
}

fn info_lines(settings: &Settings) -> Vec<String> {
    let cmd = Cli::command();
    let mut lines = Vec::new();
    if let Some(author) = cmd.get_author() {
        lines.push(format!("AUTHOR: {}", author));
    }
    if let Some(version) = cmd.get_version() {
        lines.push(format!("VERSION: {}", version));
    }
    match config::global_config_path() {
        Some(path) if path.exists() => lines.push(format!("CONFIG: {}", path.display())),
        Some(path) => lines.push(format!("CONFIG: {} (not created)", path.display())),
        None => {}
    }
    lines.push(format!("TREE_FILE: {}", settings.tree_file.display()));
    lines.push(format!("ROSTER_FILE: {}", settings.roster_file.display()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_lines_include_configured_data_files() {
        let settings = Settings::default();

        let lines = info_lines(&settings);

        assert!(lines.iter().any(|line| line.starts_with("VERSION: ")));
        assert!(lines.contains(&"TREE_FILE: tree.data".to_string()));
        assert!(lines.contains(&"ROSTER_FILE: roster.data".to_string()));
    }
}
