use anyhow::{anyhow, Context, Result};
use renamedit_core::{edit_operation, format_outcome, Config, EditOptions, ExternalEditor};
use std::path::{Path, PathBuf};

use crate::cli::Cli;

pub fn handle_edit(cli: &Cli, use_color: bool) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let options = EditOptions {
        ignore_ext: cli.ignore_ext || config.defaults.ignore_ext,
        dry_run: cli.dry_run,
        log_file: cli
            .log_file
            .clone()
            .or_else(|| config.defaults.log_file.clone()),
    };

    let env_editor = std::env::var("EDITOR").ok();
    let editor = ExternalEditor::resolve(env_editor.as_deref(), &config);

    let result = edit_operation(&cli.directory, &options, &editor)?;

    if result.dry_run {
        for line in result.format_planned(use_color) {
            println!("{}", line);
        }
    }

    for outcome in &result.outcomes {
        let line = format_outcome(outcome, use_color);
        if outcome.is_ok() {
            println!("{}", line);
        } else {
            eprintln!("{}", line);
        }
    }

    if !cli.quiet {
        eprintln!("{}", result.format_summary(use_color));
    }

    if result.interrupted {
        return Err(anyhow!("Interrupted before all renames were performed"));
    }

    Ok(())
}

/// Load the explicit config if one was given, otherwise the per-user config
/// when it exists.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    match default_config_path() {
        Some(path) => Config::load_or_default(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("renamedit").join("config.toml"))
}
