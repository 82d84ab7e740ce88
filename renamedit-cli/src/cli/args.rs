use clap::Parser;
use std::path::PathBuf;

/// Bulk rename files by editing their names in your text editor
#[derive(Parser, Debug)]
#[command(name = "renamedit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "The editor is taken from $EDITOR, falling back to the config file, then vim.")]
pub struct Cli {
    /// Directory whose files should be renamed
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Ignore file extensions when renaming (only base names are shown in the editor)
    #[arg(short = 'i', long)]
    pub ignore_ext: bool,

    /// Show what would be renamed without renaming anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Don't print the summary line
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Append a timestamped line for every attempted rename to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH", env = renamedit_core::CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}
