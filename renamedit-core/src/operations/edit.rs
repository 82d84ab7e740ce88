use crate::editor::Editor;
use crate::error::{RenameditError, Result};
use crate::interrupt::interrupt_requested;
use crate::listing::{build_entries, read_listing, write_listing};
use crate::lister::list_files;
use crate::log::RenameLog;
use crate::output::EditResult;
use crate::reconcile::{apply_renames, plan_renames};
use std::path::{Path, PathBuf};

/// Options for an edit operation
#[derive(Debug, Clone, Default)]
pub struct EditOptions {
    /// Hide extensions in the listing and re-attach them afterwards
    pub ignore_ext: bool,
    /// Plan the renames but don't perform them
    pub dry_run: bool,
    /// Append every attempted rename to this file
    pub log_file: Option<PathBuf>,
}

/// High-level edit operation - equivalent to `renamedit <dir>`
///
/// Lists `dir`, lets the user edit the listing through `editor`, then renames
/// every file whose line changed. Any error returned from here happened
/// before the first rename; individual rename failures are in the result.
pub fn edit_operation(
    dir: &Path,
    options: &EditOptions,
    editor: &dyn Editor,
) -> Result<EditResult> {
    let names = list_files(dir)?;
    let files_listed = names.len();

    if names.is_empty() {
        return Ok(EditResult {
            directory: dir.to_path_buf(),
            files_listed,
            planned: Vec::new(),
            outcomes: Vec::new(),
            dry_run: options.dry_run,
            interrupted: false,
        });
    }

    // Open the log up front so a bad path fails before the user starts editing
    let mut log = if options.dry_run {
        RenameLog::disabled()
    } else {
        RenameLog::open(options.log_file.as_deref())?
    };

    let entries = build_entries(names, options.ignore_ext);

    // Removed when dropped, including on early returns and panics
    let listing = write_listing(&entries)?;

    editor.edit(&listing)?;

    if interrupt_requested() {
        return Err(RenameditError::Interrupted);
    }

    let edited = read_listing(&listing)?;
    let planned = plan_renames(&entries, &edited)?;

    let outcomes = if options.dry_run {
        Vec::new()
    } else {
        apply_renames(dir, &planned, &mut log)
    };
    let interrupted = !options.dry_run && outcomes.len() < planned.len();

    Ok(EditResult {
        directory: dir.to_path_buf(),
        files_listed,
        planned,
        outcomes,
        dry_run: options.dry_run,
        interrupted,
    })
}
