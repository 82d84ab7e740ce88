//! The editable listing: one file name per line in a temporary text file.
//!
//! In extension-ignoring mode only base names are written and the stripped
//! extensions are kept on the [`FileEntry`] so they can be re-attached after
//! editing.

use crate::error::{RenameditError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempPath;

const LISTING_PREFIX: &str = "rename-";
const LISTING_SUFFIX: &str = ".txt";

/// A file as it was listed, paired by position with one line of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub original_name: String,
    /// Stripped extension including the dot, or empty when nothing was stripped.
    pub extension: String,
}

impl FileEntry {
    pub fn new(original_name: String, ignore_ext: bool) -> Self {
        let extension = if ignore_ext {
            split_extension(&original_name).1.to_string()
        } else {
            String::new()
        };

        Self {
            original_name,
            extension,
        }
    }

    /// The text shown to the user for this entry.
    pub fn listed_name(&self) -> &str {
        &self.original_name[..self.original_name.len() - self.extension.len()]
    }

    /// Re-attach the stripped extension to an edited line.
    pub fn target_name(&self, edited: &str) -> String {
        format!("{}{}", edited, self.extension)
    }
}

/// Split `name` at the last `.` that is not the first character.
///
/// ```
/// use renamedit_core::split_extension;
///
/// assert_eq!(split_extension("photo.jpg"), ("photo", ".jpg"));
/// assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
/// assert_eq!(split_extension(".bashrc"), (".bashrc", ""));
/// assert_eq!(split_extension("Makefile"), ("Makefile", ""));
/// ```
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

pub fn build_entries(names: Vec<String>, ignore_ext: bool) -> Vec<FileEntry> {
    names
        .into_iter()
        .map(|name| FileEntry::new(name, ignore_ext))
        .collect()
}

/// Render the listing text, one line per entry.
pub fn render_listing(entries: &[FileEntry]) -> String {
    let mut content = String::new();
    for entry in entries {
        content.push_str(entry.listed_name());
        content.push('\n');
    }
    content
}

/// Write the listing to a fresh temporary file.
///
/// The file handle is closed before returning so the editor gets exclusive
/// access. The returned [`TempPath`] removes the file when dropped.
pub fn write_listing(entries: &[FileEntry]) -> Result<TempPath> {
    let mut file = tempfile::Builder::new()
        .prefix(LISTING_PREFIX)
        .suffix(LISTING_SUFFIX)
        .tempfile()
        .map_err(|e| RenameditError::io("Error creating temporary file", e))?;

    file.write_all(render_listing(entries).as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| RenameditError::io("Error writing temporary file", e))?;

    Ok(file.into_temp_path())
}

/// Read the edited listing back.
pub fn read_listing(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .map_err(|e| RenameditError::io("Error reading temporary file", e))?;
    Ok(parse_listing(&content))
}

/// Trimmed, non-empty lines in order.
pub fn parse_listing(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
