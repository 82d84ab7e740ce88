use crate::error::{RenameditError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// List the names of the immediate non-directory children of `dir`.
///
/// Symlinks are listed as files regardless of what they point to. Names are
/// sorted so the listing (and the positional pairing that depends on it) is
/// stable across platforms.
pub fn list_files(dir: &Path) -> Result<Vec<String>> {
    let metadata = match fs::metadata(dir) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(RenameditError::NotFound {
                path: dir.to_path_buf(),
            })
        },
        Err(e) => {
            return Err(RenameditError::io(
                format!("Failed to read {}", dir.display()),
                e,
            ))
        },
    };

    if !metadata.is_dir() {
        return Err(RenameditError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let read_err =
        |e: io::Error| RenameditError::io(format!("Error reading directory {}", dir.display()), e);

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if entry.file_type().map_err(read_err)?.is_dir() {
            continue;
        }

        let name = entry
            .file_name()
            .into_string()
            .map_err(|raw| RenameditError::InvalidName {
                name: raw.to_string_lossy().into_owned(),
                reason: "name is not valid UTF-8",
            })?;

        if name.contains(['\n', '\r']) {
            return Err(RenameditError::InvalidName {
                name,
                reason: "name contains a line break",
            });
        }

        names.push(name);
    }

    names.sort();
    Ok(names)
}
