//! Pair the original entries with the edited lines and turn the differences
//! into renames.
//!
//! Lines are matched to files purely by position, so the edited listing must
//! have exactly as many lines as there were files.

use crate::error::{RenameError, RenameditError, Result};
use crate::interrupt::interrupt_requested;
use crate::listing::FileEntry;
use crate::log::RenameLog;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::process;

/// A rename within the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOp {
    pub from: String,
    pub to: String,
}

pub type RenameOutcome = std::result::Result<RenameOp, RenameError>;

/// Compute the renames implied by the edited listing.
///
/// Fails without planning anything if the line count differs from the entry
/// count. Lines whose effective name equals the original produce no rename.
pub fn plan_renames(entries: &[FileEntry], edited: &[String]) -> Result<Vec<RenameOp>> {
    if entries.len() != edited.len() {
        return Err(RenameditError::CountMismatch {
            expected: entries.len(),
            actual: edited.len(),
        });
    }

    Ok(entries
        .iter()
        .zip(edited)
        .filter_map(|(entry, line)| {
            // Lines come back trimmed, so an untouched line for a name with
            // surrounding whitespace must still count as unchanged
            if line == entry.listed_name().trim() {
                return None;
            }
            let to = entry.target_name(line);
            (to != entry.original_name).then(|| RenameOp {
                from: entry.original_name.clone(),
                to,
            })
        })
        .collect())
}

/// Perform `ops` in order inside `dir`, continuing past failures.
///
/// Stops early (leaving the remaining ops unattempted) if an interrupt was
/// requested.
pub fn apply_renames(dir: &Path, ops: &[RenameOp], log: &mut RenameLog) -> Vec<RenameOutcome> {
    let mut outcomes = Vec::with_capacity(ops.len());

    for op in ops {
        if interrupt_requested() {
            log.log("Interrupted, remaining renames skipped");
            break;
        }

        match rename_entry(dir, op) {
            Ok(()) => {
                log.log(&format!("Renamed {} -> {}", op.from, op.to));
                outcomes.push(Ok(op.clone()));
            },
            Err(source) => {
                let err = RenameError {
                    from: op.from.clone(),
                    to: op.to.clone(),
                    source,
                };
                log.log(&err.to_string());
                outcomes.push(Err(err));
            },
        }
    }

    outcomes
}

fn rename_entry(dir: &Path, op: &RenameOp) -> io::Result<()> {
    // `Path::join` replaces `dir` when the new name is rooted
    if Path::new(&op.to)
        .components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
    {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "new name must be relative to the directory",
        ));
    }

    let from = dir.join(&op.from);
    let to = dir.join(&op.to);

    let case_only = op.from.to_lowercase() == op.to.to_lowercase();

    // On case-insensitive filesystems `to` "exists" for a case-only rename
    // because it is the same file; only a distinct entry is a collision.
    let collides = if case_only {
        entry_named(dir, &op.to)?
    } else {
        to.symlink_metadata().is_ok()
    };

    if collides {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "destination already exists",
        ));
    }

    if case_only {
        // Two-step rename so case-only changes work on case-insensitive filesystems
        let temp = case_rename_temp(dir);
        if temp.symlink_metadata().is_ok() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "temporary name already in use",
            ));
        }
        fs::rename(&from, &temp)?;
        if let Err(e) = fs::rename(&temp, &to) {
            let _ = fs::rename(&temp, &from);
            return Err(e);
        }
        Ok(())
    } else {
        fs::rename(&from, &to)
    }
}

/// Intermediate name for case-only renames. Kept short so it fits wherever
/// the original name did.
fn case_rename_temp(dir: &Path) -> PathBuf {
    dir.join(format!(".renamedit-{}.tmp", process::id()))
}

/// True if `dir` has an entry whose name is exactly `name`.
fn entry_named(dir: &Path, name: &str) -> io::Result<bool> {
    for entry in fs::read_dir(dir)? {
        if entry?.file_name() == name {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::build_entries;
    use tempfile::TempDir;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn op(from: &str, to: &str) -> RenameOp {
        RenameOp {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn test_unchanged_listing_plans_nothing() {
        let entries = build_entries(names(&["a.txt", "b.txt"]), false);
        let ops = plan_renames(&entries, &names(&["a.txt", "b.txt"])).unwrap();
        assert!(ops.is_empty());

        let entries = build_entries(names(&["a.txt", "b.txt"]), true);
        let ops = plan_renames(&entries, &names(&["a", "b"])).unwrap();
        assert!(ops.is_empty());
    }

    #[test]
    fn test_changed_lines_plan_one_rename_each() {
        let entries = build_entries(names(&["a.txt", "b.txt", "c.txt"]), false);
        let ops = plan_renames(&entries, &names(&["a.txt", "bee.txt", "sea.md"])).unwrap();
        assert_eq!(ops, vec![op("b.txt", "bee.txt"), op("c.txt", "sea.md")]);
    }

    #[test]
    fn test_extensions_are_reattached() {
        let entries = build_entries(names(&["photo.jpg", "README", ".profile"]), true);
        let ops = plan_renames(&entries, &names(&["holiday", "README.md", ".zprofile"])).unwrap();
        assert_eq!(
            ops,
            vec![
                op("photo.jpg", "holiday.jpg"),
                op("README", "README.md"),
                op(".profile", ".zprofile"),
            ]
        );
    }

    #[test]
    fn test_untouched_line_with_surrounding_whitespace() {
        let entries = build_entries(names(&[" padded.txt", "plain.txt"]), false);
        let ops = plan_renames(&entries, &names(&["padded.txt", "plain.txt"])).unwrap();
        assert!(ops.is_empty());

        let ops = plan_renames(&entries, &names(&["trimmed.txt", "plain.txt"])).unwrap();
        assert_eq!(ops, vec![op(" padded.txt", "trimmed.txt")]);
    }

    #[test]
    fn test_count_mismatch() {
        let entries = build_entries(names(&["a", "b", "c"]), false);

        let err = plan_renames(&entries, &names(&["a", "b"])).unwrap_err();
        assert!(matches!(
            err,
            RenameditError::CountMismatch {
                expected: 3,
                actual: 2
            }
        ));

        let err = plan_renames(&entries, &names(&["a", "b", "c", "d"])).unwrap_err();
        assert!(matches!(err, RenameditError::CountMismatch { .. }));
    }

    #[test]
    fn test_apply_renames() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "bee").unwrap();

        let outcomes = apply_renames(
            temp_dir.path(),
            &[op("b.txt", "bee.txt")],
            &mut RenameLog::disabled(),
        );

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].as_ref().unwrap(), &op("b.txt", "bee.txt"));
        assert!(!temp_dir.path().join("b.txt").exists());
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("bee.txt")).unwrap(),
            "bee"
        );
    }

    #[test]
    fn test_failure_does_not_stop_the_batch() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        fs::write(temp_dir.path().join("c.txt"), "c").unwrap();

        let outcomes = apply_renames(
            temp_dir.path(),
            &[op("a.txt", "b.txt"), op("c.txt", "d.txt")],
            &mut RenameLog::disabled(),
        );

        let err = outcomes[0].as_ref().unwrap_err();
        assert_eq!(err.source.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(
            err.to_string(),
            "Failed to rename a.txt to b.txt: destination already exists"
        );
        assert!(outcomes[1].is_ok());

        // Nothing was overwritten
        assert_eq!(fs::read_to_string(temp_dir.path().join("a.txt")).unwrap(), "a");
        assert_eq!(fs::read_to_string(temp_dir.path().join("b.txt")).unwrap(), "b");
        assert!(temp_dir.path().join("d.txt").exists());
    }

    #[test]
    fn test_missing_source_is_reported() {
        let temp_dir = TempDir::new().unwrap();

        let outcomes = apply_renames(
            temp_dir.path(),
            &[op("gone.txt", "here.txt")],
            &mut RenameLog::disabled(),
        );
        assert!(outcomes[0].is_err());
    }

    #[test]
    fn test_case_only_rename() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("readme.md"), "docs").unwrap();

        let outcomes = apply_renames(
            temp_dir.path(),
            &[op("readme.md", "README.md")],
            &mut RenameLog::disabled(),
        );

        assert!(outcomes[0].is_ok());
        let listed: Vec<String> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(listed, vec!["README.md"]);
    }

    #[test]
    fn test_rooted_new_name_stays_in_directory() {
        let temp_dir = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        let escaped = elsewhere.path().join("moved.txt");

        let entries = build_entries(names(&["a.txt"]), false);
        let ops = plan_renames(&entries, &[escaped.display().to_string()]).unwrap();
        let outcomes = apply_renames(temp_dir.path(), &ops, &mut RenameLog::disabled());

        let err = outcomes[0].as_ref().unwrap_err();
        assert_eq!(err.source.kind(), io::ErrorKind::InvalidInput);
        assert!(!escaped.exists());
        assert_eq!(fs::read_to_string(temp_dir.path().join("a.txt")).unwrap(), "a");
    }

    #[test]
    fn test_case_only_rename_of_long_name() {
        let temp_dir = TempDir::new().unwrap();
        let lower = format!("{}.md", "a".repeat(250));
        let upper = lower.to_uppercase();
        fs::write(temp_dir.path().join(&lower), "long").unwrap();

        let outcomes = apply_renames(
            temp_dir.path(),
            &[op(&lower, &upper)],
            &mut RenameLog::disabled(),
        );

        assert!(outcomes[0].is_ok());
        assert_eq!(fs::read_to_string(temp_dir.path().join(&upper)).unwrap(), "long");
    }

    #[test]
    fn test_case_only_rename_keeps_existing_temp_name() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("readme.md"), "docs").unwrap();
        let temp = case_rename_temp(temp_dir.path());
        fs::write(&temp, "unrelated").unwrap();

        let outcomes = apply_renames(
            temp_dir.path(),
            &[op("readme.md", "README.md")],
            &mut RenameLog::disabled(),
        );

        let err = outcomes[0].as_ref().unwrap_err();
        assert_eq!(err.source.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&temp).unwrap(), "unrelated");
        assert_eq!(fs::read_to_string(temp_dir.path().join("readme.md")).unwrap(), "docs");
    }

    #[test]
    fn test_renames_are_logged() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("renames.log");
        let work = temp_dir.path().join("work");
        fs::create_dir(&work).unwrap();
        fs::write(work.join("old"), "").unwrap();

        let mut log = RenameLog::open(Some(&log_path)).unwrap();
        apply_renames(&work, &[op("old", "new"), op("ghost", "spirit")], &mut log);
        drop(log);

        let content = fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("Renamed old -> new"));
        assert!(content.contains("Failed to rename ghost to spirit"));
    }
}
