use crate::reconcile::{RenameOp, RenameOutcome};
use nu_ansi_term::{Color as AnsiColor, Style};
use std::path::PathBuf;

/// Result of an edit operation
#[derive(Debug)]
pub struct EditResult {
    pub directory: PathBuf,
    pub files_listed: usize,
    /// Renames derived from the edited listing, in listing order.
    pub planned: Vec<RenameOp>,
    /// One entry per attempted rename. Empty for dry runs.
    pub outcomes: Vec<RenameOutcome>,
    pub dry_run: bool,
    /// Set when an interrupt stopped the batch before every planned rename ran.
    pub interrupted: bool,
}

impl EditResult {
    pub fn renamed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_err()).count()
    }

    /// One line per planned rename, for dry runs.
    pub fn format_planned(&self, use_color: bool) -> Vec<String> {
        self.planned
            .iter()
            .map(|op| {
                format!(
                    "{} {} -> {}",
                    paint(use_color, AnsiColor::Yellow, "Would rename:"),
                    op.from,
                    op.to
                )
            })
            .collect()
    }

    fn format_summary_line(&self) -> String {
        if self.files_listed == 0 {
            return format!("No files to rename in {}", self.directory.display());
        }
        if self.planned.is_empty() {
            return "No changes".to_string();
        }
        if self.dry_run {
            return format!("Dry run: {} renames planned", self.planned.len());
        }

        let mut line = format!(
            "{} renamed, {} failed",
            self.renamed_count(),
            self.failed_count()
        );
        let skipped = self.planned.len() - self.outcomes.len();
        if skipped > 0 {
            line.push_str(&format!(", {} skipped", skipped));
        }
        line
    }

    pub fn format_summary(&self, use_color: bool) -> String {
        let line = self.format_summary_line();
        if use_color && self.failed_count() > 0 {
            Style::new().bold().paint(line).to_string()
        } else {
            line
        }
    }
}

/// Line reported for a single attempted rename.
pub fn format_outcome(outcome: &RenameOutcome, use_color: bool) -> String {
    match outcome {
        Ok(op) => format!(
            "{} {} -> {}",
            paint(use_color, AnsiColor::Green, "Renamed:"),
            op.from,
            op.to
        ),
        Err(err) => {
            let line = err.to_string();
            if use_color {
                AnsiColor::Red.paint(line).to_string()
            } else {
                line
            }
        },
    }
}

fn paint(use_color: bool, color: AnsiColor, text: &str) -> String {
    if use_color {
        color.paint(text).to_string()
    } else {
        text.to_string()
    }
}
