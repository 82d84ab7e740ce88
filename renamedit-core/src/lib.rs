#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod editor;
pub mod error;
pub mod interrupt;
pub mod lister;
pub mod listing;
pub mod log;
pub mod operations;
pub mod output;
pub mod reconcile;

pub use config::{Config, DefaultsConfig, CONFIG_ENV_VAR};
pub use editor::{builtin_wait_flag, Editor, ExternalEditor, DEFAULT_EDITOR};
pub use error::{RenameError, RenameditError, Result};
pub use interrupt::{
    editor_session_active, handle_sigint, interrupt_requested, request_interrupt,
    EditorSessionGuard,
};
pub use lister::list_files;
pub use listing::{
    build_entries, parse_listing, read_listing, render_listing, split_extension, write_listing,
    FileEntry,
};
pub use log::RenameLog;
pub use operations::{edit_operation, EditOptions};
pub use output::{format_outcome, EditResult};
pub use reconcile::{apply_renames, plan_renames, RenameOp, RenameOutcome};
