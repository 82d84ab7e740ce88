//! High-level operations that correspond to CLI invocations
//!
//! These modules contain the core business logic for each renamedit operation,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod edit;

pub use edit::{edit_operation, EditOptions};
