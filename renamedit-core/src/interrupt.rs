use std::sync::atomic::{AtomicBool, Ordering};

/// Tracks whether an editor child process currently owns the terminal.
static EDITOR_SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Set by signal handlers; checked once the editor returns and between renames.
static INTERRUPT_REQUESTED: AtomicBool = AtomicBool::new(false);

/// RAII helper that marks the editor session as active while it is in scope.
pub struct EditorSessionGuard;

impl EditorSessionGuard {
    /// Activate the editor session state until the guard is dropped.
    pub fn activate() -> Self {
        EDITOR_SESSION_ACTIVE.store(true, Ordering::SeqCst);
        Self
    }
}

impl Drop for EditorSessionGuard {
    fn drop(&mut self) {
        EDITOR_SESSION_ACTIVE.store(false, Ordering::SeqCst);
    }
}

/// Returns true while the user is inside the editor.
pub fn editor_session_active() -> bool {
    EDITOR_SESSION_ACTIVE.load(Ordering::SeqCst)
}

/// Record that the user asked to stop. Safe to call from a signal handler.
pub fn request_interrupt() {
    INTERRUPT_REQUESTED.store(true, Ordering::SeqCst);
}

/// SIGINT handler body. Ctrl-C reaches the editor too, which handles it
/// itself (vim uses it to leave insert mode), so it is ignored while an
/// editor session is active. Safe to call from a signal handler.
pub fn handle_sigint() {
    if !editor_session_active() {
        request_interrupt();
    }
}

pub fn interrupt_requested() -> bool {
    INTERRUPT_REQUESTED.load(Ordering::SeqCst)
}
