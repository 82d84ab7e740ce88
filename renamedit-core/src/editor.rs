use crate::config::Config;
use crate::error::{RenameditError, Result};
use crate::interrupt::EditorSessionGuard;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

/// Editor used when neither `EDITOR` nor the config names one.
pub const DEFAULT_EDITOR: &str = "vim";

/// Editors that return immediately unless told to block until the file is closed.
/// Terminal editors (vim, nano, emacs, ...) wait by default and are not listed.
const EDITOR_WAIT_FLAGS: &[(&str, &str)] = &[
    ("code", "--wait"),
    ("subl", "--wait"),
    ("zeditor", "--wait"),
    ("atom", "--wait"),
    ("gedit", "--standalone"),
];

/// Something that lets the user edit the listing file in place.
pub trait Editor {
    /// Block until the user is done editing `path`.
    fn edit(&self, path: &Path) -> Result<()>;
}

/// Look up the built-in wait flag for an editor program name.
pub fn builtin_wait_flag(program: &str) -> Option<&'static str> {
    EDITOR_WAIT_FLAGS
        .iter()
        .find(|(name, _)| *name == program)
        .map(|(_, flag)| *flag)
}

/// Bare program name used for the wait-flag lookup: `/usr/bin/code` -> `code`,
/// `subl.exe` -> `subl`.
fn program_name(program: &str) -> &str {
    let name = Path::new(program)
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or(program);

    for suffix in [".exe", ".cmd", ".bat"] {
        if name.len() > suffix.len() && name.to_ascii_lowercase().ends_with(suffix) {
            return &name[..name.len() - suffix.len()];
        }
    }
    name
}

/// An external editor process with inherited standard streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalEditor {
    pub program: String,
    pub args: Vec<String>,
}

impl ExternalEditor {
    /// Parse an editor command line such as `"code -n"`. Returns `None` when blank.
    pub fn parse(command: &str) -> Option<Self> {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }

    /// Pick the editor from `EDITOR` (passed in as `env_editor`), then the
    /// config default, then [`DEFAULT_EDITOR`], and add its wait flag.
    pub fn resolve(env_editor: Option<&str>, config: &Config) -> Self {
        let mut editor = env_editor
            .and_then(Self::parse)
            .or_else(|| config.defaults.editor.as_deref().and_then(Self::parse))
            .unwrap_or_else(|| Self {
                program: DEFAULT_EDITOR.to_string(),
                args: Vec::new(),
            });

        if let Some(flag) = editor.wait_flag(&config.editor_flags) {
            if !editor.args.iter().any(|arg| arg == &flag) {
                editor.args.push(flag);
            }
        }

        editor
    }

    /// Flag that makes this editor block, preferring configured overrides.
    pub fn wait_flag(&self, overrides: &BTreeMap<String, String>) -> Option<String> {
        let name = program_name(&self.program);
        overrides
            .get(name)
            .cloned()
            .or_else(|| builtin_wait_flag(name).map(str::to_string))
            .filter(|flag| !flag.is_empty())
    }

    /// Build the process invocation for `path`.
    pub fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl Editor for ExternalEditor {
    fn edit(&self, path: &Path) -> Result<()> {
        let _session = EditorSessionGuard::activate();

        let status = self.command(path).status().map_err(|e| {
            RenameditError::Editor(format!("failed to start '{}': {}", self.program, e))
        })?;

        if !status.success() {
            return Err(RenameditError::Editor(format!(
                "'{}' {}",
                self.program, status
            )));
        }

        Ok(())
    }
}
