use std::path::PathBuf;
use std::process::Command;

use crate::domain::{AppError, DependencyKind, Specifier};
use crate::ports::PackageManager;

/// Shells out to the `npm` binary with output attached to the terminal.
///
/// Each invocation blocks until the child exits; a non-zero exit aborts the
/// caller's sequence, leaving whatever npm wrote on disk.
#[derive(Debug, Clone)]
pub struct NpmCommandAdapter {
    root: PathBuf,
}

impl NpmCommandAdapter {
    /// Create an adapter operating in the given project root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn run(&self, args: &[&str]) -> Result<(), AppError> {
        let rendered = format!("npm {}", args.join(" "));

        let status = Command::new("npm")
            .args(args)
            .current_dir(&self.root)
            .status()
            .map_err(|err| AppError::PackageManager {
                command: rendered.clone(),
                details: err.to_string(),
            })?;

        if !status.success() {
            return Err(AppError::PackageManager {
                command: rendered,
                details: format!("exited with {}", status),
            });
        }

        Ok(())
    }
}

impl PackageManager for NpmCommandAdapter {
    fn init_manifest(&self) -> Result<(), AppError> {
        self.run(&["init", "-y"])
    }

    fn install(&self, specifiers: &[Specifier], kind: DependencyKind) -> Result<(), AppError> {
        let mut args = vec!["install".to_string()];
        if kind == DependencyKind::Development {
            args.push("--save-dev".to_string());
        }
        args.extend(specifiers.iter().map(Specifier::to_string));

        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.run(&args)
    }
}
