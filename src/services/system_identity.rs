use std::env;
use std::process::Command;

use crate::ports::IdentitySource;

/// Ambient identity backed by git configuration and the OS environment.
#[derive(Debug, Clone, Default)]
pub struct SystemIdentity;

impl SystemIdentity {
    pub fn new() -> Self {
        Self
    }
}

impl IdentitySource for SystemIdentity {
    /// Scoped `git config --get user.name` query with output captured.
    /// Every failure mode collapses to `None`.
    fn vcs_user_name(&self) -> Option<String> {
        let output = Command::new("git").args(["config", "--get", "user.name"]).output().ok()?;
        if !output.status.success() {
            return None;
        }

        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if name.is_empty() { None } else { Some(name) }
    }

    fn account_name(&self) -> String {
        env::var("USER").or_else(|_| env::var("USERNAME")).unwrap_or_default()
    }
}
