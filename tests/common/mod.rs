//! Shared testing utilities for tsnew CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Stub `npm` that records each invocation and succeeds silently.
const NPM_STUB: &str = "#!/bin/sh\necho \"npm $@\" >> \"$TSNEW_NPM_LOG\"\n";

/// Stub `git` whose config lookup always fails.
const GIT_STUB_UNSET: &str = "#!/bin/sh\nexit 1\n";

/// Isolated environment for CLI exercises: a temp working directory plus a
/// bin directory that shadows `npm` and `git` on PATH.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: ChildPath,
    bin_dir: ChildPath,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with default stubs.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.child("work");
        let bin_dir = root.child("bin");
        work_dir.create_dir_all().expect("Failed to create test work directory");
        bin_dir.create_dir_all().expect("Failed to create stub bin directory");

        let ctx = Self { root, work_dir, bin_dir };
        ctx.install_stub("npm", NPM_STUB);
        ctx.install_stub("git", GIT_STUB_UNSET);
        ctx
    }

    /// Install or replace a stub executable on the shadowing PATH entry.
    pub fn install_stub(&self, name: &str, script: &str) {
        let path = self.bin_dir.child(name);
        path.write_str(script).expect("Failed to write stub executable");

        let mut perms = fs::metadata(path.path()).expect("Failed to stat stub").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path.path(), perms).expect("Failed to mark stub executable");
    }

    /// Make the stub `git` answer the user.name query with the given value.
    pub fn set_git_user_name(&self, name: &str) {
        self.install_stub("git", &format!("#!/bin/sh\necho \"{}\"\n", name));
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.path()
    }

    /// Child path inside the work directory, for fixture setup and asserts.
    pub fn work_child(&self, name: &str) -> ChildPath {
        self.work_dir.child(name)
    }

    fn npm_log(&self) -> PathBuf {
        self.root.path().join("npm.log")
    }

    /// Every npm invocation recorded by the stub, one rendered line each.
    pub fn npm_invocations(&self) -> Vec<String> {
        fs::read_to_string(self.npm_log())
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Build a command for invoking the compiled `tsnew` binary within the
    /// work directory, stubs first on PATH.
    pub fn cli(&self) -> Command {
        let path = match std::env::var("PATH") {
            Ok(current) => format!("{}:{}", self.bin_dir.path().display(), current),
            Err(_) => self.bin_dir.path().display().to_string(),
        };

        let mut cmd = Command::cargo_bin("tsnew").expect("Failed to locate tsnew binary");
        cmd.current_dir(self.work_dir.path())
            .env("PATH", path)
            .env("TSNEW_NPM_LOG", self.npm_log())
            .env("USER", "fallback-account")
            .env_remove("USERNAME");
        cmd
    }

    /// Read a file from the work directory.
    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.path().join(name))
            .unwrap_or_else(|_| panic!("Failed to read {}", name))
    }

    /// Parse the written manifest.
    pub fn manifest_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_file("package.json")).expect("Failed to parse manifest")
    }
}
