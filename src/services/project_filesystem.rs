use std::fs;
use std::path::PathBuf;

use crate::domain::{
    AppError, ENV_FILE, IGNORE_FILE, PACKAGE_MANIFEST, SOURCE_DIR, SOURCE_PLACEHOLDER,
    TYPESCRIPT_CONFIG,
};
use crate::ports::ProjectStore;

/// Filesystem-backed project store rooted at the target directory.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    root: PathBuf,
}

impl FilesystemProjectStore {
    /// Create a store for the given project root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn manifest_exists(&self) -> bool {
        self.path(PACKAGE_MANIFEST).exists()
    }

    fn write_manifest(&self, content: &str) -> Result<(), AppError> {
        fs::write(self.path(PACKAGE_MANIFEST), content)?;
        Ok(())
    }

    fn write_typescript_config(&self, content: &str) -> Result<(), AppError> {
        fs::write(self.path(TYPESCRIPT_CONFIG), content)?;
        Ok(())
    }

    fn write_ignore_file(&self, content: &str) -> Result<(), AppError> {
        fs::write(self.path(IGNORE_FILE), content)?;
        Ok(())
    }

    fn write_env_file(&self, content: &str) -> Result<(), AppError> {
        fs::write(self.path(ENV_FILE), content)?;
        Ok(())
    }

    fn scaffold_source_dir(&self, placeholder: &str) -> Result<bool, AppError> {
        let dir = self.path(SOURCE_DIR);
        if dir.exists() {
            return Ok(false);
        }

        fs::create_dir(&dir)?;
        fs::write(dir.join(SOURCE_PLACEHOLDER), placeholder)?;
        Ok(true)
    }
}
