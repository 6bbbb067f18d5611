use crate::domain::AppError;

/// Filesystem surface of the target project directory.
///
/// Every write except the source scaffold unconditionally replaces an
/// existing file of the same name.
pub trait ProjectStore {
    /// Whether a package manifest is already present.
    fn manifest_exists(&self) -> bool;

    /// Write the derived manifest, replacing whatever the package manager's
    /// own init produced.
    fn write_manifest(&self, content: &str) -> Result<(), AppError>;

    /// Write the type-checker configuration.
    fn write_typescript_config(&self, content: &str) -> Result<(), AppError>;

    /// Write the ignore file.
    fn write_ignore_file(&self, content: &str) -> Result<(), AppError>;

    /// Write the environment-variable placeholder.
    fn write_env_file(&self, content: &str) -> Result<(), AppError>;

    /// Create the source directory with its placeholder file.
    ///
    /// Returns `false` without touching anything when the directory already
    /// exists, even if it is empty.
    fn scaffold_source_dir(&self, placeholder: &str) -> Result<bool, AppError>;
}
