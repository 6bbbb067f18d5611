use crate::domain::{AppError, IgnoreConfig, ManifestTemplate, TypeScriptConfig};

/// Source of the static configuration records.
///
/// Records are loaded once per run and never mutated; the manifest template
/// is the only one that gets a derived copy.
pub trait ConfigTemplateStore {
    fn manifest_template(&self) -> Result<ManifestTemplate, AppError>;

    fn typescript_config(&self) -> Result<TypeScriptConfig, AppError>;

    fn ignore_config(&self) -> Result<IgnoreConfig, AppError>;
}
