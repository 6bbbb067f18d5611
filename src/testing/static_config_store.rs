use crate::domain::{AppError, IgnoreConfig, ManifestTemplate, TypeScriptConfig};
use crate::ports::ConfigTemplateStore;

/// Config template store serving records built directly by tests.
pub struct StaticConfigStore {
    manifest: ManifestTemplate,
    typescript: TypeScriptConfig,
    ignore: IgnoreConfig,
}

impl StaticConfigStore {
    pub fn from_json(manifest: &str, typescript: &str, ignore: &str) -> Self {
        Self {
            manifest: ManifestTemplate::from_json(manifest).expect("manifest template json"),
            typescript: TypeScriptConfig::from_json(typescript).expect("typescript config json"),
            ignore: IgnoreConfig::from_json(ignore).expect("ignore config json"),
        }
    }
}

impl ConfigTemplateStore for StaticConfigStore {
    fn manifest_template(&self) -> Result<ManifestTemplate, AppError> {
        Ok(self.manifest.clone())
    }

    fn typescript_config(&self) -> Result<TypeScriptConfig, AppError> {
        Ok(self.typescript.clone())
    }

    fn ignore_config(&self) -> Result<IgnoreConfig, AppError> {
        Ok(self.ignore.clone())
    }
}
