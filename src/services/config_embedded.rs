//! Configuration records embedded in the binary.

use include_dir::{Dir, include_dir};

use crate::domain::{AppError, IgnoreConfig, ManifestTemplate, TypeScriptConfig};
use crate::ports::ConfigTemplateStore;

static CONFIG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/configs");

const MANIFEST_TEMPLATE_FILE: &str = "npm_config.json";
const TYPESCRIPT_CONFIG_FILE: &str = "ts_config.json";
const IGNORE_CONFIG_FILE: &str = "git_config.json";

/// Config template store reading from the embedded asset bundle.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedConfigStore;

impl EmbeddedConfigStore {
    pub fn new() -> Self {
        Self
    }

    fn asset(file: &str) -> Result<&'static str, AppError> {
        CONFIG_DIR.get_file(file).and_then(|entry| entry.contents_utf8()).ok_or_else(|| {
            AppError::InvalidConfigAsset {
                file: file.to_string(),
                details: "missing from embedded bundle".to_string(),
            }
        })
    }

    fn parse_error(file: &str, err: serde_json::Error) -> AppError {
        AppError::InvalidConfigAsset { file: file.to_string(), details: err.to_string() }
    }
}

impl ConfigTemplateStore for EmbeddedConfigStore {
    fn manifest_template(&self) -> Result<ManifestTemplate, AppError> {
        ManifestTemplate::from_json(Self::asset(MANIFEST_TEMPLATE_FILE)?)
            .map_err(|err| Self::parse_error(MANIFEST_TEMPLATE_FILE, err))
    }

    fn typescript_config(&self) -> Result<TypeScriptConfig, AppError> {
        TypeScriptConfig::from_json(Self::asset(TYPESCRIPT_CONFIG_FILE)?)
            .map_err(|err| Self::parse_error(TYPESCRIPT_CONFIG_FILE, err))
    }

    fn ignore_config(&self) -> Result<IgnoreConfig, AppError> {
        IgnoreConfig::from_json(Self::asset(IGNORE_CONFIG_FILE)?)
            .map_err(|err| Self::parse_error(IGNORE_CONFIG_FILE, err))
    }
}
