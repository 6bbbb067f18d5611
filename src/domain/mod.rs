pub mod error;
pub mod manifest;
pub mod project;
pub mod specifier;

pub use error::AppError;
pub use manifest::{DerivedManifest, IgnoreConfig, ManifestTemplate, TypeScriptConfig};
pub use project::{
    DEFAULT_PROJECT_NAME, ENV_FILE, IGNORE_FILE, PACKAGE_MANIFEST, ProjectName, SOURCE_DIR,
    SOURCE_PLACEHOLDER, TYPESCRIPT_CONFIG,
};
pub use specifier::{DependencyKind, Specifier};
