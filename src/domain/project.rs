use std::fmt;

/// File name of the package manifest in the target directory.
pub const PACKAGE_MANIFEST: &str = "package.json";

/// File name of the type-checker configuration.
pub const TYPESCRIPT_CONFIG: &str = "tsconfig.json";

/// File name of the version-control ignore file.
pub const IGNORE_FILE: &str = ".gitignore";

/// File name of the environment-variable placeholder.
pub const ENV_FILE: &str = ".env";

/// Name of the scaffolded source directory.
pub const SOURCE_DIR: &str = "src";

/// Placeholder file written into a newly created source directory.
pub const SOURCE_PLACEHOLDER: &str = "index.ts";

/// Manifest name used when no project name is given on the command line.
pub const DEFAULT_PROJECT_NAME: &str = "my-typescript-project";

/// Project name as written into the manifest, lower-cased on construction.
///
/// No further validation is applied; the package manager is the authority on
/// what it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Normalize a raw name.
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    /// Resolve the optional CLI argument, falling back to the default name.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(raw) => Self::new(raw),
            None => Self::new(DEFAULT_PROJECT_NAME),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
