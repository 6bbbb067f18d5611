use std::fmt;

/// Which dependency table of the manifest an install request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Runtime,
    Development,
}

impl DependencyKind {
    /// Manifest key holding this table.
    pub fn manifest_key(&self) -> &'static str {
        match self {
            DependencyKind::Runtime => "dependencies",
            DependencyKind::Development => "devDependencies",
        }
    }
}

/// A package-manager install argument: `name` or `name@version`.
///
/// An empty version string in the manifest means "latest" and renders as the
/// bare package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier {
    name: String,
    version: Option<String>,
}

impl Specifier {
    /// Build a specifier from a manifest dependency entry.
    pub fn new(name: &str, version: &str) -> Self {
        let version = if version.is_empty() { None } else { Some(version.to_string()) };
        Self { name: name.to_string(), version }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@{}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}
