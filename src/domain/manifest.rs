//! Configuration records persisted into the target project.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{AppError, DependencyKind, ProjectName, Specifier};

/// Package manifest template as shipped in the embedded assets.
///
/// Kept as a raw JSON object so the template controls its own key set; only
/// `name` and `author` are ever touched, by [`ManifestTemplate::derive`].
#[derive(Debug, Clone)]
pub struct ManifestTemplate {
    fields: Map<String, Value>,
}

impl ManifestTemplate {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let fields = serde_json::from_str(content)?;
        Ok(Self { fields })
    }

    /// Shallow-merge the resolved `name` and `author` over the template.
    ///
    /// Keys already present keep their original position, so the derived
    /// manifest serializes with the template's key order intact.
    pub fn derive(&self, name: &ProjectName, author: &str) -> DerivedManifest {
        let mut fields = self.fields.clone();
        fields.insert("name".to_string(), Value::String(name.as_str().to_string()));
        fields.insert("author".to_string(), Value::String(author.to_string()));
        DerivedManifest { fields }
    }
}

/// Manifest template with `name` and `author` resolved.
///
/// The dependency tables are read-only inputs to installation: never
/// reordered, deduplicated, or version-resolved here.
#[derive(Debug, Clone)]
pub struct DerivedManifest {
    fields: Map<String, Value>,
}

impl DerivedManifest {
    /// Pretty JSON with 2-space indent, no trailing newline.
    pub fn to_pretty_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(&self.fields)?)
    }

    /// Flatten one dependency table into install specifiers, in the table's
    /// insertion order. A missing or non-object table yields no specifiers.
    pub fn specifiers(&self, kind: DependencyKind) -> Vec<Specifier> {
        let Some(Value::Object(table)) = self.fields.get(kind.manifest_key()) else {
            return Vec::new();
        };

        table
            .iter()
            .map(|(name, version)| Specifier::new(name, version.as_str().unwrap_or("")))
            .collect()
    }

    #[cfg(test)]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Type-checker configuration persisted verbatim as `tsconfig.json`.
#[derive(Debug, Clone)]
pub struct TypeScriptConfig {
    fields: Map<String, Value>,
}

impl TypeScriptConfig {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let fields = serde_json::from_str(content)?;
        Ok(Self { fields })
    }

    /// Pretty JSON with 2-space indent, no trailing newline.
    pub fn to_pretty_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(&self.fields)?)
    }
}

/// Ordered ignore-file patterns.
#[derive(Debug, Clone, Deserialize)]
pub struct IgnoreConfig {
    ignore: Vec<String>,
}

impl IgnoreConfig {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Newline-joined patterns with a single trailing newline.
    pub fn render(&self) -> String {
        let mut content = self.ignore.join("\n");
        content.push('\n');
        content
    }
}
