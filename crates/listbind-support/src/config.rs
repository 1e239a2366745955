//! Configuration for [`SerializationContext`](crate::SerializationContext).
//!
//! # Example
//!
//! ```rust
//! use listbind_support::ContextConfig;
//!
//! let config = ContextConfig::from_json_str(
//!     r#"{
//!         "prefix_stem": "p",
//!         "predeclared": [{ "prefix": "xs", "uri": "http://www.w3.org/2001/XMLSchema" }]
//!     }"#,
//! )?;
//! assert_eq!(config.prefix_stem, "p");
//! assert_eq!(config.max_reported_errors, None);
//! # Ok::<(), listbind_support::ConfigError>(())
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::context::NamespaceDeclaration;
use crate::error::ConfigError;
use crate::namespace::{XML_NAMESPACE, XMLNS_NAMESPACE, is_ncname};

/// Settings for one serialization context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Stem for generated prefixes: `ns` yields `ns1`, `ns2`, ...
    pub prefix_stem: String,

    /// Bindings already in scope at the output position. Declaring one of
    /// these URIs reuses its prefix and emits no new declaration.
    pub predeclared: Vec<NamespaceDeclaration>,

    /// Maximum number of error reports retained. Reports past the limit are
    /// counted but dropped. `None` keeps everything.
    pub max_reported_errors: Option<usize>,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            prefix_stem: "ns".to_string(),
            predeclared: Vec::new(),
            max_reported_errors: None,
        }
    }
}

impl ContextConfig {
    /// Parses a JSON document and validates the result.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ContextConfig = serde_json::from_str(json)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    pub fn with_predeclared(mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        self.predeclared.push(NamespaceDeclaration::new(prefix, uri));
        self
    }

    pub fn with_max_reported_errors(mut self, limit: usize) -> Self {
        self.max_reported_errors = Some(limit);
        self
    }

    /// Validates the configuration and returns every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !is_ncname(&self.prefix_stem) {
            errors.push(format!(
                "Prefix stem `{}` is not a valid NCName",
                self.prefix_stem
            ));
        } else if self.prefix_stem.to_ascii_lowercase().starts_with("xml") {
            errors.push("Prefix stem cannot start with `xml`".to_string());
        }

        let mut seen = HashSet::new();
        for decl in &self.predeclared {
            if !decl.prefix.is_empty() && !is_ncname(&decl.prefix) {
                errors.push(format!("Prefix `{}` is not a valid NCName", decl.prefix));
            }
            if decl.prefix == "xml" || decl.prefix == "xmlns" {
                errors.push(format!("Prefix `{}` is reserved", decl.prefix));
            }
            if decl.uri == XML_NAMESPACE || decl.uri == XMLNS_NAMESPACE {
                errors.push(format!("Namespace `{}` cannot be declared", decl.uri));
            }
            if !decl.prefix.is_empty() && decl.uri.is_empty() {
                errors.push(format!("Prefix `{}` cannot be bound to no namespace", decl.prefix));
            }
            if !seen.insert(decl.prefix.as_str()) {
                errors.push(format!("Prefix `{}` is declared more than once", decl.prefix));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
