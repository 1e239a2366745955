//! Output-side serialization context.
//!
//! A [`SerializationContext`] is created by the caller for one output pass and
//! passed explicitly to every operation that needs it. It plays two roles:
//!
//! - **Namespace declarations**: transducers declare the namespace URIs their
//!   lexical forms refer to. The context allocates a prefix for each new URI
//!   and records the declaration so the surrounding serializer can emit it.
//! - **Error sink**: item conversion failures that must not abort the output
//!   are reported here together with an optional field reference.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::config::ContextConfig;
use crate::error::{ConfigError, TransducerError};
use crate::namespace::{XML_NAMESPACE, is_ncname};

/// A prefix bound to a namespace URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamespaceDeclaration {
    pub prefix: String,
    pub uri: String,
}

impl NamespaceDeclaration {
    pub fn new(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }
}

/// A non-fatal error reported during output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportedError {
    /// The field the error relates to, when the reporter knows it.
    pub field: Option<String>,
    #[serde(serialize_with = "serialize_display")]
    pub error: TransducerError,
}

fn serialize_display<S>(error: &TransducerError, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(error)
}

/// Collects namespace declarations and reported errors for one output pass.
#[derive(Debug)]
pub struct SerializationContext {
    config: ContextConfig,
    /// uri -> prefix for everything in scope, predeclared or declared here
    prefixes: HashMap<String, String>,
    /// prefix -> uri, to keep allocated prefixes unique
    uris: HashMap<String, String>,
    declared: Vec<NamespaceDeclaration>,
    errors: Vec<ReportedError>,
    dropped_errors: usize,
    next_prefix: usize,
}

impl Default for SerializationContext {
    fn default() -> Self {
        Self::new(ContextConfig::default())
    }
}

impl SerializationContext {
    /// Creates a context from `config` as given.
    ///
    /// The configuration is trusted: an invalid `prefix_stem` or predeclared
    /// binding produces invalid prefixes on output. Use [`try_new`] for
    /// configurations that did not come through
    /// [`ContextConfig::from_json_str`] or [`ContextConfig::validate`].
    ///
    /// [`try_new`]: SerializationContext::try_new
    pub fn new(config: ContextConfig) -> Self {
        let mut prefixes = HashMap::new();
        let mut uris = HashMap::new();
        for decl in &config.predeclared {
            prefixes
                .entry(decl.uri.clone())
                .or_insert_with(|| decl.prefix.clone());
            uris.insert(decl.prefix.clone(), decl.uri.clone());
        }

        Self {
            config,
            prefixes,
            uris,
            declared: Vec::new(),
            errors: Vec::new(),
            dropped_errors: 0,
            next_prefix: 1,
        }
    }

    /// Validates `config` before creating the context.
    pub fn try_new(config: ContextConfig) -> Result<Self, ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Makes `uri` available on output and returns the prefix bound to it.
    ///
    /// A URI already in scope keeps its prefix and produces no new
    /// declaration. Otherwise `preferred` is used when it is a free, valid
    /// prefix, and a generated `{stem}{n}` prefix is allocated when it is not.
    /// The empty URI maps to the empty prefix and is never declared.
    pub fn declare_namespace(&mut self, uri: &str, preferred: Option<&str>) -> String {
        if uri.is_empty() {
            return String::new();
        }
        if uri == XML_NAMESPACE {
            return "xml".to_string();
        }
        if let Some(prefix) = self.prefixes.get(uri) {
            return prefix.clone();
        }

        let prefix = match preferred {
            Some(p) if self.is_free_prefix(p) => p.to_string(),
            _ => self.allocate_prefix(),
        };

        trace!(prefix = %prefix, uri = %uri, "declared namespace");
        self.prefixes.insert(uri.to_string(), prefix.clone());
        self.uris.insert(prefix.clone(), uri.to_string());
        self.declared.push(NamespaceDeclaration::new(prefix.clone(), uri));
        prefix
    }

    /// Prefix currently bound to `uri`, if any.
    pub fn prefix_for(&self, uri: &str) -> Option<&str> {
        if uri == XML_NAMESPACE {
            return Some("xml");
        }
        self.prefixes.get(uri).map(String::as_str)
    }

    /// URI that unprefixed names resolve to at the output position, or `""`
    /// when they are in no namespace.
    pub fn default_namespace(&self) -> &str {
        self.uris.get("").map(String::as_str).unwrap_or("")
    }

    /// Declarations made through this context, in declaration order.
    /// Predeclared bindings are not included.
    pub fn declarations(&self) -> &[NamespaceDeclaration] {
        &self.declared
    }

    /// Drains the declarations made so far, leaving their bindings in scope.
    pub fn take_declarations(&mut self) -> Vec<NamespaceDeclaration> {
        std::mem::take(&mut self.declared)
    }

    /// Records a non-fatal error.
    pub fn report_error(&mut self, field: Option<&str>, error: TransducerError) {
        warn!(field = ?field, error = %error, "item conversion error reported");

        if let Some(limit) = self.config.max_reported_errors {
            if self.errors.len() >= limit {
                self.dropped_errors += 1;
                return;
            }
        }
        self.errors.push(ReportedError {
            field: field.map(str::to_string),
            error,
        });
    }

    pub fn errors(&self) -> &[ReportedError] {
        &self.errors
    }

    /// Number of reports discarded because of `max_reported_errors`.
    pub fn dropped_errors(&self) -> usize {
        self.dropped_errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.dropped_errors > 0
    }

    pub fn take_errors(&mut self) -> Vec<ReportedError> {
        self.dropped_errors = 0;
        std::mem::take(&mut self.errors)
    }

    fn is_free_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty()
            && is_ncname(prefix)
            && !prefix.to_ascii_lowercase().starts_with("xml")
            && !self.uris.contains_key(prefix)
    }

    fn allocate_prefix(&mut self) -> String {
        loop {
            let candidate = format!("{}{}", self.config.prefix_stem, self.next_prefix);
            self.next_prefix += 1;
            if !self.uris.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}
