//! Qualified names and prefix resolution.

use std::collections::HashMap;
use std::fmt;

/// Namespace URI permanently bound to the `xml` prefix.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Namespace URI of the `xmlns` pseudo-attribute, which can never be declared.
pub const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";

/// XML Schema namespace.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// A namespace-qualified name.
///
/// `prefix` is only a hint for output; equality ignores it, so two names that
/// differ only in the prefix they were written with compare equal.
#[derive(Debug, Clone, Eq)]
pub struct QName {
    pub namespace_uri: String,
    pub local_part: String,
    pub prefix: Option<String>,
}

impl QName {
    pub fn new(namespace_uri: impl Into<String>, local_part: impl Into<String>) -> Self {
        Self {
            namespace_uri: namespace_uri.into(),
            local_part: local_part.into(),
            prefix: None,
        }
    }

    /// Name with no namespace.
    pub fn local(local_part: impl Into<String>) -> Self {
        Self::new("", local_part)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

impl PartialEq for QName {
    fn eq(&self, other: &Self) -> bool {
        self.namespace_uri == other.namespace_uri && self.local_part == other.local_part
    }
}

impl std::hash::Hash for QName {
    fn hash<S: std::hash::Hasher>(&self, state: &mut S) {
        self.namespace_uri.hash(state);
        self.local_part.hash(state);
    }
}

/// Clark notation: `{uri}local`, or just `local` without a namespace.
impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace_uri.is_empty() {
            write!(f, "{}", self.local_part)
        } else {
            write!(f, "{{{}}}{}", self.namespace_uri, self.local_part)
        }
    }
}

/// Prefix bindings in effect where a lexical value was read.
///
/// The empty prefix holds the default namespace. `xml` is always bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceScope {
    bindings: HashMap<String, String>,
}

impl NamespaceScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binding(mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        self.bind(prefix, uri);
        self
    }

    pub fn with_default_namespace(self, uri: impl Into<String>) -> Self {
        self.with_binding("", uri)
    }

    /// Binds `prefix` to `uri`, replacing any previous binding.
    pub fn bind(&mut self, prefix: impl Into<String>, uri: impl Into<String>) {
        self.bindings.insert(prefix.into(), uri.into());
    }

    pub fn resolve(&self, prefix: &str) -> Option<&str> {
        if prefix == "xml" {
            return Some(XML_NAMESPACE);
        }
        self.bindings.get(prefix).map(String::as_str)
    }

    /// URI applied to unprefixed names; empty when none is declared.
    pub fn default_namespace(&self) -> &str {
        self.bindings.get("").map(String::as_str).unwrap_or("")
    }
}

/// Checks whether `name` is an XML NCName (a name without colons).
pub fn is_ncname(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '\u{B7}'))
}
