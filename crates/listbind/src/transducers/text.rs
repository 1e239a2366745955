//! Plain token items.

use listbind_support::{NamespaceScope, SerializationContext, Transducer, TransducerError};

use crate::whitespace::is_xml_whitespace;

/// Whitespace-free string tokens (`xs:token` items, `xs:NMTOKENS`).
///
/// A string that is empty or contains XML whitespace has no single-token
/// form, so printing it fails instead of silently splitting the item.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenTransducer;

impl TokenTransducer {
    pub fn new() -> Self {
        Self
    }
}

impl Transducer for TokenTransducer {
    type Item = String;

    fn print(
        &self,
        item: &String,
        _ctx: &mut SerializationContext,
    ) -> Result<String, TransducerError> {
        if item.is_empty() {
            return Err(TransducerError::unrepresentable(
                "token",
                "an empty string has no token form",
            ));
        }
        if item.chars().any(is_xml_whitespace) {
            return Err(TransducerError::unrepresentable(
                "token",
                format!("`{}` contains whitespace", item.escape_debug()),
            ));
        }
        Ok(item.clone())
    }

    fn parse(&self, token: &str, _scope: &NamespaceScope) -> Result<String, TransducerError> {
        Ok(token.to_string())
    }
}
