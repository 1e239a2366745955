//! Error types for the binding capabilities.
//!
//! Two failure kinds cross the capability boundary: [`AccessorError`] for
//! host property reads and writes, which are always fatal to the operation in
//! progress, and [`TransducerError`] for item-level conversions, whose
//! handling depends on the direction of the conversion.

// Variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use std::fmt;

use thiserror::Error;

/// Failure to read or write the bound property on a host value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessorError {
    #[error("failed to read property `{property}`: {reason}")]
    Read { property: String, reason: String },

    #[error("failed to write property `{property}`: {reason}")]
    Write { property: String, reason: String },
}

impl AccessorError {
    pub fn read(property: impl Into<String>, reason: impl fmt::Display) -> Self {
        AccessorError::Read {
            property: property.into(),
            reason: reason.to_string(),
        }
    }

    pub fn write(property: impl Into<String>, reason: impl fmt::Display) -> Self {
        AccessorError::Write {
            property: property.into(),
            reason: reason.to_string(),
        }
    }
}

/// Item-level conversion failure raised by a [`Transducer`](crate::Transducer)
/// or while iterating a sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransducerError {
    /// The token is not a valid lexical value of the item type.
    #[error("invalid {type_name} value `{token}`: {reason}")]
    InvalidLexical {
        type_name: &'static str,
        token: String,
        reason: String,
    },

    /// The item has no lexical form that fits in a single list token.
    #[error("{type_name} value cannot be written as a list token: {reason}")]
    Unrepresentable {
        type_name: &'static str,
        reason: String,
    },

    #[error("namespace prefix `{prefix}` is not bound")]
    UnboundPrefix { prefix: String },

    #[error("{0}")]
    Custom(String),
}

impl TransducerError {
    pub fn invalid(type_name: &'static str, token: &str, reason: impl fmt::Display) -> Self {
        TransducerError::InvalidLexical {
            type_name,
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn unrepresentable(type_name: &'static str, reason: impl fmt::Display) -> Self {
        TransducerError::Unrepresentable {
            type_name,
            reason: reason.to_string(),
        }
    }
}

impl From<String> for TransducerError {
    fn from(msg: String) -> Self {
        TransducerError::Custom(msg)
    }
}

impl From<&str> for TransducerError {
    fn from(msg: &str) -> Self {
        TransducerError::Custom(msg.to_string())
    }
}

/// Errors raised while loading a [`ContextConfig`](crate::ContextConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}
