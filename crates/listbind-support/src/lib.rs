//! # listbind-support
//!
//! Shared contracts for binding sequence-valued properties to XML list simple
//! types. This crate has no conversion logic of its own; it defines the
//! capabilities the `listbind` core consumes:
//!
//! | Capability | Role |
//! |------------|------|
//! | [`Transducer`] | converts one lexical token to and from one item value |
//! | [`Packer`] | iterates an existing sequence and builds a new one incrementally |
//! | [`Accessor`] | reads and writes the sequence-valued property on a host value |
//! | [`SerializationContext`] | collects namespace declarations and non-fatal item errors on output |
//! | [`NamespaceScope`] | resolves prefixes while parsing namespace-sensitive tokens |
//!
//! Implementations of these traits are selected per item type and collection
//! shape when a binding is set up, and are then used as plain values.

pub mod accessor;
pub mod config;
pub mod context;
pub mod error;
pub mod namespace;
pub mod packer;
pub mod transducer;

pub use accessor::Accessor;
pub use config::ContextConfig;
pub use context::{NamespaceDeclaration, ReportedError, SerializationContext};
pub use error::{AccessorError, ConfigError, TransducerError};
pub use namespace::{NamespaceScope, QName};
pub use packer::{ItemIter, Packer};
pub use transducer::Transducer;
