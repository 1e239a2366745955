//! # listbind
//!
//! Binding between sequence-valued properties and XML list simple types.
//!
//! An XML list simple type (`xs:list`) is written as whitespace-separated
//! tokens, each token the lexical form of one item:
//!
//! | Rust value | Lexical form |
//! |------------|--------------|
//! | `Some(vec![10, 20, 30])` | `"10 20 30"` |
//! | `Some(vec![])` | `""` |
//! | `None` | *(absent)* |
//! | `Some(vec![Some(1), None, Some(3)])` | `"1 3"` |
//!
//! ## Architecture
//!
//! [`ListTransducedAccessor`] combines three strategies from
//! [`listbind_support`]:
//!
//! - a [`Transducer`] converting single tokens (see [`transducers`]),
//! - a [`Packer`] owning the collection shape (see [`packers`]),
//! - an [`Accessor`] reading and writing the property (e.g. [`FieldAccessor`]).
//!
//! Output is tolerant: an item that fails to convert is reported to the
//! [`SerializationContext`] and skipped. Input is strict: the first token that
//! fails to parse aborts the whole parse and the host is left untouched.
//!
//! ## Example
//!
//! ```rust
//! use listbind::packers::VecPacker;
//! use listbind::transducers::IntegerTransducer;
//! use listbind::{FieldAccessor, ListTransducedAccessor, SerializationContext, TransducedAccessor};
//!
//! #[derive(Default)]
//! struct Sample {
//!     values: Option<Vec<i32>>,
//! }
//!
//! let accessor = ListTransducedAccessor::new(
//!     IntegerTransducer::<i32>::new(),
//!     FieldAccessor::new("values", |s: &Sample| s.values.as_ref(), |s, v| s.values = Some(v)),
//!     VecPacker::new(),
//! );
//!
//! let mut sample = Sample::default();
//! accessor.parse(&mut sample, "  10 20\t30\n")?;
//! assert_eq!(sample.values, Some(vec![10, 20, 30]));
//!
//! let mut ctx = SerializationContext::default();
//! assert_eq!(accessor.print(&sample, &mut ctx)?, Some("10 20 30".to_string()));
//! # Ok::<(), listbind::ListError>(())
//! ```

pub mod error;
pub mod field;
pub mod list;
pub mod packers;
pub mod transduced;
pub mod transducers;
pub mod value;
pub mod whitespace;

pub use error::{ListError, Result};
pub use field::FieldAccessor;
pub use list::ListTransducedAccessor;
pub use transduced::TransducedAccessor;
pub use value::ValueTransducedAccessor;

pub use listbind_support::{
    Accessor, AccessorError, ContextConfig, ItemIter, NamespaceDeclaration, NamespaceScope, Packer,
    QName, ReportedError, SerializationContext, Transducer, TransducerError,
};
