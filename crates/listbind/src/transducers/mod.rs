//! Built-in item transducers for common XML Schema simple types.
//!
//! | Transducer | Item | Schema type |
//! |------------|------|-------------|
//! | [`IntegerTransducer<T>`] | `i8`..`i64`, `u8`..`u64` | `xs:byte` .. `xs:unsignedLong` |
//! | [`DecimalTransducer`] | `rust_decimal::Decimal` | `xs:decimal` |
//! | [`DoubleTransducer`] | `f64` | `xs:double` |
//! | [`BooleanTransducer`] | `bool` | `xs:boolean` |
//! | [`TokenTransducer`] | `String` | `xs:token`, `xs:NMTOKEN` |
//! | [`DateTransducer`] | `chrono::NaiveDate` | `xs:date` |
//! | [`DateTimeTransducer`] | `chrono::DateTime<FixedOffset>` | `xs:dateTime` |
//! | [`QNameTransducer`] | [`QName`](listbind_support::QName) | `xs:QName` |
//! | [`EnumTransducer<E>`] | any `E: Clone + PartialEq` | enumerated restrictions |

mod enumeration;
mod numeric;
mod qname;
mod temporal;
mod text;

pub use enumeration::EnumTransducer;
pub use numeric::{
    BooleanTransducer, DecimalTransducer, DoubleTransducer, IntegerTransducer, XsdInteger,
};
pub use qname::QNameTransducer;
pub use temporal::{DateTimeTransducer, DateTransducer};
pub use text::TokenTransducer;
