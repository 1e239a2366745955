//! Numeric and boolean transducers.

use std::fmt;
use std::marker::PhantomData;
use std::num::ParseIntError;
use std::str::FromStr;

use listbind_support::{NamespaceScope, SerializationContext, Transducer, TransducerError};
use rust_decimal::Decimal;

/// Integer types with a matching XML Schema built-in type.
pub trait XsdInteger: FromStr<Err = ParseIntError> + fmt::Display {
    /// Schema type name, used in error messages.
    const TYPE_NAME: &'static str;
}

macro_rules! xsd_integer {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl XsdInteger for $ty {
                const TYPE_NAME: &'static str = $name;
            }
        )*
    };
}

xsd_integer! {
    i8 => "byte",
    i16 => "short",
    i32 => "int",
    i64 => "long",
    u8 => "unsignedByte",
    u16 => "unsignedShort",
    u32 => "unsignedInt",
    u64 => "unsignedLong",
}

/// Decimal integers, optionally signed. Values out of range are rejected.
pub struct IntegerTransducer<T>(PhantomData<fn() -> T>);

impl<T> IntegerTransducer<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for IntegerTransducer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for IntegerTransducer<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IntegerTransducer<T> {}

impl<T: XsdInteger> fmt::Debug for IntegerTransducer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntegerTransducer<{}>", T::TYPE_NAME)
    }
}

impl<T: XsdInteger> Transducer for IntegerTransducer<T> {
    type Item = T;

    fn print(&self, item: &T, _ctx: &mut SerializationContext) -> Result<String, TransducerError> {
        Ok(item.to_string())
    }

    fn parse(&self, token: &str, _scope: &NamespaceScope) -> Result<T, TransducerError> {
        token
            .parse()
            .map_err(|e| TransducerError::invalid(T::TYPE_NAME, token, e))
    }
}

/// Checks the `xs:decimal` lexical space: optional sign, digits with at most
/// one decimal point, at least one digit, no exponent.
fn is_decimal_lexical(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    let mut seen_digit = false;
    let mut seen_point = false;
    for b in digits.bytes() {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}

/// `xs:decimal` backed by [`Decimal`]. Printing keeps the value's scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalTransducer;

impl DecimalTransducer {
    pub fn new() -> Self {
        Self
    }
}

impl Transducer for DecimalTransducer {
    type Item = Decimal;

    fn print(
        &self,
        item: &Decimal,
        _ctx: &mut SerializationContext,
    ) -> Result<String, TransducerError> {
        Ok(item.to_string())
    }

    fn parse(&self, token: &str, _scope: &NamespaceScope) -> Result<Decimal, TransducerError> {
        if !is_decimal_lexical(token) {
            return Err(TransducerError::invalid(
                "decimal",
                token,
                "expected digits with an optional sign and decimal point",
            ));
        }
        let unsigned = token.strip_prefix('+').unwrap_or(token);
        Decimal::from_str(unsigned).map_err(|e| TransducerError::invalid("decimal", token, e))
    }
}

/// `xs:double` backed by `f64`, including `INF`, `-INF` and `NaN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleTransducer;

impl DoubleTransducer {
    pub fn new() -> Self {
        Self
    }
}

impl Transducer for DoubleTransducer {
    type Item = f64;

    fn print(&self, item: &f64, _ctx: &mut SerializationContext) -> Result<String, TransducerError> {
        let lexical = if item.is_nan() {
            "NaN".to_string()
        } else if *item == f64::INFINITY {
            "INF".to_string()
        } else if *item == f64::NEG_INFINITY {
            "-INF".to_string()
        } else {
            item.to_string()
        };
        Ok(lexical)
    }

    fn parse(&self, token: &str, _scope: &NamespaceScope) -> Result<f64, TransducerError> {
        match token {
            "INF" | "+INF" => return Ok(f64::INFINITY),
            "-INF" => return Ok(f64::NEG_INFINITY),
            "NaN" => return Ok(f64::NAN),
            _ => {}
        }
        // Rust also accepts "inf", "infinity" and "nan" in any case
        if !token
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        {
            return Err(TransducerError::invalid("double", token, "not a number"));
        }
        token
            .parse()
            .map_err(|e| TransducerError::invalid("double", token, e))
    }
}

/// `xs:boolean`: accepts `true`, `false`, `1` and `0`; prints `true`/`false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanTransducer;

impl BooleanTransducer {
    pub fn new() -> Self {
        Self
    }
}

impl Transducer for BooleanTransducer {
    type Item = bool;

    fn print(&self, item: &bool, _ctx: &mut SerializationContext) -> Result<String, TransducerError> {
        Ok(if *item { "true" } else { "false" }.to_string())
    }

    fn parse(&self, token: &str, _scope: &NamespaceScope) -> Result<bool, TransducerError> {
        match token {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(TransducerError::invalid(
                "boolean",
                token,
                "expected true, false, 1 or 0",
            )),
        }
    }
}
