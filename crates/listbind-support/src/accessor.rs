//! Property access on host values.

use crate::error::AccessorError;

/// Reads and writes one property of a host value of type `H`.
///
/// `get` returns `Ok(None)` when the property is absent, which is distinct
/// from a present but empty value. `set` replaces the property wholesale.
pub trait Accessor<H> {
    /// Type of the property value.
    type Value;

    /// Name of the property, used in logs and error messages.
    fn name(&self) -> &str {
        "value"
    }

    fn get<'h>(&self, host: &'h H) -> Result<Option<&'h Self::Value>, AccessorError>;

    fn set(&self, host: &mut H, value: Self::Value) -> Result<(), AccessorError>;
}
