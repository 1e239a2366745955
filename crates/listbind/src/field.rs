//! [`Accessor`] over a plain struct field.

use std::fmt;

use listbind_support::{Accessor, AccessorError};

/// Accessor built from a getter and a setter function.
///
/// ```rust
/// use listbind::{Accessor, FieldAccessor};
///
/// struct Host {
///     tags: Option<Vec<String>>,
/// }
///
/// let acc = FieldAccessor::new("tags", |h: &Host| h.tags.as_ref(), |h, v| h.tags = Some(v));
/// let mut host = Host { tags: None };
/// acc.set(&mut host, vec!["a".to_string()])?;
/// assert_eq!(acc.get(&host)?, Some(&vec!["a".to_string()]));
/// # Ok::<(), listbind::AccessorError>(())
/// ```
pub struct FieldAccessor<H, V> {
    name: &'static str,
    getter: fn(&H) -> Option<&V>,
    setter: fn(&mut H, V),
}

impl<H, V> FieldAccessor<H, V> {
    pub fn new(name: &'static str, getter: fn(&H) -> Option<&V>, setter: fn(&mut H, V)) -> Self {
        Self {
            name,
            getter,
            setter,
        }
    }
}

impl<H, V> Clone for FieldAccessor<H, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, V> Copy for FieldAccessor<H, V> {}

impl<H, V> fmt::Debug for FieldAccessor<H, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("name", &self.name)
            .finish()
    }
}

impl<H, V> Accessor<H> for FieldAccessor<H, V> {
    type Value = V;

    fn name(&self) -> &str {
        self.name
    }

    fn get<'h>(&self, host: &'h H) -> Result<Option<&'h V>, AccessorError> {
        Ok((self.getter)(host))
    }

    fn set(&self, host: &mut H, value: V) -> Result<(), AccessorError> {
        (self.setter)(host, value);
        Ok(())
    }
}
