//! Binding for single-valued simple types.

use listbind_support::{Accessor, NamespaceScope, SerializationContext, Transducer};
use tracing::debug;

use crate::error::Result;
use crate::transduced::TransducedAccessor;
use crate::whitespace;

/// [`TransducedAccessor`] for a property holding one simple-type value.
///
/// Unlike the list binding, conversion failures propagate in both
/// directions: there is only one item, so there is nothing to continue with.
/// The lexical value is whitespace-collapsed before it is parsed.
#[derive(Debug, Clone)]
pub struct ValueTransducedAccessor<T, A> {
    transducer: T,
    accessor: A,
}

impl<T, A> ValueTransducedAccessor<T, A> {
    pub fn new(transducer: T, accessor: A) -> Self {
        Self {
            transducer,
            accessor,
        }
    }

    pub fn transducer(&self) -> &T {
        &self.transducer
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    /// Whether the value type needs namespace context.
    pub fn use_namespace(&self) -> bool
    where
        T: Transducer,
    {
        self.transducer.use_namespace()
    }
}

impl<H, T, A> TransducedAccessor<H> for ValueTransducedAccessor<T, A>
where
    T: Transducer,
    A: Accessor<H, Value = T::Item>,
{
    fn use_namespace(&self) -> bool {
        ValueTransducedAccessor::use_namespace(self)
    }

    fn declare_namespace(&self, host: &H, ctx: &mut SerializationContext) -> Result<()> {
        if let Some(value) = self.accessor.get(host)? {
            self.transducer.declare_namespace(value, ctx)?;
        }
        Ok(())
    }

    fn print(&self, host: &H, ctx: &mut SerializationContext) -> Result<Option<String>> {
        match self.accessor.get(host)? {
            Some(value) => Ok(Some(self.transducer.print(value, ctx)?)),
            None => Ok(None),
        }
    }

    fn parse_in_scope(&self, host: &mut H, lexical: &str, scope: &NamespaceScope) -> Result<()> {
        let value = self
            .transducer
            .parse(&whitespace::collapse(lexical), scope)?;
        self.accessor.set(host, value)?;
        debug!(property = self.accessor.name(), "parsed simple value");
        Ok(())
    }

    fn has_value(&self, host: &H) -> Result<bool> {
        Ok(self.accessor.get(host)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListError;
    use crate::field::FieldAccessor;
    use crate::transducers::BooleanTransducer;

    #[derive(Default)]
    struct Flag {
        enabled: Option<bool>,
    }

    fn flag() -> ValueTransducedAccessor<BooleanTransducer, FieldAccessor<Flag, bool>> {
        ValueTransducedAccessor::new(
            BooleanTransducer::new(),
            FieldAccessor::new(
                "enabled",
                |f: &Flag| f.enabled.as_ref(),
                |f, v| f.enabled = Some(v),
            ),
        )
    }

    #[test]
    fn test_parse_and_print() -> Result<()> {
        let accessor = flag();
        let mut host = Flag::default();
        let mut ctx = SerializationContext::default();

        assert!(!accessor.has_value(&host)?);
        assert_eq!(accessor.print(&host, &mut ctx)?, None);

        accessor.parse(&mut host, "\n  1 \t")?;
        assert_eq!(host.enabled, Some(true));
        assert_eq!(accessor.print(&host, &mut ctx)?, Some("true".to_string()));
        Ok(())
    }

    #[test]
    fn test_parse_failure_propagates() {
        let accessor = flag();
        let mut host = Flag {
            enabled: Some(false),
        };

        let err = accessor.parse(&mut host, "yes").unwrap_err();
        assert!(matches!(err, ListError::Transducer(_)));
        assert_eq!(host.enabled, Some(false));
    }
}
