//! Namespace-qualified name items.

use listbind_support::namespace::is_ncname;
use listbind_support::{NamespaceScope, QName, SerializationContext, Transducer, TransducerError};

/// `xs:QName` items written as `prefix:local` or `local`.
///
/// Output asks the [`SerializationContext`] for the prefix bound to the
/// item's namespace, declaring it (with the item's own prefix as a hint) when
/// it is not yet in scope. Input resolves the prefix through the
/// [`NamespaceScope`]; unprefixed names take the default namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct QNameTransducer;

impl QNameTransducer {
    pub fn new() -> Self {
        Self
    }
}

impl Transducer for QNameTransducer {
    type Item = QName;

    fn use_namespace(&self) -> bool {
        true
    }

    fn declare_namespace(
        &self,
        item: &QName,
        ctx: &mut SerializationContext,
    ) -> Result<(), TransducerError> {
        check_unqualified(item, ctx)?;
        ctx.declare_namespace(&item.namespace_uri, item.prefix.as_deref());
        Ok(())
    }

    fn print(&self, item: &QName, ctx: &mut SerializationContext) -> Result<String, TransducerError> {
        if !is_ncname(&item.local_part) {
            return Err(TransducerError::unrepresentable(
                "QName",
                format!("local part `{}` is not an NCName", item.local_part),
            ));
        }
        check_unqualified(item, ctx)?;

        let prefix = ctx.declare_namespace(&item.namespace_uri, item.prefix.as_deref());
        if prefix.is_empty() {
            Ok(item.local_part.clone())
        } else {
            Ok(format!("{}:{}", prefix, item.local_part))
        }
    }

    fn parse(&self, token: &str, scope: &NamespaceScope) -> Result<QName, TransducerError> {
        let (prefix, local) = match token.split_once(':') {
            Some((prefix, local)) => (Some(prefix), local),
            None => (None, token),
        };

        if prefix.is_some_and(|p| !is_ncname(p)) || !is_ncname(local) {
            return Err(TransducerError::invalid(
                "QName",
                token,
                "expected `prefix:local` or `local` with NCName parts",
            ));
        }

        match prefix {
            Some(prefix) => {
                let uri = scope
                    .resolve(prefix)
                    .ok_or_else(|| TransducerError::UnboundPrefix {
                        prefix: prefix.to_string(),
                    })?;
                Ok(QName::new(uri, local).with_prefix(prefix))
            }
            None => Ok(QName::new(scope.default_namespace(), local)),
        }
    }
}

/// A name in no namespace can only be written unprefixed, which is wrong
/// while a default namespace is in scope.
fn check_unqualified(item: &QName, ctx: &SerializationContext) -> Result<(), TransducerError> {
    let default = ctx.default_namespace();
    if item.namespace_uri.is_empty() && !default.is_empty() {
        return Err(TransducerError::unrepresentable(
            "QName",
            format!(
                "`{}` has no namespace but the default namespace `{}` is in scope",
                item.local_part, default
            ),
        ));
    }
    Ok(())
}
