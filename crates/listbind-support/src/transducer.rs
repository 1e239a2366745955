//! Item-level lexical conversion.

use crate::context::SerializationContext;
use crate::error::TransducerError;
use crate::namespace::NamespaceScope;

/// Converts between one lexical token and one item value.
///
/// A transducer never sees whitespace-separated input: the list layer hands it
/// exactly one token at a time, and expects exactly one token back.
pub trait Transducer {
    /// The item type this transducer produces and consumes.
    type Item;

    /// Whether printing or parsing needs namespace context (e.g. QNames).
    fn use_namespace(&self) -> bool {
        false
    }

    /// Declares every namespace the lexical form of `item` will refer to.
    fn declare_namespace(
        &self,
        _item: &Self::Item,
        _ctx: &mut SerializationContext,
    ) -> Result<(), TransducerError> {
        Ok(())
    }

    /// Renders `item` as a single token.
    fn print(
        &self,
        item: &Self::Item,
        ctx: &mut SerializationContext,
    ) -> Result<String, TransducerError>;

    /// Parses one non-empty, whitespace-free token.
    fn parse(&self, token: &str, scope: &NamespaceScope) -> Result<Self::Item, TransducerError>;
}

impl<T: Transducer + ?Sized> Transducer for &T {
    type Item = T::Item;

    fn use_namespace(&self) -> bool {
        (**self).use_namespace()
    }

    fn declare_namespace(
        &self,
        item: &Self::Item,
        ctx: &mut SerializationContext,
    ) -> Result<(), TransducerError> {
        (**self).declare_namespace(item, ctx)
    }

    fn print(
        &self,
        item: &Self::Item,
        ctx: &mut SerializationContext,
    ) -> Result<String, TransducerError> {
        (**self).print(item, ctx)
    }

    fn parse(&self, token: &str, scope: &NamespaceScope) -> Result<Self::Item, TransducerError> {
        (**self).parse(token, scope)
    }
}
