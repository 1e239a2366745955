//! The operation set shared by all simple-type property bindings.

use listbind_support::{NamespaceScope, SerializationContext};

use crate::error::Result;

/// Converts one property of a host value of type `H` to and from its lexical
/// form.
pub trait TransducedAccessor<H> {
    /// Whether output needs a namespace declaration pass.
    fn use_namespace(&self) -> bool;

    /// Declares the namespaces the property's lexical form refers to.
    fn declare_namespace(&self, host: &H, ctx: &mut SerializationContext) -> Result<()>;

    /// Renders the property, or `None` when it is absent.
    fn print(&self, host: &H, ctx: &mut SerializationContext) -> Result<Option<String>>;

    /// Parses `lexical` and stores the result on `host`, resolving namespace
    /// prefixes through `scope`.
    fn parse_in_scope(&self, host: &mut H, lexical: &str, scope: &NamespaceScope) -> Result<()>;

    /// Parses `lexical` with no namespace bindings in scope.
    fn parse(&self, host: &mut H, lexical: &str) -> Result<()> {
        self.parse_in_scope(host, lexical, &NamespaceScope::default())
    }

    /// Whether the property is present. Never inspects its contents.
    fn has_value(&self, host: &H) -> Result<bool>;
}
