//! Enumerated items backed by a static lookup table.

use listbind_support::{NamespaceScope, SerializationContext, Transducer, TransducerError};

/// Enumerated values mapped through a static `(lexical, value)` table.
///
/// ```rust
/// use listbind::transducers::EnumTransducer;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Color {
///     Red,
///     Green,
/// }
///
/// static COLORS: EnumTransducer<Color> =
///     EnumTransducer::new("Color", &[("red", Color::Red), ("green", Color::Green)]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EnumTransducer<E: 'static> {
    type_name: &'static str,
    table: &'static [(&'static str, E)],
}

impl<E: 'static> EnumTransducer<E> {
    pub const fn new(type_name: &'static str, table: &'static [(&'static str, E)]) -> Self {
        Self { type_name, table }
    }
}

impl<E: Clone + PartialEq + 'static> Transducer for EnumTransducer<E> {
    type Item = E;

    fn print(&self, item: &E, _ctx: &mut SerializationContext) -> Result<String, TransducerError> {
        self.table
            .iter()
            .find(|(_, value)| value == item)
            .map(|(lexical, _)| lexical.to_string())
            .ok_or_else(|| {
                TransducerError::unrepresentable(self.type_name, "value has no lexical mapping")
            })
    }

    fn parse(&self, token: &str, _scope: &NamespaceScope) -> Result<E, TransducerError> {
        self.table
            .iter()
            .find(|(lexical, _)| *lexical == token)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| {
                TransducerError::invalid(self.type_name, token, "not an enumerated value")
            })
    }
}
