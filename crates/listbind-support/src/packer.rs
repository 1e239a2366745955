//! Collection packing protocol.
//!
//! A [`Packer`] hides the shape of the collection backing a list property.
//! Output walks an existing sequence through [`Packer::iter`]; input builds a
//! new one through `start_packing` → `add_to_pack`* → `end_packing`, where the
//! pack handle is an owned value moved into `end_packing` so it cannot be
//! reused once the sequence has been committed.

use crate::accessor::Accessor;
use crate::context::SerializationContext;
use crate::error::{AccessorError, TransducerError};

/// Lazy walk over the items of one sequence snapshot.
///
/// `Ok(None)` is a null item. An `Err` is an item that could not be produced;
/// iteration may continue past it.
pub type ItemIter<'a, I> = Box<dyn Iterator<Item = Result<Option<&'a I>, TransducerError>> + 'a>;

/// Builds and iterates the collection type backing a list property.
pub trait Packer {
    /// The collection type stored on the host.
    type Sequence;

    /// The element type.
    type Item;

    /// In-progress builder state for one parse operation.
    type Pack;

    /// Returns a fresh iterator over `sequence`.
    fn iter<'a>(
        &self,
        sequence: &'a Self::Sequence,
        ctx: &mut SerializationContext,
    ) -> ItemIter<'a, Self::Item>
    where
        Self::Item: 'a;

    /// Begins building a new sequence for the property behind `accessor`.
    ///
    /// Implementations may read the host but never modify it.
    fn start_packing<H, A>(&self, host: &H, accessor: &A) -> Result<Self::Pack, AccessorError>
    where
        A: Accessor<H, Value = Self::Sequence>;

    /// Appends `item`, preserving insertion order.
    fn add_to_pack(&self, pack: &mut Self::Pack, item: Self::Item);

    /// Finishes the sequence and writes it to the host through `accessor`.
    fn end_packing<H, A>(
        &self,
        pack: Self::Pack,
        host: &mut H,
        accessor: &A,
    ) -> Result<(), AccessorError>
    where
        A: Accessor<H, Value = Self::Sequence>;
}
