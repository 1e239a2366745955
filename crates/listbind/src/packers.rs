//! Built-in [`Packer`] implementations.
//!
//! | Packer | Sequence | Null items |
//! |--------|----------|------------|
//! | [`VecPacker`] | `Vec<I>` | no |
//! | [`NullableVecPacker`] | `Vec<Option<I>>` | `None` entries |
//! | [`VecDequePacker`] | `VecDeque<I>` | no |
//! | [`BoxedSlicePacker`] | `Box<[I]>` | no |
//! | [`SharedSlicePacker`] | `Arc<[I]>` | no |
//!
//! None of the packers touch the host before `end_packing`, so an aborted
//! parse leaves the previous value in place. Parsed items are never null.

use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use listbind_support::{Accessor, AccessorError, ItemIter, Packer, SerializationContext};

/// Defines a zero-sized packer type parameterized over the item type.
macro_rules! packer_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<I>(PhantomData<fn() -> I>);

        impl<I> $name<I> {
            pub fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<I> Default for $name<I> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<I> Clone for $name<I> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<I> Copy for $name<I> {}

        impl<I> fmt::Debug for $name<I> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }
    };
}

/// Length of the current value, used to size the new pack.
fn capacity_hint<H, A, L>(host: &H, accessor: &A, len: fn(&L) -> usize) -> Result<usize, AccessorError>
where
    A: Accessor<H, Value = L>,
{
    Ok(accessor.get(host)?.map_or(0, len))
}

packer_type!(
    /// Growable list.
    VecPacker
);

impl<I> Packer for VecPacker<I> {
    type Sequence = Vec<I>;
    type Item = I;
    type Pack = Vec<I>;

    fn iter<'a>(&self, sequence: &'a Vec<I>, _ctx: &mut SerializationContext) -> ItemIter<'a, I>
    where
        Self::Item: 'a,
    {
        Box::new(sequence.iter().map(|item| Ok(Some(item))))
    }

    fn start_packing<H, A>(&self, host: &H, accessor: &A) -> Result<Vec<I>, AccessorError>
    where
        A: Accessor<H, Value = Vec<I>>,
    {
        Ok(Vec::with_capacity(capacity_hint(host, accessor, Vec::len)?))
    }

    fn add_to_pack(&self, pack: &mut Vec<I>, item: I) {
        pack.push(item);
    }

    fn end_packing<H, A>(&self, pack: Vec<I>, host: &mut H, accessor: &A) -> Result<(), AccessorError>
    where
        A: Accessor<H, Value = Vec<I>>,
    {
        accessor.set(host, pack)
    }
}

packer_type!(
    /// Growable list whose `None` entries are null items.
    NullableVecPacker
);

impl<I> Packer for NullableVecPacker<I> {
    type Sequence = Vec<Option<I>>;
    type Item = I;
    type Pack = Vec<Option<I>>;

    fn iter<'a>(
        &self,
        sequence: &'a Vec<Option<I>>,
        _ctx: &mut SerializationContext,
    ) -> ItemIter<'a, I>
    where
        Self::Item: 'a,
    {
        Box::new(sequence.iter().map(|item| Ok(item.as_ref())))
    }

    fn start_packing<H, A>(&self, host: &H, accessor: &A) -> Result<Vec<Option<I>>, AccessorError>
    where
        A: Accessor<H, Value = Vec<Option<I>>>,
    {
        Ok(Vec::with_capacity(capacity_hint(host, accessor, Vec::len)?))
    }

    fn add_to_pack(&self, pack: &mut Vec<Option<I>>, item: I) {
        pack.push(Some(item));
    }

    fn end_packing<H, A>(
        &self,
        pack: Vec<Option<I>>,
        host: &mut H,
        accessor: &A,
    ) -> Result<(), AccessorError>
    where
        A: Accessor<H, Value = Vec<Option<I>>>,
    {
        accessor.set(host, pack)
    }
}

packer_type!(
    /// Double-ended queue.
    VecDequePacker
);

impl<I> Packer for VecDequePacker<I> {
    type Sequence = VecDeque<I>;
    type Item = I;
    type Pack = VecDeque<I>;

    fn iter<'a>(&self, sequence: &'a VecDeque<I>, _ctx: &mut SerializationContext) -> ItemIter<'a, I>
    where
        Self::Item: 'a,
    {
        Box::new(sequence.iter().map(|item| Ok(Some(item))))
    }

    fn start_packing<H, A>(&self, host: &H, accessor: &A) -> Result<VecDeque<I>, AccessorError>
    where
        A: Accessor<H, Value = VecDeque<I>>,
    {
        Ok(VecDeque::with_capacity(capacity_hint(host, accessor, VecDeque::len)?))
    }

    fn add_to_pack(&self, pack: &mut VecDeque<I>, item: I) {
        pack.push_back(item);
    }

    fn end_packing<H, A>(
        &self,
        pack: VecDeque<I>,
        host: &mut H,
        accessor: &A,
    ) -> Result<(), AccessorError>
    where
        A: Accessor<H, Value = VecDeque<I>>,
    {
        accessor.set(host, pack)
    }
}

packer_type!(
    /// Fixed-length slice. Items are accumulated in a growable buffer and
    /// moved into an exactly-sized allocation when packing ends.
    BoxedSlicePacker
);

impl<I> Packer for BoxedSlicePacker<I> {
    type Sequence = Box<[I]>;
    type Item = I;
    type Pack = Vec<I>;

    fn iter<'a>(&self, sequence: &'a Box<[I]>, _ctx: &mut SerializationContext) -> ItemIter<'a, I>
    where
        Self::Item: 'a,
    {
        Box::new(sequence.iter().map(|item| Ok(Some(item))))
    }

    fn start_packing<H, A>(&self, host: &H, accessor: &A) -> Result<Vec<I>, AccessorError>
    where
        A: Accessor<H, Value = Box<[I]>>,
    {
        Ok(Vec::with_capacity(capacity_hint(host, accessor, |s: &Box<[I]>| s.len())?))
    }

    fn add_to_pack(&self, pack: &mut Vec<I>, item: I) {
        pack.push(item);
    }

    fn end_packing<H, A>(&self, pack: Vec<I>, host: &mut H, accessor: &A) -> Result<(), AccessorError>
    where
        A: Accessor<H, Value = Box<[I]>>,
    {
        accessor.set(host, pack.into_boxed_slice())
    }
}

packer_type!(
    /// Immutable shared slice, constructed in one step from the fully
    /// materialized items.
    SharedSlicePacker
);

impl<I> Packer for SharedSlicePacker<I> {
    type Sequence = Arc<[I]>;
    type Item = I;
    type Pack = Vec<I>;

    fn iter<'a>(&self, sequence: &'a Arc<[I]>, _ctx: &mut SerializationContext) -> ItemIter<'a, I>
    where
        Self::Item: 'a,
    {
        Box::new(sequence.iter().map(|item| Ok(Some(item))))
    }

    fn start_packing<H, A>(&self, _host: &H, _accessor: &A) -> Result<Vec<I>, AccessorError>
    where
        A: Accessor<H, Value = Arc<[I]>>,
    {
        Ok(Vec::new())
    }

    fn add_to_pack(&self, pack: &mut Vec<I>, item: I) {
        pack.push(item);
    }

    fn end_packing<H, A>(&self, pack: Vec<I>, host: &mut H, accessor: &A) -> Result<(), AccessorError>
    where
        A: Accessor<H, Value = Arc<[I]>>,
    {
        accessor.set(host, Arc::from(pack))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldAccessor;

    #[derive(Default)]
    struct Host {
        list: Option<Vec<u8>>,
        shared: Option<Arc<[u8]>>,
    }

    fn collect<'a, P: Packer>(packer: &P, sequence: &'a P::Sequence) -> Vec<Option<P::Item>>
    where
        P::Item: Clone + 'a,
    {
        let mut ctx = SerializationContext::default();
        packer
            .iter(sequence, &mut ctx)
            .map(|item| item.unwrap().cloned())
            .collect()
    }

    #[test]
    fn test_vec_packer_builds_in_order() {
        let packer = VecPacker::<u8>::new();
        let acc = FieldAccessor::new("list", |h: &Host| h.list.as_ref(), |h, v| h.list = Some(v));
        let mut host = Host::default();

        let mut pack = packer.start_packing(&host, &acc).unwrap();
        for i in [3, 1, 2] {
            packer.add_to_pack(&mut pack, i);
        }
        assert!(host.list.is_none());

        packer.end_packing(pack, &mut host, &acc).unwrap();
        assert_eq!(host.list, Some(vec![3, 1, 2]));
    }

    #[test]
    fn test_start_packing_leaves_host_untouched() {
        let packer = VecPacker::<u8>::new();
        let acc = FieldAccessor::new("list", |h: &Host| h.list.as_ref(), |h, v| h.list = Some(v));
        let host = Host {
            list: Some(vec![9, 9, 9, 9]),
            ..Default::default()
        };

        let pack = packer.start_packing(&host, &acc).unwrap();
        assert!(pack.is_empty());
        assert!(pack.capacity() >= 4);
        assert_eq!(host.list, Some(vec![9, 9, 9, 9]));
    }

    #[test]
    fn test_shared_slice_packer() {
        let packer = SharedSlicePacker::<u8>::new();
        let acc = FieldAccessor::new(
            "shared",
            |h: &Host| h.shared.as_ref(),
            |h, v| h.shared = Some(v),
        );
        let mut host = Host::default();

        let mut pack = packer.start_packing(&host, &acc).unwrap();
        packer.add_to_pack(&mut pack, 1);
        packer.add_to_pack(&mut pack, 2);
        packer.end_packing(pack, &mut host, &acc).unwrap();

        assert_eq!(host.shared.as_deref(), Some(&[1u8, 2][..]));
    }

    #[test]
    fn test_iterators_yield_items_and_nulls() {
        assert_eq!(
            collect(&VecPacker::<u8>::new(), &vec![1, 2]),
            vec![Some(1), Some(2)]
        );
        assert_eq!(
            collect(&NullableVecPacker::<u8>::new(), &vec![Some(1), None, Some(3)]),
            vec![Some(1), None, Some(3)]
        );
        assert_eq!(
            collect(&VecDequePacker::<u8>::new(), &VecDeque::from([4, 5])),
            vec![Some(4), Some(5)]
        );
        assert_eq!(
            collect(&BoxedSlicePacker::<u8>::new(), &vec![6].into_boxed_slice()),
            vec![Some(6)]
        );
        let shared: Arc<[u8]> = Arc::from(vec![7, 8]);
        assert_eq!(
            collect(&SharedSlicePacker::<u8>::new(), &shared),
            vec![Some(7), Some(8)]
        );
    }

    #[test]
    fn test_iterator_is_fresh_per_call() {
        let packer = VecPacker::<u8>::new();
        let list = vec![1, 2, 3];
        let mut ctx = SerializationContext::default();

        let mut first = packer.iter(&list, &mut ctx);
        first.next();
        let second = packer.iter(&list, &mut ctx);

        assert_eq!(second.count(), 3);
        assert_eq!(first.count(), 2);
    }
}
