//! Binding for list simple types.
//!
//! [`ListTransducedAccessor`] converts a sequence-valued property to and from
//! a whitespace-separated token list. Item conversion is delegated to a
//! [`Transducer`] and collection handling to a [`Packer`].
//!
//! The two directions deliberately differ in how they treat item failures:
//!
//! - **Output** (`print`, `declare_namespace`): an item that cannot be
//!   converted is reported to the [`SerializationContext`] with no field
//!   reference and skipped. The result is best-effort.
//! - **Input** (`parse`): the first invalid token aborts the parse. The pack
//!   handle is dropped uncommitted, so the host property keeps its old value.

use listbind_support::{Accessor, NamespaceScope, Packer, SerializationContext, Transducer};
use tracing::{debug, trace};

use crate::error::{ListError, Result};
use crate::transduced::TransducedAccessor;
use crate::whitespace::is_xml_whitespace_byte;

/// [`TransducedAccessor`] for a list simple type.
#[derive(Debug, Clone)]
pub struct ListTransducedAccessor<T, A, P> {
    /// Converts each item.
    transducer: T,
    /// Gets and sets the list on the host.
    accessor: A,
    /// Iterates and builds the list.
    packer: P,
}

impl<T, A, P> ListTransducedAccessor<T, A, P> {
    pub fn new(transducer: T, accessor: A, packer: P) -> Self {
        Self {
            transducer,
            accessor,
            packer,
        }
    }

    pub fn transducer(&self) -> &T {
        &self.transducer
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    pub fn packer(&self) -> &P {
        &self.packer
    }

    /// Whether the item type needs namespace context.
    pub fn use_namespace(&self) -> bool
    where
        T: Transducer,
    {
        self.transducer.use_namespace()
    }
}

impl<H, T, A, P> TransducedAccessor<H> for ListTransducedAccessor<T, A, P>
where
    T: Transducer,
    P: Packer<Item = T::Item>,
    A: Accessor<H, Value = P::Sequence>,
{
    fn use_namespace(&self) -> bool {
        ListTransducedAccessor::use_namespace(self)
    }

    fn declare_namespace(&self, host: &H, ctx: &mut SerializationContext) -> Result<()> {
        let Some(list) = self.accessor.get(host)? else {
            return Ok(());
        };

        for item in self.packer.iter(list, ctx) {
            let declared = match item {
                Ok(Some(item)) => self.transducer.declare_namespace(item, ctx),
                Ok(None) => continue,
                Err(e) => Err(e),
            };
            if let Err(e) = declared {
                ctx.report_error(None, e);
            }
        }
        Ok(())
    }

    fn print(&self, host: &H, ctx: &mut SerializationContext) -> Result<Option<String>> {
        let Some(list) = self.accessor.get(host)? else {
            return Ok(None);
        };

        let mut buf = String::new();
        for item in self.packer.iter(list, ctx) {
            let printed = match item {
                Ok(Some(item)) => self.transducer.print(item, ctx),
                Ok(None) => continue,
                Err(e) => Err(e),
            };
            match printed {
                Ok(token) => {
                    if !buf.is_empty() {
                        buf.push(' ');
                    }
                    buf.push_str(&token);
                }
                Err(e) => ctx.report_error(None, e),
            }
        }
        Ok(Some(buf))
    }

    fn parse_in_scope(&self, host: &mut H, lexical: &str, scope: &NamespaceScope) -> Result<()> {
        let mut pack = self.packer.start_packing(&*host, &self.accessor)?;

        let bytes = lexical.as_bytes();
        let len = bytes.len();
        let mut idx = 0;
        let mut count = 0;

        loop {
            let mut p = idx;
            while p < len && !is_xml_whitespace_byte(bytes[p]) {
                p += 1;
            }

            let token = &lexical[idx..p];
            if !token.is_empty() {
                trace!(index = count, token = token, "parsing list token");
                let item = self
                    .transducer
                    .parse(token, scope)
                    .map_err(|source| ListError::Item {
                        index: count,
                        token: token.to_string(),
                        source,
                    })?;
                self.packer.add_to_pack(&mut pack, item);
                count += 1;
            }

            if p == len {
                break;
            }

            while p < len && is_xml_whitespace_byte(bytes[p]) {
                p += 1;
            }
            if p == len {
                break;
            }

            idx = p;
        }

        self.packer.end_packing(pack, host, &self.accessor)?;
        debug!(property = self.accessor.name(), items = count, "parsed list value");
        Ok(())
    }

    fn has_value(&self, host: &H) -> Result<bool> {
        Ok(self.accessor.get(host)?.is_some())
    }
}
