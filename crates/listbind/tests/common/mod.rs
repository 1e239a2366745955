//! Test infrastructure for the listbind integration tests.
//!
//! Provides a host type that records every write made through its accessor,
//! so tests can check that a failed parse never commits.

#![allow(dead_code)]

use listbind::{Accessor, AccessorError};

/// Host value with one optional property and a write counter.
#[derive(Debug, Default)]
pub struct Slot<V> {
    pub value: Option<V>,
    pub sets: usize,
    pub fail_get: bool,
    pub fail_set: bool,
}

impl<V> Slot<V> {
    pub fn empty() -> Self {
        Self {
            value: None,
            sets: 0,
            fail_get: false,
            fail_set: false,
        }
    }

    pub fn holding(value: V) -> Self {
        Self {
            value: Some(value),
            ..Self::empty()
        }
    }
}

/// Accessor for [`Slot::value`] honoring the failure switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotAccessor;

impl<V> Accessor<Slot<V>> for SlotAccessor {
    type Value = V;

    fn name(&self) -> &str {
        "slot"
    }

    fn get<'h>(&self, host: &'h Slot<V>) -> Result<Option<&'h V>, AccessorError> {
        if host.fail_get {
            return Err(AccessorError::read("slot", "read failure injected"));
        }
        Ok(host.value.as_ref())
    }

    fn set(&self, host: &mut Slot<V>, value: V) -> Result<(), AccessorError> {
        if host.fail_set {
            return Err(AccessorError::write("slot", "write failure injected"));
        }
        host.sets += 1;
        host.value = Some(value);
        Ok(())
    }
}

/// Installs a test-writer subscriber honoring `RUST_LOG`. Safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
