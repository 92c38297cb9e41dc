use crate::{error::Result, registry::LiteralRegistry};

use parking_lot::Mutex;

use std::io::{self, Write};

/// A [`LiteralRegistry`] that can be used from several threads at once.
///
/// Both tables and the atom list sit behind one lock. Minting is a
/// read-then-write sequence over a table, so it must never interleave with
/// another minting step.
pub struct SharedRegistry<'a, W: Write = io::Sink> {
    inner: Mutex<LiteralRegistry<'a, W>>,
}

impl<'a, W: Write> SharedRegistry<'a, W> {
    pub fn new(registry: LiteralRegistry<'a, W>) -> Self {
        Self {
            inner: Mutex::new(registry),
        }
    }

    pub fn intern_atom(&self, literal: &str) -> String {
        self.inner.lock().intern_atom(literal)
    }

    pub fn intern_string_literal(&self, literal: &str) -> String {
        self.inner.lock().intern_string_literal(literal)
    }

    pub fn emit(&self) -> Result<usize> {
        self.inner.lock().emit()
    }

    /// Runs `f` with exclusive access to the registry.
    pub fn with<R>(&self, f: impl FnOnce(&mut LiteralRegistry<'a, W>) -> R) -> R {
        let mut registry = self.inner.lock();
        f(&mut *registry)
    }

    pub fn into_inner(self) -> LiteralRegistry<'a, W> {
        self.inner.into_inner()
    }

    pub fn finish(self) -> Result<Option<W>> {
        self.into_inner().finish()
    }
}

impl<'a, W: Write> From<LiteralRegistry<'a, W>> for SharedRegistry<'a, W> {
    fn from(registry: LiteralRegistry<'a, W>) -> Self {
        Self::new(registry)
    }
}
