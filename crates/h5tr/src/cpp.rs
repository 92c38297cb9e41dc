use crate::{
    atoms::AtomList,
    dialect::Dialect,
    error::Result,
    registry::LiteralRegistry,
    strings::{MissingString, StringTable},
};

use h5tr_types::TypeDescriptors;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

// ---------------------------------------------------------------------------
// CppTypes
// ---------------------------------------------------------------------------

/// Type spellings and literal interning for one translation run.
///
/// Bundles the dialect's [`TypeDescriptors`] with a [`LiteralRegistry`] whose
/// atom list, if any, is a file.
pub struct CppTypes<'a> {
    registry: LiteralRegistry<'a, BufWriter<File>>,
}

impl<'a> CppTypes<'a> {
    /// Starts a run in the Gecko dialect.
    ///
    /// `strings` is extended in place with every unseeded string literal. If
    /// `atom_list` is given, the file is created right away.
    pub fn new(strings: &'a mut StringTable, atom_list: Option<&Path>) -> Result<Self> {
        Self::with_dialect(Dialect::gecko(), strings, atom_list)
    }

    pub fn with_dialect(
        dialect: Dialect,
        strings: &'a mut StringTable,
        atom_list: Option<&Path>,
    ) -> Result<Self> {
        let sink = atom_list.map(AtomList::create).transpose()?;
        Ok(Self {
            registry: LiteralRegistry::new(dialect, strings, sink),
        })
    }

    /// Redirects missing string literal reports to `writer`.
    pub fn with_diagnostics(self, writer: impl Write + Send + 'a) -> Self {
        Self {
            registry: self.registry.with_diagnostics(writer),
        }
    }

    #[inline]
    pub fn types(&self) -> &'static TypeDescriptors {
        self.registry.descriptors()
    }

    /// The atom reference for a local name literal.
    pub fn local_for_literal(&mut self, literal: &str) -> String {
        self.registry.intern_atom(literal)
    }

    /// The string literal reference for `literal`.
    pub fn string_for_literal(&mut self, literal: &str) -> String {
        self.registry.intern_string_literal(literal)
    }

    pub fn missing_strings(&self) -> &[MissingString] {
        self.registry.missing_strings()
    }

    /// Ends the run: writes pending atoms, then flushes and closes the atom
    /// list.
    pub fn finish(self) -> Result<()> {
        match self.registry.finish_into_list()? {
            None => Ok(()),
            Some(list) => {
                let written = list.written();
                list.close_file()?;
                tracing::debug!(written, "closed atom list");
                Ok(())
            }
        }
    }
}
