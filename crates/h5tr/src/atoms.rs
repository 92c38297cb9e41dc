use crate::error::{Error, Result};

use h5tr_names::escape;

use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

// ---------------------------------------------------------------------------
// AtomDeclaration
// ---------------------------------------------------------------------------

/// A minted atom together with the literal it was minted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomDeclaration {
    /// The identifier suffix, e.g. `for_`.
    pub name: String,
    /// The literal exactly as the front end passed it.
    pub literal: String,
}

impl AtomDeclaration {
    /// Renders the declaration as one atom list line, without the newline.
    pub fn display<'a>(&'a self, atom_macro: &'a str) -> impl fmt::Display + 'a {
        DisplayDeclaration {
            decl: self,
            atom_macro,
        }
    }
}

struct DisplayDeclaration<'a> {
    decl: &'a AtomDeclaration,
    atom_macro: &'a str,
}

impl fmt::Display for DisplayDeclaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}({}, \"{}\")",
            self.atom_macro,
            self.decl.name,
            escape(&self.decl.literal)
        )
    }
}

// ---------------------------------------------------------------------------
// AtomList
// ---------------------------------------------------------------------------

/// The side-channel sink receiving one line per newly minted atom.
///
/// Lines are only ever appended. Closing the list consumes it, so it can be
/// flushed and released at most once.
#[derive(Debug)]
pub struct AtomList<W: Write> {
    writer: W,
    written: usize,
}

impl AtomList<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::OpenAtomList {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// Flushes buffered lines and waits for the file to reach the disk.
    pub fn close_file(self) -> Result<()> {
        let file = self
            .close()?
            .into_inner()
            .map_err(|e| Error::CloseAtomList(e.into_error()))?;
        file.sync_all().map_err(Error::CloseAtomList)
    }
}

impl<W: Write> AtomList<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of lines written so far.
    #[inline]
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn declare(&mut self, atom_macro: &str, decl: &AtomDeclaration) -> Result<()> {
        writeln!(self.writer, "{}", decl.display(atom_macro)).map_err(Error::WriteAtomList)?;
        self.written += 1;
        Ok(())
    }

    /// Flushes the list and hands back the underlying writer.
    pub fn close(mut self) -> Result<W> {
        self.writer.flush().map_err(Error::CloseAtomList)?;
        Ok(self.writer)
    }
}
