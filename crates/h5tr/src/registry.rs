//! The literal identifier registry.
//!
//! [`LiteralRegistry`] turns literal text met by the translator into
//! references to named constants of the generated code. It keeps two
//! independent tables:
//!
//! - **Atoms** are owned by the generator. Their names are minted here, kept
//!   clear of the dialect's reserved words, and declared in the atom list.
//! - **String literals** are declared by hand elsewhere. The registry extends
//!   the caller's seed table when it meets an unknown literal and reports the
//!   declaration a maintainer has to add.
//!
//! Interning never touches the atom list. Declarations queue up until
//! [`LiteralRegistry::emit`] or [`LiteralRegistry::finish`] writes them.

use crate::{
    atoms::{AtomDeclaration, AtomList},
    dialect::Dialect,
    error::Result,
    strings::{MissingString, StringLiterals, StringTable},
};

use h5tr_names::{sanitize, Namespace};
use h5tr_types::TypeDescriptors;

use std::{
    collections::HashMap,
    io::{self, Write},
};

pub struct LiteralRegistry<'a, W: Write = io::Sink> {
    dialect: Dialect,
    /// Literal text to its index in `atoms`.
    atom_index: HashMap<String, usize>,
    /// Every atom minted so far, in minting order.
    atoms: Vec<AtomDeclaration>,
    atom_names: Namespace,
    /// Atoms before this index have been handed to the sink.
    emitted: usize,
    strings: StringLiterals<'a>,
    missing: Vec<MissingString>,
    sink: Option<AtomList<W>>,
    diagnostics: Box<dyn Write + Send + 'a>,
}

impl<'a> LiteralRegistry<'a> {
    /// Creates a registry without an atom list.
    pub fn detached(dialect: Dialect, strings: &'a mut StringTable) -> Self {
        Self::new(dialect, strings, None)
    }
}

impl<'a, W: Write> LiteralRegistry<'a, W> {
    /// Creates a registry extending `strings` and declaring atoms to `sink`.
    ///
    /// Missing string literals are reported to stderr unless another stream
    /// is set with [`LiteralRegistry::with_diagnostics`].
    pub fn new(dialect: Dialect, strings: &'a mut StringTable, sink: Option<AtomList<W>>) -> Self {
        Self {
            dialect,
            atom_index: HashMap::new(),
            atoms: Vec::new(),
            atom_names: Namespace::new(),
            emitted: 0,
            strings: StringLiterals::new(strings),
            missing: Vec::new(),
            sink,
            diagnostics: Box::new(io::stderr()),
        }
    }

    /// Redirects missing string literal reports to `writer`.
    pub fn with_diagnostics(mut self, writer: impl Write + Send + 'a) -> Self {
        self.diagnostics = Box::new(writer);
        self
    }

    #[inline]
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    #[inline]
    pub fn descriptors(&self) -> &'static TypeDescriptors {
        self.dialect.descriptors
    }

    /// Returns the reference to the atom constant for `literal`.
    pub fn intern_atom(&mut self, literal: &str) -> String {
        let index = match self.atom_index.get(literal) {
            Some(&index) => index,
            None => self.mint_atom(literal),
        };
        format!("{}::{}", self.descriptors().atoms_holder(), self.atoms[index].name)
    }

    fn mint_atom(&mut self, literal: &str) -> usize {
        let candidate = sanitize(literal, self.dialect.empty_placeholder);
        let name = self
            .atom_names
            .mint_avoiding(candidate, &self.dialect.reserved);
        tracing::debug!(literal, name = %name, "minted atom");
        let index = self.atoms.len();
        self.atoms.push(AtomDeclaration {
            name,
            literal: literal.to_owned(),
        });
        self.atom_index.insert(literal.to_owned(), index);
        index
    }

    /// The minted suffix for `literal`, if it was interned as an atom.
    pub fn atom_name(&self, literal: &str) -> Option<&str> {
        self.atom_index
            .get(literal)
            .map(|&index| self.atoms[index].name.as_str())
    }

    /// Every atom minted so far, in minting order.
    pub fn atoms(&self) -> &[AtomDeclaration] {
        &self.atoms
    }

    /// Atoms minted since the last [`LiteralRegistry::emit`].
    pub fn pending(&self) -> &[AtomDeclaration] {
        &self.atoms[self.emitted..]
    }

    /// Returns the reference to the string literal constant for `literal`.
    ///
    /// An unseeded literal gets a fresh name, which is added to the caller's
    /// table and reported once on the diagnostic stream. Translation goes on
    /// either way.
    pub fn intern_string_literal(&mut self, literal: &str) -> String {
        let (name, missing) =
            self.strings
                .intern(literal, self.dialect.empty_placeholder, self.dialect.descriptors);
        if let Some(missing) = missing {
            self.report(missing);
        }
        format!("{}::{}", self.descriptors().string_literals_holder(), name)
    }

    fn report(&mut self, missing: MissingString) {
        tracing::warn!(literal = %missing.literal, name = %missing.name, "missing string literal");
        if let Err(e) = writeln!(self.diagnostics, "{missing}") {
            tracing::warn!(error = %e, "failed to report missing string literal");
        }
        self.missing.push(missing);
    }

    /// String literals that were not in the seed table, in discovery order.
    pub fn missing_strings(&self) -> &[MissingString] {
        &self.missing
    }

    /// Writes the pending atom declarations to the atom list.
    ///
    /// Returns how many declarations were written. Without an atom list
    /// nothing is written, but the pending queue is still drained.
    pub fn emit(&mut self) -> Result<usize> {
        let pending = &self.atoms[self.emitted..];
        let count = pending.len();
        if let Some(sink) = &mut self.sink {
            let atom_macro = self.dialect.descriptors.atom_macro();
            for decl in pending {
                sink.declare(atom_macro, decl)?;
                // Keep the queue consistent with what actually reached the sink.
                self.emitted += 1;
            }
            tracing::debug!(count, total = sink.written(), "emitted atom declarations");
        } else {
            self.emitted += count;
        }
        Ok(count)
    }

    /// Emits what is pending, then flushes and releases the atom list.
    ///
    /// Returns the atom list's writer, if there was one.
    pub fn finish(mut self) -> Result<Option<W>> {
        self.emit()?;
        self.diagnostics.flush().ok();
        self.sink.take().map(AtomList::close).transpose()
    }

    /// Like [`LiteralRegistry::finish`], but hands back the atom list itself
    /// so the caller can close it in a writer-specific way.
    pub(crate) fn finish_into_list(mut self) -> Result<Option<AtomList<W>>> {
        self.emit()?;
        self.diagnostics.flush().ok();
        Ok(self.sink.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use h5tr_names::ReservedWords;

    fn registry(table: &mut StringTable) -> LiteralRegistry<'_, Vec<u8>> {
        LiteralRegistry::new(Dialect::gecko(), table, Some(AtomList::new(Vec::new())))
            .with_diagnostics(io::sink())
    }

    #[test]
    fn atom_reference() {
        let mut table = StringTable::new();
        let mut reg = registry(&mut table);
        assert_eq!(reg.intern_atom("div"), "nsHtml5Atoms::div");
        assert_eq!(reg.intern_atom("xlink:href"), "nsHtml5Atoms::xlink_href");
    }

    #[test]
    fn atom_is_idempotent() {
        let mut table = StringTable::new();
        let mut reg = registry(&mut table);
        let first = reg.intern_atom("a-b");
        let second = reg.intern_atom("a-b");
        assert_eq!(first, second);
        assert_eq!(reg.atoms().len(), 1);
    }

    #[test]
    fn empty_atom_uses_placeholder() {
        let mut table = StringTable::new();
        let mut reg = registry(&mut table);
        assert_eq!(reg.intern_atom(""), "nsHtml5Atoms::emptystring");
        assert_eq!(reg.atom_name(""), Some("emptystring"));
    }

    #[test]
    fn colliding_atoms_get_underscores() {
        let mut table = StringTable::new();
        let mut reg = registry(&mut table);
        assert_eq!(reg.intern_atom("a-b"), "nsHtml5Atoms::a_b");
        assert_eq!(reg.intern_atom("a.b"), "nsHtml5Atoms::a_b_");
        assert_eq!(reg.intern_atom("a_b"), "nsHtml5Atoms::a_b__");
    }

    #[test]
    fn reserved_atoms_are_renamed() {
        let mut table = StringTable::new();
        let mut reg = registry(&mut table);
        assert_eq!(reg.intern_atom("for"), "nsHtml5Atoms::for_");
        assert_eq!(reg.intern_atom("template"), "nsHtml5Atoms::template_");
        assert_eq!(reg.intern_atom("for_"), "nsHtml5Atoms::for__");
    }

    #[test]
    fn custom_reserved_words() {
        let mut table = StringTable::new();
        let dialect = Dialect::gecko().with_reserved(ReservedWords::none().with("div"));
        let mut reg = LiteralRegistry::detached(dialect, &mut table);
        assert_eq!(reg.intern_atom("div"), "nsHtml5Atoms::div_");
        assert_eq!(reg.intern_atom("for"), "nsHtml5Atoms::for");
    }

    #[test]
    fn minted_atoms_are_unique_and_not_reserved() {
        let literals = [
            "a-b", "a.b", "a_b", "a b", "for", "for_", "", "_", "-", "class", "1", "_1", "é",
            "small", "xor", "not",
        ];
        let mut table = StringTable::new();
        let mut reg = registry(&mut table);
        literals.iter().for_each(|l| {
            reg.intern_atom(l);
        });
        let mut seen = std::collections::HashSet::new();
        for decl in reg.atoms() {
            assert!(seen.insert(decl.name.clone()), "duplicate {}", decl.name);
            assert!(!reg.dialect().reserved.contains(&decl.name));
        }
        assert_eq!(seen.len(), literals.len());
    }

    #[test]
    fn leading_digits_are_kept() {
        let mut table = StringTable::new();
        let mut reg = registry(&mut table);
        assert_eq!(reg.intern_atom("1"), "nsHtml5Atoms::1");
        assert_eq!(reg.intern_atom("_1"), "nsHtml5Atoms::_1");
        assert_eq!(
            reg.intern_string_literal("2d"),
            "nsHtml5StringLiterals::2d"
        );
        drop(reg);
        assert_eq!(table.get("2d").map(String::as_str), Some("2d"));
    }

    #[test]
    fn atoms_and_strings_do_not_collide_with_each_other() {
        let mut table = StringTable::new();
        let mut reg = registry(&mut table);
        assert_eq!(reg.intern_atom("title"), "nsHtml5Atoms::title");
        assert_eq!(
            reg.intern_string_literal("title"),
            "nsHtml5StringLiterals::title"
        );
    }

    #[test]
    fn emit_writes_pending_declarations() {
        let mut table = StringTable::new();
        let mut reg = registry(&mut table);
        reg.intern_atom("svg");
        reg.intern_atom("math");
        assert_eq!(reg.pending().len(), 2);
        assert_eq!(reg.emit().unwrap(), 2);
        assert!(reg.pending().is_empty());
        assert_eq!(reg.emit().unwrap(), 0);
        reg.intern_atom("svg");
        reg.intern_atom("for");
        assert_eq!(reg.pending().len(), 1);
        let out = String::from_utf8(reg.finish().unwrap().unwrap()).unwrap();
        assert_eq!(
            out,
            "HTML5_ATOM(svg, \"svg\")\nHTML5_ATOM(math, \"math\")\nHTML5_ATOM(for_, \"for\")\n"
        );
    }

    #[test]
    fn declarations_keep_the_original_literal() {
        let mut table = StringTable::new();
        let mut reg = registry(&mut table);
        reg.intern_atom("xml:lang");
        reg.intern_atom("say \"hi\"");
        reg.intern_atom("");
        let out = String::from_utf8(reg.finish().unwrap().unwrap()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            [
                r#"HTML5_ATOM(xml_lang, "xml:lang")"#,
                r#"HTML5_ATOM(say__hi_, "say \"hi\"")"#,
                r#"HTML5_ATOM(emptystring, "")"#,
            ]
        );
    }

    #[test]
    fn detached_registry_finishes_without_output() {
        let mut table = StringTable::new();
        let mut reg = LiteralRegistry::detached(Dialect::gecko(), &mut table)
            .with_diagnostics(io::sink());
        reg.intern_atom("div");
        assert_eq!(reg.emit().unwrap(), 1);
        assert!(reg.finish().unwrap().is_none());
    }

    #[test]
    fn seeded_string_literal() {
        let mut table = StringTable::from([("hello".to_string(), "HELLO".to_string())]);
        let mut diag = Vec::new();
        let mut reg = LiteralRegistry::detached(Dialect::gecko(), &mut table)
            .with_diagnostics(&mut diag);
        assert_eq!(
            reg.intern_string_literal("hello"),
            "nsHtml5StringLiterals::HELLO"
        );
        assert!(reg.missing_strings().is_empty());
        reg.finish().unwrap();
        assert!(diag.is_empty());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn missing_string_literal_is_reported_once() {
        let mut table = StringTable::from([("a b".to_string(), "a_b".to_string())]);
        let mut diag = Vec::new();
        let mut reg = LiteralRegistry::detached(Dialect::gecko(), &mut table)
            .with_diagnostics(&mut diag);
        assert_eq!(
            reg.intern_string_literal("a-b"),
            "nsHtml5StringLiterals::a_b_"
        );
        assert_eq!(
            reg.intern_string_literal("a-b"),
            "nsHtml5StringLiterals::a_b_"
        );
        assert_eq!(reg.missing_strings().len(), 1);
        reg.finish().unwrap();
        let diag = String::from_utf8(diag).unwrap();
        assert_eq!(
            diag,
            "MISSING STRING:  (a_b_ = new nsString())->Assign(NS_LITERAL_STRING(\"a-b\"));\n"
        );
        assert_eq!(table.get("a-b").map(String::as_str), Some("a_b_"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn empty_string_literal_uses_placeholder() {
        let mut table = StringTable::new();
        let mut reg = LiteralRegistry::detached(Dialect::gecko(), &mut table)
            .with_diagnostics(io::sink());
        assert_eq!(
            reg.intern_string_literal(""),
            "nsHtml5StringLiterals::emptystring"
        );
    }

    /// Accepts the given number of lines, then fails every write.
    struct FailAfterLines(usize);

    impl Write for FailAfterLines {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.0 == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            let lines = buf.iter().filter(|&&b| b == b'\n').count();
            self.0 = self.0.saturating_sub(lines);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_emit_keeps_unwritten_atoms_pending() {
        let mut table = StringTable::new();
        let mut reg = LiteralRegistry::new(
            Dialect::gecko(),
            &mut table,
            Some(AtomList::new(FailAfterLines(1))),
        )
        .with_diagnostics(io::sink());
        reg.intern_atom("a");
        reg.intern_atom("b");
        assert!(matches!(reg.emit(), Err(Error::WriteAtomList(_))));
        assert_eq!(reg.pending().len(), 1);
        assert_eq!(reg.pending()[0].literal, "b");
    }

    /// Accepts every write but fails to flush.
    struct FlushFails;

    impl Write for FlushFails {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }

    #[test]
    fn finish_reports_flush_failure() {
        let mut table = StringTable::new();
        let mut reg = LiteralRegistry::new(
            Dialect::gecko(),
            &mut table,
            Some(AtomList::new(FlushFails)),
        )
        .with_diagnostics(io::sink());
        reg.intern_atom("a");
        assert!(matches!(reg.finish(), Err(Error::CloseAtomList(_))));
    }
}
