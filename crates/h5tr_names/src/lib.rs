//! Identifier minting for generated C++ sources.
//!
//! This crate turns arbitrary literal text into identifiers that are valid in
//! the target language and unique within a flat [`Namespace`]. It provides:
//!
//! - [`sanitize`]: maps literal text onto the `[A-Za-z0-9_]` alphabet
//! - [`ReservedWords`]: the keyword set of a target dialect
//! - [`Namespace`]: a flat set of minted names with collision resolution
//! - [`escape`]: quoting of literal text inside generated string literals
//!
//! A namespace has no notion of scopes. Every name inserted lives until the
//! namespace itself is dropped.

mod escape;
mod reserved;

pub use escape::escape;
pub use reserved::ReservedWords;

use string_interner::DefaultStringInterner;

/// The candidate used when a literal sanitizes to the empty string.
pub const EMPTY_PLACEHOLDER: &str = "emptystring";

/// Converts `literal` into an identifier candidate.
///
/// Every character outside `[A-Za-z0-9_]` is replaced by a single `_`, and an
/// empty result is replaced by `placeholder`. Nothing else changes, so names
/// stay identical to those in seed tables kept under the same rule.
pub fn sanitize(literal: &str, placeholder: &str) -> String {
    let candidate: String = literal
        .chars()
        .map(|c| match c.is_ascii_alphanumeric() || c == '_' {
            true => c,
            false => '_',
        })
        .collect();
    if candidate.is_empty() {
        return placeholder.to_owned();
    }
    candidate
}

/// A flat set of minted identifiers.
///
/// Names are stored in a string interner so membership checks during
/// collision resolution are hash lookups rather than scans over every
/// previously minted name.
#[derive(Debug, Default, Clone)]
pub struct Namespace {
    names: DefaultStringInterner,
}

impl Namespace {
    /// Creates an empty `Namespace`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of names in the namespace.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Checks if no name has been inserted yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Checks whether `name` is already taken.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.get(name).is_some()
    }

    /// Marks `name` as taken without any collision resolution.
    ///
    /// Used to seed the namespace with names assigned outside of it.
    pub fn insert(&mut self, name: &str) {
        self.names.get_or_intern(name);
    }

    /// Mints a name from `candidate`, appending `_` until it is free.
    pub fn mint(&mut self, candidate: String) -> String {
        self.mint_with(candidate, |_| false)
    }

    /// Mints a name from `candidate`, appending `_` until it is free and not
    /// a member of `reserved`.
    pub fn mint_avoiding(&mut self, candidate: String, reserved: &ReservedWords) -> String {
        self.mint_with(candidate, |name| reserved.contains(name))
    }

    fn mint_with(&mut self, mut candidate: String, taken: impl Fn(&str) -> bool) -> String {
        // Each retry grows the candidate, and only finitely many names of any
        // given length can be taken, so this terminates.
        while self.contains(&candidate) || taken(&candidate) {
            candidate.push('_');
        }
        self.names.get_or_intern(candidate.as_str());
        candidate
    }
}
