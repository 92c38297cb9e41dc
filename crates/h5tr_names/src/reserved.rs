use std::collections::HashSet;

/// Words of the Gecko C++ dialect that collide with identifiers minted from
/// HTML tag and attribute names.
static GECKO_CPP: phf::Set<&'static str> = phf::phf_set! {
    "and",
    "char",
    "class",
    "default",
    "false",
    "for",
    "int",
    "not",
    "operator",
    "or",
    "small",
    "switch",
    "template",
    "true",
    "union",
    "xor",
};

/// The reserved-word set of a target dialect.
///
/// A set is made of an optional compile-time keyword table plus any number of
/// words added at runtime, so a dialect can extend the built-in table without
/// rebuilding it.
#[derive(Debug, Clone, Default)]
pub struct ReservedWords {
    builtin: Option<&'static phf::Set<&'static str>>,
    extra: HashSet<String>,
}

impl ReservedWords {
    /// An empty set. Nothing is reserved.
    pub fn none() -> Self {
        Self::default()
    }

    /// The keyword set of the Gecko C++ dialect.
    pub fn gecko_cpp() -> Self {
        Self {
            builtin: Some(&GECKO_CPP),
            extra: HashSet::new(),
        }
    }

    /// Adds `word` to the set.
    pub fn with(mut self, word: impl Into<String>) -> Self {
        self.extra.insert(word.into());
        self
    }

    /// Checks whether `word` is reserved.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.builtin.is_some_and(|set| set.contains(word)) || self.extra.contains(word)
    }

    /// Returns the number of distinct reserved words.
    pub fn len(&self) -> usize {
        let builtin = self.builtin.map_or(0, |set| set.len());
        let extra = match self.builtin {
            None => self.extra.len(),
            Some(set) => self.extra.iter().filter(|w| !set.contains(w.as_str())).count(),
        };
        builtin + extra
    }

    /// Checks if nothing is reserved.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: Into<String>> FromIterator<S> for ReservedWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            builtin: None,
            extra: iter.into_iter().map(Into::into).collect(),
        }
    }
}
