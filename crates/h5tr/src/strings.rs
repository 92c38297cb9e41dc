use h5tr_names::{escape, sanitize, Namespace};
use h5tr_types::TypeDescriptors;

use std::{collections::HashMap, fmt};

/// Maps string literal text to the name of its hand-declared constant.
pub type StringTable = HashMap<String, String>;

// ---------------------------------------------------------------------------
// MissingString
// ---------------------------------------------------------------------------

/// A string literal that had no entry in the seed table.
///
/// Its [`Display`](fmt::Display) output is the declaration a maintainer has
/// to add to the string literal holder before the next run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingString {
    pub name: String,
    pub literal: String,
    string_object_type: &'static str,
    string_literal_macro: &'static str,
}

impl MissingString {
    fn new(name: String, literal: &str, descriptors: &TypeDescriptors) -> Self {
        Self {
            name,
            literal: literal.to_owned(),
            string_object_type: descriptors.string_object_type(),
            string_literal_macro: descriptors.string_literal_macro(),
        }
    }
}

impl fmt::Display for MissingString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "MISSING STRING:  ({} = new {}())->Assign({}(\"{}\"));",
            self.name,
            self.string_object_type,
            self.string_literal_macro,
            escape(&self.literal)
        )
    }
}

// ---------------------------------------------------------------------------
// StringLiterals
// ---------------------------------------------------------------------------

/// The string literal interning table.
///
/// The table itself belongs to the caller and is extended in place; the
/// namespace mirrors its values so collision checks stay cheap.
#[derive(Debug)]
pub struct StringLiterals<'a> {
    table: &'a mut StringTable,
    names: Namespace,
}

impl<'a> StringLiterals<'a> {
    pub fn new(table: &'a mut StringTable) -> Self {
        let mut names = Namespace::new();
        table.values().for_each(|name| names.insert(name));
        Self { table, names }
    }

    #[inline]
    pub fn get(&self, literal: &str) -> Option<&str> {
        self.table.get(literal).map(String::as_str)
    }

    /// Returns the name for `literal`, minting one if the table has none.
    ///
    /// A freshly minted name is inserted into the table and reported back as
    /// a [`MissingString`].
    pub fn intern(
        &mut self,
        literal: &str,
        placeholder: &str,
        descriptors: &TypeDescriptors,
    ) -> (String, Option<MissingString>) {
        if let Some(name) = self.table.get(literal) {
            return (name.clone(), None);
        }
        let name = self.names.mint(sanitize(literal, placeholder));
        self.table.insert(literal.to_owned(), name.clone());
        let missing = MissingString::new(name.clone(), literal, descriptors);
        (name, Some(missing))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
