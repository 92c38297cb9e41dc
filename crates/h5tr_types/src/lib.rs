//! Target-language spellings for the abstract types and literals of the
//! translated parser.
//!
//! [`TypeDescriptors`] is the single place these spellings are defined. The
//! table is immutable and `'static`, so it can be shared freely between
//! translation tasks.

use std::{fmt, str::FromStr};

// ---------------------------------------------------------------------------
// TypeCategory
// ---------------------------------------------------------------------------

/// The closed set of abstract source types that have a target spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    /// `boolean`.
    Boolean,
    /// A UTF-16 code unit.
    Char,
    /// A signed 32-bit integer.
    Int,
    /// A handle to an owned string.
    String,
    /// A handle to an interned local name.
    Local,
    /// A handle to an interned namespace prefix.
    Prefix,
    /// A namespace identifier.
    NsUri,
    /// A handle to a generic tree node.
    Node,
    /// A handle to the encoding declaration handler.
    EncodingDeclarationHandler,
    /// A handle to the document mode handler.
    DocumentModeHandler,
    /// A document mode value.
    DocumentMode,
}

static CATEGORIES: phf::Map<&'static str, TypeCategory> = phf::phf_map! {
    "boolean" => TypeCategory::Boolean,
    "char" => TypeCategory::Char,
    "int" => TypeCategory::Int,
    "string" => TypeCategory::String,
    "local" => TypeCategory::Local,
    "prefix" => TypeCategory::Prefix,
    "nsuri" => TypeCategory::NsUri,
    "node" => TypeCategory::Node,
    "encoding_declaration_handler" => TypeCategory::EncodingDeclarationHandler,
    "document_mode_handler" => TypeCategory::DocumentModeHandler,
    "document_mode" => TypeCategory::DocumentMode,
};

impl TypeCategory {
    pub const ALL: [TypeCategory; 11] = [
        TypeCategory::Boolean,
        TypeCategory::Char,
        TypeCategory::Int,
        TypeCategory::String,
        TypeCategory::Local,
        TypeCategory::Prefix,
        TypeCategory::NsUri,
        TypeCategory::Node,
        TypeCategory::EncodingDeclarationHandler,
        TypeCategory::DocumentModeHandler,
        TypeCategory::DocumentMode,
    ];

    /// The name accepted by [`TypeCategory::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            TypeCategory::Boolean => "boolean",
            TypeCategory::Char => "char",
            TypeCategory::Int => "int",
            TypeCategory::String => "string",
            TypeCategory::Local => "local",
            TypeCategory::Prefix => "prefix",
            TypeCategory::NsUri => "nsuri",
            TypeCategory::Node => "node",
            TypeCategory::EncodingDeclarationHandler => "encoding_declaration_handler",
            TypeCategory::DocumentModeHandler => "document_mode_handler",
            TypeCategory::DocumentMode => "document_mode",
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A category name the front end asked for that does not exist.
///
/// This signals a contract mismatch between the front end and this table and
/// is not meant to be recovered from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for TypeCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATEGORIES
            .get(s)
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// NamespaceKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamespaceKind {
    None,
    Xhtml,
    Svg,
    MathMl,
    XLink,
    Xml,
    Xmlns,
}

impl NamespaceKind {
    pub const ALL: [NamespaceKind; 7] = [
        NamespaceKind::None,
        NamespaceKind::Xhtml,
        NamespaceKind::Svg,
        NamespaceKind::MathMl,
        NamespaceKind::XLink,
        NamespaceKind::Xml,
        NamespaceKind::Xmlns,
    ];
}

// ---------------------------------------------------------------------------
// Supplement
// ---------------------------------------------------------------------------

/// Generated classes whose output is completed by hand-written files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplementClass {
    TreeBuilder,
    Utf16Buffer,
}

/// The pair of hand-written files spliced into a generated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Supplement {
    /// Included into the class declaration.
    pub header: &'static str,
    /// Included into the class definition.
    pub body: &'static str,
}

// ---------------------------------------------------------------------------
// TypeDescriptors
// ---------------------------------------------------------------------------

/// The spelling table of one target dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptors {
    class_prefix: &'static str,
    boolean_type: &'static str,
    char_type: &'static str,
    int_type: &'static str,
    string_type: &'static str,
    local_type: &'static str,
    prefix_type: &'static str,
    ns_uri_type: &'static str,
    node_type: &'static str,
    encoding_declaration_handler_type: &'static str,
    document_mode_handler_type: &'static str,
    document_mode_type: &'static str,
    true_literal: &'static str,
    false_literal: &'static str,
    null_literal: &'static str,
    no_namespace_literal: &'static str,
    xhtml_namespace_literal: &'static str,
    svg_namespace_literal: &'static str,
    mathml_namespace_literal: &'static str,
    xlink_namespace_literal: &'static str,
    xml_namespace_literal: &'static str,
    xmlns_namespace_literal: &'static str,
    array_template: &'static str,
    static_array_macro: &'static str,
    array_copy: &'static str,
    max_integer: &'static str,
    atoms_holder: &'static str,
    string_literals_holder: &'static str,
    atom_macro: &'static str,
    string_object_type: &'static str,
    string_literal_macro: &'static str,
    boilerplate_includes: &'static [&'static str],
    named_characters_includes: &'static [&'static str],
    boilerplate_forward_declarations: &'static [&'static str],
    tree_builder_supplement: Supplement,
    utf16_buffer_supplement: Supplement,
}

/// Spellings for the Gecko flavour of C++.
pub static GECKO: TypeDescriptors = TypeDescriptors {
    class_prefix: "nsHtml5",
    boolean_type: "PRBool",
    char_type: "PRUnichar",
    int_type: "PRInt32",
    string_type: "nsString*",
    local_type: "nsIAtom*",
    prefix_type: "nsIAtom*",
    ns_uri_type: "PRInt32",
    node_type: "nsIContent*",
    encoding_declaration_handler_type: "nsHtml5Parser*",
    document_mode_handler_type: "nsHtml5Parser*",
    document_mode_type: "nsHtml5DocumentMode",
    true_literal: "PR_TRUE",
    false_literal: "PR_FALSE",
    null_literal: "nsnull",
    no_namespace_literal: "kNameSpaceID_None",
    xhtml_namespace_literal: "kNameSpaceID_XHTML",
    svg_namespace_literal: "kNameSpaceID_SVG",
    mathml_namespace_literal: "kNameSpaceID_MathML",
    xlink_namespace_literal: "kNameSpaceID_XLink",
    xml_namespace_literal: "kNameSpaceID_XML",
    xmlns_namespace_literal: "kNameSpaceID_XMLNS",
    array_template: "jArray",
    static_array_macro: "J_ARRAY_STATIC",
    array_copy: "nsHtml5ArrayCopy::arraycopy",
    max_integer: "PR_INT32_MAX",
    atoms_holder: "nsHtml5Atoms",
    string_literals_holder: "nsHtml5StringLiterals",
    atom_macro: "HTML5_ATOM",
    string_object_type: "nsString",
    string_literal_macro: "NS_LITERAL_STRING",
    boilerplate_includes: &[
        "prtypes",
        "nsIAtom",
        "nsString",
        "nsINameSpaceManager",
        "nsIContent",
        "nsIDocument",
        "jArray",
        "nsHtml5DocumentMode",
        "nsHtml5ArrayCopy",
        "nsHtml5NamedCharacters",
        "nsHtml5Parser",
        "nsHtml5StringLiterals",
        "nsHtml5Atoms",
    ],
    named_characters_includes: &["prtypes", "jArray", "nscore"],
    boilerplate_forward_declarations: &["nsHtml5Parser"],
    tree_builder_supplement: Supplement {
        header: "nsHtml5TreeBuilderHSupplement.h",
        body: "nsHtml5TreeBuilderCppSupplement.h",
    },
    utf16_buffer_supplement: Supplement {
        header: "nsHtml5UTF16BufferHSupplement.h",
        body: "nsHtml5UTF16BufferCppSupplement.h",
    },
};

impl TypeDescriptors {
    /// The spelling of an abstract type.
    pub fn type_name(&self, category: TypeCategory) -> &'static str {
        match category {
            TypeCategory::Boolean => self.boolean_type,
            TypeCategory::Char => self.char_type,
            TypeCategory::Int => self.int_type,
            TypeCategory::String => self.string_type,
            TypeCategory::Local => self.local_type,
            TypeCategory::Prefix => self.prefix_type,
            TypeCategory::NsUri => self.ns_uri_type,
            TypeCategory::Node => self.node_type,
            TypeCategory::EncodingDeclarationHandler => self.encoding_declaration_handler_type,
            TypeCategory::DocumentModeHandler => self.document_mode_handler_type,
            TypeCategory::DocumentMode => self.document_mode_type,
        }
    }

    /// The spelling of a namespace identifier constant.
    pub fn namespace_literal(&self, ns: NamespaceKind) -> &'static str {
        match ns {
            NamespaceKind::None => self.no_namespace_literal,
            NamespaceKind::Xhtml => self.xhtml_namespace_literal,
            NamespaceKind::Svg => self.svg_namespace_literal,
            NamespaceKind::MathMl => self.mathml_namespace_literal,
            NamespaceKind::XLink => self.xlink_namespace_literal,
            NamespaceKind::Xml => self.xml_namespace_literal,
            NamespaceKind::Xmlns => self.xmlns_namespace_literal,
        }
    }

    /// The hand-written files spliced into `class`.
    pub fn supplement(&self, class: SupplementClass) -> Supplement {
        match class {
            SupplementClass::TreeBuilder => self.tree_builder_supplement,
            SupplementClass::Utf16Buffer => self.utf16_buffer_supplement,
        }
    }

    /// Prefix of every generated class name.
    pub fn class_prefix(&self) -> &'static str {
        self.class_prefix
    }

    /// The spelling of `boolean`.
    pub fn boolean_type(&self) -> &'static str {
        self.boolean_type
    }

    /// The spelling of a UTF-16 code unit.
    pub fn char_type(&self) -> &'static str {
        self.char_type
    }

    /// The spelling of a signed 32-bit integer.
    pub fn int_type(&self) -> &'static str {
        self.int_type
    }

    /// The spelling of an owned string handle.
    pub fn string_type(&self) -> &'static str {
        self.string_type
    }

    /// The spelling of an interned local name handle.
    pub fn local_type(&self) -> &'static str {
        self.local_type
    }

    /// The spelling of an interned namespace prefix handle.
    pub fn prefix_type(&self) -> &'static str {
        self.prefix_type
    }

    /// The spelling of a namespace identifier.
    pub fn ns_uri_type(&self) -> &'static str {
        self.ns_uri_type
    }

    /// The spelling of a generic tree node handle.
    pub fn node_type(&self) -> &'static str {
        self.node_type
    }

    /// The spelling of the encoding declaration handler handle.
    pub fn encoding_declaration_handler_type(&self) -> &'static str {
        self.encoding_declaration_handler_type
    }

    /// The spelling of the document mode handler handle.
    pub fn document_mode_handler_type(&self) -> &'static str {
        self.document_mode_handler_type
    }

    /// The spelling of a document mode value.
    pub fn document_mode_type(&self) -> &'static str {
        self.document_mode_type
    }

    /// The `true` literal.
    pub fn true_literal(&self) -> &'static str {
        self.true_literal
    }

    /// The `false` literal.
    pub fn false_literal(&self) -> &'static str {
        self.false_literal
    }

    /// The null pointer literal.
    pub fn null_literal(&self) -> &'static str {
        self.null_literal
    }

    /// The array class template.
    pub fn array_template(&self) -> &'static str {
        self.array_template
    }

    /// The macro declaring a statically initialized array.
    pub fn static_array_macro(&self) -> &'static str {
        self.static_array_macro
    }

    /// The function copying between arrays.
    pub fn array_copy(&self) -> &'static str {
        self.array_copy
    }

    /// The largest value of the integer type.
    pub fn max_integer(&self) -> &'static str {
        self.max_integer
    }

    /// The class holding the generated atom constants.
    pub fn atoms_holder(&self) -> &'static str {
        self.atoms_holder
    }

    /// The class holding the hand-maintained string literal constants.
    pub fn string_literals_holder(&self) -> &'static str {
        self.string_literals_holder
    }

    /// The macro wrapping each line of the atom list.
    pub fn atom_macro(&self) -> &'static str {
        self.atom_macro
    }

    /// The string class named in missing string literal reports.
    pub fn string_object_type(&self) -> &'static str {
        self.string_object_type
    }

    /// The macro wrapping literal text in missing string literal reports.
    pub fn string_literal_macro(&self) -> &'static str {
        self.string_literal_macro
    }

    /// Headers included by every generated file.
    pub fn boilerplate_includes(&self) -> &'static [&'static str] {
        self.boilerplate_includes
    }

    /// Headers included by the named characters table.
    pub fn named_characters_includes(&self) -> &'static [&'static str] {
        self.named_characters_includes
    }

    /// Classes forward-declared by every generated header.
    pub fn boilerplate_forward_declarations(&self) -> &'static [&'static str] {
        self.boilerplate_forward_declarations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gecko_type_names() {
        assert_eq!(GECKO.type_name(TypeCategory::Boolean), "PRBool");
        assert_eq!(GECKO.type_name(TypeCategory::Char), "PRUnichar");
        assert_eq!(GECKO.type_name(TypeCategory::Int), "PRInt32");
        assert_eq!(GECKO.type_name(TypeCategory::String), "nsString*");
        assert_eq!(GECKO.type_name(TypeCategory::Local), "nsIAtom*");
        assert_eq!(GECKO.type_name(TypeCategory::Prefix), "nsIAtom*");
        assert_eq!(GECKO.type_name(TypeCategory::NsUri), "PRInt32");
        assert_eq!(GECKO.type_name(TypeCategory::Node), "nsIContent*");
        assert_eq!(
            GECKO.type_name(TypeCategory::EncodingDeclarationHandler),
            "nsHtml5Parser*"
        );
        assert_eq!(
            GECKO.type_name(TypeCategory::DocumentModeHandler),
            "nsHtml5Parser*"
        );
        assert_eq!(
            GECKO.type_name(TypeCategory::DocumentMode),
            "nsHtml5DocumentMode"
        );
    }

    #[test]
    fn accessors_agree_with_type_name() {
        assert_eq!(GECKO.boolean_type(), GECKO.type_name(TypeCategory::Boolean));
        assert_eq!(GECKO.node_type(), GECKO.type_name(TypeCategory::Node));
        assert_eq!(GECKO.ns_uri_type(), GECKO.type_name(TypeCategory::NsUri));
    }

    #[test]
    fn gecko_literals() {
        assert_eq!(GECKO.true_literal(), "PR_TRUE");
        assert_eq!(GECKO.false_literal(), "PR_FALSE");
        assert_eq!(GECKO.null_literal(), "nsnull");
        assert_eq!(GECKO.max_integer(), "PR_INT32_MAX");
        assert_eq!(GECKO.array_template(), "jArray");
        assert_eq!(GECKO.static_array_macro(), "J_ARRAY_STATIC");
        assert_eq!(GECKO.array_copy(), "nsHtml5ArrayCopy::arraycopy");
    }

    #[test]
    fn namespace_literals_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for ns in NamespaceKind::ALL {
            let literal = GECKO.namespace_literal(ns);
            assert!(literal.starts_with("kNameSpaceID_"));
            assert!(seen.insert(literal));
        }
        assert_eq!(GECKO.namespace_literal(NamespaceKind::MathMl), "kNameSpaceID_MathML");
        assert_eq!(GECKO.namespace_literal(NamespaceKind::None), "kNameSpaceID_None");
    }

    #[test]
    fn holders_carry_class_prefix() {
        assert!(GECKO.atoms_holder().starts_with(GECKO.class_prefix()));
        assert!(GECKO.string_literals_holder().starts_with(GECKO.class_prefix()));
        assert_eq!(GECKO.atom_macro(), "HTML5_ATOM");
    }

    #[test]
    fn include_lists() {
        assert_eq!(GECKO.boilerplate_includes().len(), 13);
        assert_eq!(GECKO.boilerplate_includes().first(), Some(&"prtypes"));
        assert_eq!(GECKO.boilerplate_includes().last(), Some(&"nsHtml5Atoms"));
        assert_eq!(
            GECKO.named_characters_includes(),
            &["prtypes", "jArray", "nscore"]
        );
        assert_eq!(GECKO.boilerplate_forward_declarations(), &["nsHtml5Parser"]);
    }

    #[test]
    fn supplements() {
        let tb = GECKO.supplement(SupplementClass::TreeBuilder);
        assert_eq!(tb.header, "nsHtml5TreeBuilderHSupplement.h");
        assert_eq!(tb.body, "nsHtml5TreeBuilderCppSupplement.h");
        let utf16 = GECKO.supplement(SupplementClass::Utf16Buffer);
        assert_eq!(utf16.header, "nsHtml5UTF16BufferHSupplement.h");
        assert_eq!(utf16.body, "nsHtml5UTF16BufferCppSupplement.h");
    }

    #[test]
    fn category_names_round_trip() {
        for category in TypeCategory::ALL {
            assert_eq!(category.name().parse::<TypeCategory>(), Ok(category));
        }
    }

    #[test]
    fn unknown_category() {
        let err = "float".parse::<TypeCategory>().unwrap_err();
        assert_eq!(err, UnknownCategory("float".to_string()));
        assert_eq!(err.to_string(), "unknown type category `float`");
    }
}
