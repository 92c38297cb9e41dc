use h5tr_names::{ReservedWords, EMPTY_PLACEHOLDER};
use h5tr_types::{TypeDescriptors, GECKO};

// ---------------------------------------------------------------------------
// Dialect
// ---------------------------------------------------------------------------

/// Everything the registry needs to know about one target dialect.
///
/// `reserved` is consulted for atoms only. String literal names are reviewed
/// by hand before they are declared, so that path only avoids collisions
/// with other string literal names.
#[derive(Debug, Clone)]
pub struct Dialect {
    pub descriptors: &'static TypeDescriptors,
    pub reserved: ReservedWords,
    /// Candidate used for literals that sanitize to nothing.
    pub empty_placeholder: &'static str,
}

impl Dialect {
    pub fn gecko() -> Self {
        Self {
            descriptors: &GECKO,
            reserved: ReservedWords::gecko_cpp(),
            empty_placeholder: EMPTY_PLACEHOLDER,
        }
    }

    pub fn with_reserved(mut self, reserved: ReservedWords) -> Self {
        self.reserved = reserved;
        self
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::gecko()
    }
}
