pub mod atoms;
pub mod cpp;
pub mod dialect;
pub mod error;
pub mod registry;
pub mod shared;
pub mod strings;

pub use h5tr_names as names;
pub use h5tr_types as types;

pub use cpp::CppTypes;
pub use dialect::Dialect;
pub use error::{Error, Result};
pub use registry::LiteralRegistry;
pub use shared::SharedRegistry;
pub use strings::StringTable;
