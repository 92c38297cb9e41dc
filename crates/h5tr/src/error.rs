use std::{io, path::PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures that stop a translation run.
///
/// Every variant concerns the atom list. A declaration file that is only
/// partly written would break the next build stage, so none of these are
/// retried or downgraded to warnings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open atom list `{}`", path.display())]
    OpenAtomList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write atom list")]
    WriteAtomList(#[source] io::Error),
    #[error("failed to close atom list")]
    CloseAtomList(#[source] io::Error),
}
