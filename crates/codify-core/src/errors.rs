use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a generation run. No variant is retried.
#[derive(Debug, Error)]
pub enum CodifyError {
    /// Resource path missing or unreadable.
    #[error("failed to read resource `{}`: {}", .path.display(), .source)]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Resource file name is not valid UTF-8, so no identifier can be
    /// derived from it.
    #[error("resource file name is not valid UTF-8: `{}`", .path.display())]
    Encoding { path: PathBuf },

    /// The output formatter itself failed while rendering.
    #[error("failed to render output text")]
    Template(#[from] std::fmt::Error),
}
