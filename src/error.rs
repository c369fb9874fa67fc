use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

// Everything the split pipeline can fail with. Each variant maps to one
// user-facing message printed at the top-level boundary in main.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("input file not found: {0}")]
    NotFound(PathBuf),

    #[error("{path} is not a JSON array of ads: {reason}")]
    Format { path: PathBuf, reason: String },

    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SplitError {
    pub fn format(path: &Path, reason: impl ToString) -> Self {
        Self::Format {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
