use crate::foundation::error::{BytereelError, BytereelResult};
use std::path::{Path, PathBuf};

/// The raw content of one input file.
///
/// Read in full and never mutated afterwards; dropped once its frames are built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteStream {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl ByteStream {
    /// Path the bytes were read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Borrow the content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Return `true` for a zero-length file.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Read the complete content of `path`.
///
/// There is no partial-read recovery: a missing file is [`BytereelError::NotFound`], any other
/// failure is [`BytereelError::Io`].
pub fn read_bytes(path: impl AsRef<Path>) -> BytereelResult<ByteStream> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| BytereelError::read(path, e))?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "read input file");
    Ok(ByteStream {
        path: path.to_path_buf(),
        bytes,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/ingest/reader.rs"]
mod tests;
