use std::path::PathBuf;

/// Result alias used across the crate.
pub type BytereelResult<T> = Result<T, BytereelError>;

/// Errors produced by the byte-to-video pipeline.
#[derive(thiserror::Error, Debug)]
pub enum BytereelError {
    /// An input file does not exist.
    #[error("file not found: '{}'", path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// An input file exists but could not be opened or read.
    #[error("io error reading '{}': {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The encoder rejected a frame set or the encoder process failed.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Invalid configuration or input values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed file discovery pattern.
    #[error("pattern error: {0}")]
    Pattern(String),

    /// Anything else, with context attached by the caller.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BytereelError {
    /// Build a read error for `path`, mapping `NotFound` to its own variant.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Shorthand for [`BytereelError::Encoding`].
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Shorthand for [`BytereelError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Shorthand for [`BytereelError::Pattern`].
    pub fn pattern(msg: impl Into<String>) -> Self {
        Self::Pattern(msg.into())
    }

    /// Return `true` for errors raised while reading an input file.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Io { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
