//! Error types for inkline.
//!
//! The streaming core itself is total on arbitrary input — ambiguous
//! markup, unresolved reference links, and malformed tables are all
//! recovered locally and never reach this type (see the error
//! taxonomy categories 1-3 in the design notes). Only use-after-end-
//! of-stream, sink I/O failure, and configuration load failure are
//! raised through the public surface.

use thiserror::Error;

/// Main error type for inkline operations.
#[derive(Error, Debug)]
pub enum InklineError {
    /// I/O error from the sink or from loading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed or located.
    #[error("configuration error: {0}")]
    Config(String),

    /// A write or `complete()` call was made on a writer that has
    /// already been completed or dropped.
    #[error("used after end of stream")]
    Disposed,
}

/// Result type alias for inkline operations.
pub type Result<T> = std::result::Result<T, InklineError>;
