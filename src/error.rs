//! Error types for recipe PDF generation.

/// Result type alias for recipe PDF operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while assembling or saving a PDF.
///
/// Generation itself is designed not to fail on well-formed input: every
/// formatting path has a fallback (unsupported characters become `?`, empty
/// sections become placeholder lines, empty pages become a single space
/// glyph). What remains is I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error while writing into the output buffer or saving to disk
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
