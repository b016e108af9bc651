//! PDF emission: content streams and document assembly.
//!
//! The document model is deliberately minimal: one shared WinAnsi Helvetica
//! font, one US Letter page size, uncompressed content streams, and a
//! hand-written object table, cross-reference table, and trailer. Output is
//! fully deterministic: identical input reproduces an identical byte buffer.

pub mod content_stream;
pub mod pdf_writer;

pub use content_stream::{ContentStreamBuilder, TextOptions};
pub use pdf_writer::build_pdf_document;

/// Page width in points (8.5" at 72 dpi).
pub const PAGE_WIDTH: i32 = 612;
/// Page height in points (11" at 72 dpi).
pub const PAGE_HEIGHT: i32 = 792;
/// Margin on all four sides, in points.
pub const PAGE_MARGIN: i32 = 50;

/// Body text size in points.
pub const DEFAULT_FONT_SIZE: i32 = 12;
/// Title heading size in points.
pub const TITLE_FONT_SIZE: i32 = 20;
/// Section heading size in points.
pub const SUBTITLE_FONT_SIZE: i32 = 14;

/// Default maximum characters per wrapped line at body size.
pub const MAX_LINE_CHARACTERS: usize = 90;
