//! Text preparation for content streams.
//!
//! Two small, total transformations sit between recipe text and the PDF
//! operators: hex encoding into the single-byte font encoding, and greedy
//! character-count line wrapping.

pub mod encode;
pub mod wrap;

pub use encode::text_to_pdf_hex;
pub use wrap::wrap_text;
