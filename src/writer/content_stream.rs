//! PDF content stream builder.
//!
//! Accumulates text-drawing operators for one page at a time, tracking the
//! vertical cursor and breaking to a fresh page before any write that would
//! cross the bottom margin. Pages are finalized in order and never revisited.

use std::fmt::Write;

use super::{
    DEFAULT_FONT_SIZE, MAX_LINE_CHARACTERS, PAGE_HEIGHT, PAGE_MARGIN, SUBTITLE_FONT_SIZE,
    TITLE_FONT_SIZE,
};
use crate::text::{text_to_pdf_hex, wrap_text};

/// Options for [`ContentStreamBuilder::add_wrapped_text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    /// Horizontal offset from the left margin, in points.
    pub indent: i32,
    /// Maximum characters per line; derived from the indent when `None`.
    pub max_length: Option<usize>,
}

impl TextOptions {
    /// Set the horizontal indent.
    pub fn with_indent(mut self, indent: i32) -> Self {
        self.indent = indent;
        self
    }

    /// Set an explicit maximum line length.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

/// Builds per-page content streams with automatic pagination.
///
/// The cursor starts at the top margin and decreases monotonically while a
/// page is open; a pending line or spacer that would push it below the bottom
/// margin closes the page first, so content is never emitted partially
/// off-page.
#[derive(Debug, Default)]
pub struct ContentStreamBuilder {
    pages: Vec<String>,
    current: String,
    cursor: i32,
}

impl ContentStreamBuilder {
    /// Create a builder with the cursor at the top margin of a blank page.
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: String::new(),
            cursor: PAGE_HEIGHT - PAGE_MARGIN,
        }
    }

    /// Leading per line for a given font size.
    ///
    /// Tiered stand-in for metrics-based leading: headings get +8, subtitles
    /// +6, small body text +2, everything else +4.
    fn line_height(font_size: i32) -> i32 {
        if font_size >= TITLE_FONT_SIZE {
            font_size + 8
        } else if font_size >= SUBTITLE_FONT_SIZE {
            font_size + 6
        } else if font_size <= 10 {
            font_size + 2
        } else {
            font_size + 4
        }
    }

    /// The single-space show-text command used for pages that would
    /// otherwise have an empty content stream.
    pub(crate) fn placeholder_command() -> String {
        format!(
            "BT /F1 {} Tf 1 0 0 1 {} {} Tm <{}> Tj ET\n",
            DEFAULT_FONT_SIZE,
            PAGE_MARGIN,
            PAGE_HEIGHT - PAGE_MARGIN,
            text_to_pdf_hex(" "),
        )
    }

    fn ensure_page_space(&mut self, font_size: i32) {
        if self.cursor - Self::line_height(font_size) < PAGE_MARGIN {
            self.start_new_page();
        }
    }

    fn start_new_page(&mut self) {
        if !self.current.is_empty() {
            self.pages.push(std::mem::take(&mut self.current));
        } else if self.pages.is_empty() {
            self.pages.push(Self::placeholder_command());
        }

        self.current.clear();
        self.cursor = PAGE_HEIGHT - PAGE_MARGIN;
        log::debug!("content overflow, starting page {}", self.pages.len() + 1);
    }

    /// Write `text` at the given size, then a half-size spacer.
    pub fn add_heading(&mut self, text: &str, font_size: i32) {
        self.add_wrapped_text(text, font_size, TextOptions::default());
        self.add_spacer(font_size / 2);
    }

    /// Wrap `text` and emit one show-text command per line.
    ///
    /// The default line length shrinks with the indent and never drops below
    /// 40 characters. Each line is page-break checked before it is written.
    pub fn add_wrapped_text(&mut self, text: &str, font_size: i32, options: TextOptions) {
        if text.is_empty() {
            return;
        }

        let indent = options.indent;
        let max_length = options
            .max_length
            .unwrap_or_else(|| (MAX_LINE_CHARACTERS as i32 - indent / 4).max(40) as usize);

        for line in wrap_text(text, max_length) {
            self.ensure_page_space(font_size);
            let x = PAGE_MARGIN + indent;
            // Writing into a String cannot fail.
            let _ = write!(
                self.current,
                "BT /F1 {} Tf 1 0 0 1 {} {} Tm <{}> Tj ET\n",
                font_size,
                x,
                self.cursor,
                text_to_pdf_hex(&line),
            );
            self.cursor -= Self::line_height(font_size);
        }
    }

    /// Move the cursor down by `size` points, or break to a new page when
    /// the spacer would cross the bottom margin (the break replaces it).
    pub fn add_spacer(&mut self, size: i32) {
        if self.cursor - size < PAGE_MARGIN {
            self.start_new_page();
            return;
        }

        self.cursor -= size;
    }

    /// Close the current page and return all page content streams in order.
    ///
    /// A page with no content gets the single-space placeholder so no page
    /// ever carries a truly empty stream.
    pub fn finalize(mut self) -> Vec<String> {
        if self.current.is_empty() {
            self.current = Self::placeholder_command();
        }

        self.pages.push(self.current);
        self.pages
    }
}
