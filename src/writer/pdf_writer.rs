//! PDF document assembly.
//!
//! Takes the ordered page content streams and emits a complete minimal PDF:
//! header, object table, cross-reference table, and trailer. Objects are
//! numbered in allocation order and every cross-reference offset is recorded
//! at the byte where its `N 0 obj` token lands.

use std::io::Write;

use super::content_stream::ContentStreamBuilder;
use super::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::error::Result;

/// Ordered table of serialized indirect objects.
///
/// Ids are assigned in strictly increasing allocation order, so every object
/// referenced by id has been allocated before its referrer is written.
#[derive(Debug, Default)]
struct ObjectTable {
    objects: Vec<String>,
}

impl ObjectTable {
    /// Append an object body and return its id (1-based).
    fn add(&mut self, body: &str) -> usize {
        let id = self.objects.len() + 1;
        self.objects.push(format!("{} 0 obj\n{}\nendobj\n", id, body));
        id
    }

    fn len(&self) -> usize {
        self.objects.len()
    }
}

/// Assemble a complete PDF 1.4 byte buffer from page content streams.
///
/// One shared WinAnsi Helvetica font, one US Letter media box. Object layout
/// is fixed: font, then a content-stream plus page object per page, then the
/// pages tree, then the catalog. An empty page list yields a single
/// placeholder page, and empty individual streams are substituted with the
/// single-space placeholder so every page has a renderable content stream.
///
/// The output is deterministic: no timestamps, no identifiers, no Info
/// dictionary. Identical input reproduces identical bytes.
pub fn build_pdf_document(page_contents: &[String]) -> Result<Vec<u8>> {
    let placeholder = ContentStreamBuilder::placeholder_command();
    let pages: &[String] = if page_contents.is_empty() {
        std::slice::from_ref(&placeholder)
    } else {
        page_contents
    };

    let mut table = ObjectTable::default();
    let mut page_object_ids = Vec::with_capacity(pages.len());

    let font_object_id = table.add(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
    );

    // The pages tree is allocated after all content/page pairs: font is 1,
    // pairs occupy 2..=2n+1, so the tree lands at 2n+2.
    let pages_tree_id = pages.len() * 2 + 2;

    for content in pages {
        let content = if content.is_empty() {
            placeholder.as_str()
        } else {
            content.as_str()
        };

        let content_object_id = table.add(&format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content,
        ));
        let page_object_id = table.add(&format!(
            "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] /Contents {} 0 R /Resources << /Font << /F1 {} 0 R >> >> >>",
            pages_tree_id, PAGE_WIDTH, PAGE_HEIGHT, content_object_id, font_object_id,
        ));
        page_object_ids.push(page_object_id);
    }

    let kids = page_object_ids
        .iter()
        .map(|id| format!("{} 0 R", id))
        .collect::<Vec<_>>()
        .join(" ");
    let pages_object_id = table.add(&format!(
        "<< /Type /Pages /Count {} /Kids [{}] >>",
        page_object_ids.len(),
        kids,
    ));
    debug_assert_eq!(pages_object_id, pages_tree_id);

    let catalog_object_id = table.add(&format!("<< /Type /Catalog /Pages {} 0 R >>", pages_object_id));

    let mut output = Vec::new();
    output.extend_from_slice(b"%PDF-1.4\n");

    let mut xref_offsets = Vec::with_capacity(table.len());
    for object in &table.objects {
        xref_offsets.push(output.len());
        output.extend_from_slice(object.as_bytes());
    }

    let xref_start = output.len();
    writeln!(output, "xref")?;
    writeln!(output, "0 {}", table.len() + 1)?;

    // Object 0 is always free.
    writeln!(output, "0000000000 65535 f ")?;
    for offset in &xref_offsets {
        writeln!(output, "{:010} 00000 n ", offset)?;
    }

    write!(
        output,
        "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF",
        table.len() + 1,
        catalog_object_id,
        xref_start,
    )?;

    log::debug!(
        "assembled PDF: {} pages, {} objects, {} bytes",
        page_object_ids.len(),
        table.len(),
        output.len()
    );

    Ok(output)
}
