//! Integration tests for PDF structural validity.
//!
//! These scan the assembled buffer the way a strict reader would: header
//! first, one trailer, and every cross-reference offset landing exactly on
//! its `N 0 obj` token.

use recipe_pdf::writer::{build_pdf_document, ContentStreamBuilder, TextOptions};
use recipe_pdf::{build_recipe_pdf, Author, Difficulty, Recipe, Step};

fn long_recipe() -> Recipe {
    Recipe {
        title: "Feijoada Completa".to_string(),
        description: Some("Uma receita longa o bastante para varias paginas.".to_string()),
        author: Author {
            name: None,
            email: "cozinha@example.com".to_string(),
        },
        difficulty: Difficulty::Hard,
        prep_time: 180,
        servings: 10,
        calories: Some(650.0),
        protein_grams: Some(35.0),
        carb_grams: Some(40.0),
        fat_grams: Some(30.0),
        categories: vec![],
        ingredients: vec![],
        steps: (0..120)
            .map(|i| Step {
                order: i,
                description: format!("Passo numero {} com uma descricao razoavelmente longa para ocupar espaco na pagina.", i + 1),
                duration_sec: Some(90),
            })
            .collect(),
        source: None,
    }
}

fn assert_structurally_valid(bytes: &[u8]) {
    let content = String::from_utf8_lossy(bytes).to_string();

    assert!(content.starts_with("%PDF-1.4\n"));
    assert!(content.ends_with("%%EOF"));
    assert_eq!(content.matches("trailer").count(), 1);
    // "startxref" would match a bare "xref" scan, so anchor on the line start.
    assert_eq!(content.matches("\nxref\n").count(), 1, "exactly one xref table");
    assert_eq!(content.matches("/Type /Catalog").count(), 1);
    assert_eq!(content.matches("/Type /Pages").count(), 1);

    // Every xref entry points at its object's first byte.
    let xref_at = content.find("xref\n").unwrap();
    let entries: Vec<&str> = content[xref_at..]
        .lines()
        .skip(3)
        .take_while(|line| line.ends_with("n "))
        .collect();
    assert!(!entries.is_empty());

    for (index, entry) in entries.iter().enumerate() {
        let fields: Vec<&str> = entry.split_whitespace().collect();
        assert_eq!(fields[0].len(), 10, "offsets are 10-digit zero-padded");
        assert_eq!(fields[1], "00000");

        let offset: usize = fields[0].parse().unwrap();
        assert!(
            content[offset..].starts_with(&format!("{} 0 obj", index + 1)),
            "xref entry for object {} does not land on its token",
            index + 1
        );
    }

    // Trailer /Size includes the free-list head.
    let size_at = content.find("/Size ").unwrap() + "/Size ".len();
    let size: usize = content[size_at..]
        .split_whitespace()
        .next()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(size, entries.len() + 1);

    // startxref points at the xref table.
    let startxref_at = content.find("startxref\n").unwrap();
    let recorded: usize = content[startxref_at + "startxref\n".len()..]
        .lines()
        .next()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(recorded, xref_at);
}

#[test]
fn test_single_page_document_is_valid() {
    let mut builder = ContentStreamBuilder::new();
    builder.add_heading("Titulo", 20);
    builder.add_wrapped_text("corpo do documento", 12, TextOptions::default());
    let bytes = build_pdf_document(&builder.finalize()).unwrap();
    assert_structurally_valid(&bytes);
}

#[test]
fn test_empty_input_document_is_valid() {
    let bytes = build_pdf_document(&[]).unwrap();
    assert_structurally_valid(&bytes);
    assert!(String::from_utf8_lossy(&bytes).contains("/Count 1"));
}

#[test]
fn test_multi_page_recipe_is_valid() {
    let pdf = build_recipe_pdf(&long_recipe()).unwrap();
    assert_structurally_valid(&pdf.bytes);

    let content = String::from_utf8_lossy(&pdf.bytes).to_string();
    let count_at = content.find("/Count ").unwrap() + "/Count ".len();
    let pages: usize = content[count_at..]
        .split_whitespace()
        .next()
        .unwrap()
        .parse()
        .unwrap();
    assert!(pages > 1, "120 steps must overflow a single page");

    // Object table: font + 2 per page + pages tree + catalog.
    assert_eq!(content.matches(" 0 obj").count(), pages * 2 + 3);
}

#[test]
fn test_content_stream_lengths_match() {
    let pdf = build_recipe_pdf(&long_recipe()).unwrap();
    let content = String::from_utf8_lossy(&pdf.bytes).to_string();

    let mut search_from = 0;
    while let Some(at) = content[search_from..].find("/Length ") {
        let at = search_from + at + "/Length ".len();
        let length: usize = content[at..].split_whitespace().next().unwrap().parse().unwrap();

        let stream_at = content[at..].find("stream\n").unwrap() + at + "stream\n".len();
        let end_at = content[stream_at..].find("\nendstream").unwrap();
        assert_eq!(end_at, length, "declared /Length matches stream bytes");

        search_from = stream_at;
    }
}

#[test]
fn test_document_assembly_is_deterministic() {
    let pages = vec![
        "BT /F1 12 Tf 1 0 0 1 50 742 Tm <48> Tj ET\n".to_string(),
        String::new(),
    ];
    assert_eq!(
        build_pdf_document(&pages).unwrap(),
        build_pdf_document(&pages).unwrap()
    );
}
