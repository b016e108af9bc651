//! # recipe-pdf
//!
//! Deterministic, hand-assembled PDF export for recipe view-models.
//!
//! No PDF-authoring library is involved: the crate builds the content
//! streams, object table, cross-reference table, and trailer by hand and
//! emits a minimal single-font, US Letter document. Identical input always
//! reproduces identical bytes, so output is safe to cache and to cover with
//! golden-file tests.
//!
//! The input is a fully resolved [`Recipe`] view-model: author joined,
//! relations loaded and ordered, nutrition normalized to nullable numbers.
//! Fetching, validation, and access control stay with the caller, as do the
//! response headers when the buffer is served over HTTP.
//!
//! ## Quick Start
//!
//! ```
//! use recipe_pdf::{build_recipe_pdf, Author, Difficulty, Recipe};
//!
//! # fn main() -> recipe_pdf::Result<()> {
//! let recipe = Recipe {
//!     title: "Bolo de Cenoura".to_string(),
//!     description: None,
//!     author: Author { name: Some("Maria".to_string()), email: "maria@example.com".to_string() },
//!     difficulty: Difficulty::Easy,
//!     prep_time: 50,
//!     servings: 12,
//!     calories: None,
//!     protein_grams: None,
//!     carb_grams: None,
//!     fat_grams: None,
//!     categories: vec![],
//!     ingredients: vec![],
//!     steps: vec![],
//!     source: None,
//! };
//!
//! let pdf = build_recipe_pdf(&recipe)?;
//! assert_eq!(pdf.filename, "bolo-de-cenoura.pdf");
//! assert!(pdf.bytes.starts_with(b"%PDF-1.4"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Recipe view-model
pub mod recipe;

// Text preparation
pub mod text;

// PDF emission
pub mod writer;

// Recipe composition
pub mod compose;

pub use compose::{build_recipe_pdf, RecipePdf};
pub use error::{Error, Result};
pub use recipe::{Author, Category, Difficulty, Ingredient, Recipe, Step};
