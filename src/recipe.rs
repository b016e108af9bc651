//! Recipe view-model consumed by the PDF generator.
//!
//! These types mirror the fully resolved recipe the backend hands over:
//! author already joined, categories/ingredients/steps already loaded and
//! ordered, nutrition fields already normalized to a number or absent. The
//! generator treats the model as read-only and performs no validation beyond
//! defensive handling of absent fields.

use serde::{Deserialize, Serialize};

/// Recipe difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    /// Easy recipe
    Easy,
    /// Medium difficulty
    Medium,
    /// Hard recipe
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        };
        f.write_str(s)
    }
}

/// Recipe author, already joined from the user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name; may be absent, in which case the email stands in
    pub name: Option<String>,
    /// Account email
    pub email: String,
}

impl Author {
    /// The label printed on the author line: name when present and non-empty,
    /// otherwise the email.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }
}

/// A category the recipe belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier
    pub id: String,
    /// Category name
    pub name: String,
}

/// One ingredient entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name
    pub name: String,
    /// Quantity, when specified
    #[serde(default)]
    pub amount: Option<f64>,
    /// Measurement unit, when specified
    #[serde(default)]
    pub unit: Option<String>,
}

/// One preparation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Zero-based position; numbering in the document is `order + 1`
    pub order: u32,
    /// Step description
    pub description: String,
    /// Step duration in seconds, when specified
    #[serde(default)]
    pub duration_sec: Option<u32>,
}

/// Fully resolved recipe view-model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Recipe title
    pub title: String,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Recipe author
    pub author: Author,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Total preparation time in minutes
    pub prep_time: u32,
    /// Number of servings
    pub servings: u32,
    /// Calories per serving, when known
    #[serde(default)]
    pub calories: Option<f64>,
    /// Protein grams, when known
    #[serde(default)]
    pub protein_grams: Option<f64>,
    /// Carbohydrate grams, when known
    #[serde(default)]
    pub carb_grams: Option<f64>,
    /// Fat grams, when known
    #[serde(default)]
    pub fat_grams: Option<f64>,
    /// Categories, possibly empty
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Ingredients in display order
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Preparation steps; sorted by `order` before emission
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Source attribution, when present
    #[serde(default)]
    pub source: Option<String>,
}
