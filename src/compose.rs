//! Recipe-to-PDF composition.
//!
//! Walks a recipe's fields in a fixed order and drives the content-stream
//! builder, then hands the finished pages to the document assembler. Section
//! labels are the product's accent-free Portuguese strings; they are part of
//! the observable output contract, as is the emission order.

use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::recipe::{Ingredient, Recipe};
use crate::writer::{
    build_pdf_document, ContentStreamBuilder, TextOptions, DEFAULT_FONT_SIZE,
    MAX_LINE_CHARACTERS, SUBTITLE_FONT_SIZE, TITLE_FONT_SIZE,
};

/// Fallback filename stem when a title sanitizes to nothing.
const FALLBACK_FILE_STEM: &str = "receita";

/// Indent for ingredient bullets and step entries, in points.
const LIST_INDENT: i32 = 10;
/// Line limit for indented list entries.
const LIST_MAX_LINE: usize = MAX_LINE_CHARACTERS - 6;

/// A generated PDF: the document bytes and a filesystem-safe filename.
///
/// The caller owns persistence and transport (response headers, access
/// control); this type only carries the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipePdf {
    /// Complete PDF file bytes.
    pub bytes: Vec<u8>,
    /// Sanitized filename ending in `.pdf`.
    pub filename: String,
}

impl RecipePdf {
    /// Write the document bytes to `path`.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

/// Generate the PDF document for a fully resolved recipe.
///
/// Deterministic: identical input produces byte-identical output.
pub fn build_recipe_pdf(recipe: &Recipe) -> Result<RecipePdf> {
    let mut builder = ContentStreamBuilder::new();
    let body = TextOptions::default();
    let list = TextOptions::default()
        .with_indent(LIST_INDENT)
        .with_max_length(LIST_MAX_LINE);

    builder.add_heading(&recipe.title, TITLE_FONT_SIZE);
    builder.add_wrapped_text(
        &format!("Autor: {}", recipe.author.display_name()),
        SUBTITLE_FONT_SIZE,
        body,
    );

    if let Some(description) = non_empty(recipe.description.as_deref()) {
        builder.add_spacer(10);
        builder.add_wrapped_text(description, DEFAULT_FONT_SIZE, body);
    }

    builder.add_spacer(12);
    builder.add_heading("Informacoes gerais", SUBTITLE_FONT_SIZE);
    builder.add_wrapped_text(
        &format!("Dificuldade: {}", recipe.difficulty),
        DEFAULT_FONT_SIZE,
        body,
    );
    builder.add_wrapped_text(
        &format!("Tempo de preparo: {} min", recipe.prep_time),
        DEFAULT_FONT_SIZE,
        body,
    );
    builder.add_wrapped_text(
        &format!("Rendimento: {} porcoes", recipe.servings),
        DEFAULT_FONT_SIZE,
        body,
    );

    if let Some(calories) = recipe.calories {
        builder.add_wrapped_text(
            &format!("Calorias: {} kcal", format_number(calories)),
            DEFAULT_FONT_SIZE,
            body,
        );
    }

    let mut macros = Vec::new();
    if let Some(protein) = recipe.protein_grams {
        macros.push(format!("Proteinas: {} g", format_number(protein)));
    }
    if let Some(carbs) = recipe.carb_grams {
        macros.push(format!("Carboidratos: {} g", format_number(carbs)));
    }
    if let Some(fat) = recipe.fat_grams {
        macros.push(format!("Gorduras: {} g", format_number(fat)));
    }
    if !macros.is_empty() {
        builder.add_wrapped_text(&macros.join(" | "), DEFAULT_FONT_SIZE, body);
    }

    if !recipe.categories.is_empty() {
        let names: Vec<&str> = recipe.categories.iter().map(|c| c.name.as_str()).collect();
        builder.add_wrapped_text(
            &format!("Categorias: {}", names.join(", ")),
            DEFAULT_FONT_SIZE,
            body,
        );
    }

    builder.add_spacer(12);
    builder.add_heading("Ingredientes", SUBTITLE_FONT_SIZE);
    if recipe.ingredients.is_empty() {
        builder.add_wrapped_text("Nenhum ingrediente cadastrado.", DEFAULT_FONT_SIZE, body);
    } else {
        for ingredient in &recipe.ingredients {
            builder.add_wrapped_text(
                &format!("- {}", format_ingredient(ingredient)),
                DEFAULT_FONT_SIZE,
                list,
            );
        }
    }

    builder.add_spacer(12);
    builder.add_heading("Modo de preparo", SUBTITLE_FONT_SIZE);
    if recipe.steps.is_empty() {
        builder.add_wrapped_text("Nenhum passo cadastrado.", DEFAULT_FONT_SIZE, body);
    } else {
        let mut steps: Vec<_> = recipe.steps.iter().collect();
        steps.sort_by_key(|step| step.order);
        for step in steps {
            builder.add_wrapped_text(
                &format!("{}. {}", step.order + 1, step.description),
                DEFAULT_FONT_SIZE,
                list,
            );
            if let Some(duration_sec) = step.duration_sec.filter(|sec| *sec > 0) {
                let minutes = (f64::from(duration_sec) / 60.0).round() as u32;
                builder.add_wrapped_text(
                    &format!("Duracao: {} min", minutes),
                    10,
                    TextOptions::default().with_indent(LIST_INDENT),
                );
            }
            builder.add_spacer(6);
        }
    }

    if let Some(source) = non_empty(recipe.source.as_deref()) {
        builder.add_spacer(12);
        builder.add_heading("Fonte", SUBTITLE_FONT_SIZE);
        builder.add_wrapped_text(source, DEFAULT_FONT_SIZE, body);
    }

    let filename = format!("{}.pdf", sanitize_file_name(&recipe.title));
    let pages = builder.finalize();
    let bytes = build_pdf_document(&pages)?;

    log::debug!(
        "generated {}: {} pages, {} bytes",
        filename,
        pages.len(),
        bytes.len()
    );

    Ok(RecipePdf { bytes, filename })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Format an ingredient bullet: `amount unit - name`, `unit - name`, or the
/// bare name, depending on which fields are present. An empty unit counts as
/// absent.
fn format_ingredient(ingredient: &Ingredient) -> String {
    let unit = non_empty(ingredient.unit.as_deref());

    if let Some(amount) = ingredient.amount {
        let amount = format_amount(amount);
        return match unit {
            Some(unit) => format!("{} {} - {}", amount, unit, ingredient.name),
            None => format!("{} {}", amount, ingredient.name),
        };
    }

    match unit {
        Some(unit) => format!("{} - {}", unit, ingredient.name),
        None => ingredient.name.clone(),
    }
}

/// Integral amounts print without decimals, everything else to two places.
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.is_finite() {
        format!("{}", amount as i64)
    } else {
        format!("{:.2}", amount)
    }
}

/// Nutrition values print without a trailing `.0` when integral.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Derive the filename stem: strip accents via NFD, map non-alphanumeric
/// runs to single hyphens, trim, lowercase, fall back to a generic stem.
fn sanitize_file_name(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for ch in title.nfd() {
        // Combining diacritical marks left over from decomposition.
        if ('\u{0300}'..='\u{036f}').contains(&ch) {
            continue;
        }
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        FALLBACK_FILE_STEM.to_string()
    } else {
        slug.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, amount: Option<f64>, unit: Option<&str>) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            amount,
            unit: unit.map(str::to_string),
        }
    }

    #[test]
    fn test_format_ingredient_all_fields() {
        assert_eq!(
            format_ingredient(&ingredient("Farinha de trigo", Some(500.0), Some("g"))),
            "500 g - Farinha de trigo"
        );
    }

    #[test]
    fn test_format_ingredient_fractional_amount() {
        assert_eq!(
            format_ingredient(&ingredient("Fermento", Some(2.5), Some("colheres"))),
            "2.50 colheres - Fermento"
        );
    }

    #[test]
    fn test_format_ingredient_amount_without_unit() {
        assert_eq!(
            format_ingredient(&ingredient("Ovos", Some(3.0), None)),
            "3 Ovos"
        );
        assert_eq!(
            format_ingredient(&ingredient("Ovos", Some(3.0), Some(""))),
            "3 Ovos"
        );
    }

    #[test]
    fn test_format_ingredient_unit_only() {
        assert_eq!(
            format_ingredient(&ingredient("Sal", None, Some("pitada"))),
            "pitada - Sal"
        );
    }

    #[test]
    fn test_format_ingredient_bare_name() {
        assert_eq!(format_ingredient(&ingredient("Acucar", None, None)), "Acucar");
    }

    #[test]
    fn test_sanitize_file_name_strips_accents() {
        assert_eq!(
            sanitize_file_name("Pão de Açúcar Tradicional"),
            "pao-de-acucar-tradicional"
        );
    }

    #[test]
    fn test_sanitize_file_name_collapses_and_trims_hyphens() {
        assert_eq!(sanitize_file_name("  Bolo!!  de -- Fuba  "), "bolo-de-fuba");
    }

    #[test]
    fn test_sanitize_file_name_fallback() {
        assert_eq!(sanitize_file_name(""), "receita");
        assert_eq!(sanitize_file_name("!!!"), "receita");
        assert_eq!(sanitize_file_name("日本料理"), "receita");
    }

    #[test]
    fn test_format_number_trims_integral() {
        assert_eq!(format_number(300.0), "300");
        assert_eq!(format_number(12.5), "12.5");
    }
}
