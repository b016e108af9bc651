//! Export a recipe JSON file as a PDF document.
//!
//! Usage: `export_recipe_pdf <recipe.json> [output-dir]`
//!
//! Reads a recipe view-model in the backend's JSON shape, generates the PDF,
//! and writes it under the derived filename in the output directory (default:
//! alongside the input file).

use recipe_pdf::{build_recipe_pdf, Recipe};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <recipe.json> [output-dir]", args[0]);
        return ExitCode::FAILURE;
    }

    let input = Path::new(&args[1]);
    let output_dir: PathBuf = match args.get(2) {
        Some(dir) => PathBuf::from(dir),
        None => input.parent().unwrap_or_else(|| Path::new(".")).to_path_buf(),
    };

    match run(input, &output_dir) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

fn run(input: &Path, output_dir: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(input)?;
    let recipe: Recipe = serde_json::from_str(&json)?;

    let pdf = build_recipe_pdf(&recipe)?;
    let output = output_dir.join(&pdf.filename);
    pdf.save(&output)?;

    Ok(output)
}
