//! `generate` subcommand.
use anyhow::{Context, Result};
use log::info;
use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::generator::{self, Method, Summary};

/// Name of the JSON input generated for `count` pairs.
#[must_use]
pub fn json_file_name(count: usize) -> String {
    format!("data_{count}_flex.json")
}

/// Name of the answer file generated for `count` pairs.
#[must_use]
pub fn answer_file_name(count: usize) -> String {
    format!("data_{count}_answer.f64")
}

/// Generate `count` random pairs into the output directory if specified, else
/// the current directory. Writes the JSON input and its answer file.
///
/// # Errors
///
/// Returns a [`Result`] with an [`anyhow::Error`] if the output directory or
/// either file could not be created or written.
pub fn generate_input(
    count: usize,
    seed: u64,
    method: Method,
    output_dir: Option<PathBuf>,
) -> Result<Summary> {
    let output_dir: PathBuf = match output_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Opening current directory")?,
    };

    std::fs::create_dir_all(&output_dir)
        .context("create output directories")?;

    let json_path = output_dir.join(json_file_name(count));
    let answer_path = output_dir.join(answer_file_name(count));
    info!(
        "generating {count} pair(s), {method} method, seed {seed} -> {}",
        json_path.display()
    );

    let json_file = create(&json_path)?;
    let answer_file = create(&answer_path)?;
    let summary = generator::generate(
        count,
        seed,
        method,
        BufWriter::new(json_file),
        BufWriter::new(answer_file),
    )
    .with_context(|| format!("failed to generate {}", json_path.display()))?;

    println!("Generated: {}", json_path.display());
    println!("Generated: {}", answer_path.display());
    Ok(summary)
}

/// Create or truncate `path` for writing.
fn create(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to create {}", path.display()))
}
