//! `calc` subcommand.
use anyhow::{Context, Result, ensure};
use log::{debug, info};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::answers::AnswerReader;
use crate::commands::parse_file;
use crate::pairs::extract_pairs;

/// Outcome and timings of one calculation run.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    /// Number of pairs processed
    pub count: usize,
    /// Average haversine distance
    pub average: f64,
    /// Time spent parsing and extracting the input
    pub input: Duration,
    /// Time spent computing distances
    pub math: Duration,
}

impl Report {
    #[must_use]
    pub fn total(&self) -> Duration {
        self.input + self.math
    }

    /// Pairs processed per second over the whole run.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn throughput(&self) -> f64 {
        self.count as f64 / self.total().as_secs_f64()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Result: {:.6}", self.average)?;
        writeln!(f, "Input = {:.6} seconds", self.input.as_secs_f64())?;
        writeln!(f, "Math = {:.6} seconds", self.math.as_secs_f64())?;
        writeln!(f, "Total = {:.6} seconds", self.total().as_secs_f64())?;
        write!(f, "Throughput = {:.6} haversines/second", self.throughput())
    }
}

/// Compute the average haversine distance of the pairs in `json_path`. When
/// `answer_path` is given, every distance and then the average are checked
/// against it.
///
/// # Errors
///
/// Returns an error if either file cannot be read, the input does not parse
/// or is not a document of pairs, holds no pairs at all, or a value does not
/// match its recorded answer.
pub fn calculate(json_path: &Path, answer_path: Option<&Path>) -> Result<Report> {
    let mut answers = answer_path
        .map(|path| {
            File::open(path)
                .map(|file| AnswerReader::new(BufReader::new(file)))
                .with_context(|| format!("Failed to read file {}", path.display()))
        })
        .transpose()?;

    let start = Instant::now();
    let root = parse_file(json_path)?;
    let pairs = extract_pairs(&root).with_context(|| {
        format!("{} is not a document of pairs", json_path.display())
    })?;
    drop(root);
    let input = start.elapsed();
    ensure!(!pairs.is_empty(), "no pairs in {}", json_path.display());
    info!("read {} pair(s) in {input:?}", pairs.len());

    let start = Instant::now();
    let mut sum = 0.0;
    for pair in &pairs {
        let distance = pair.distance();
        if let Some(answers) = answers.as_mut() {
            answers.verify(distance).context("distance check failed")?;
        }
        sum += distance;
    }
    #[allow(clippy::cast_precision_loss)]
    let average = sum / pairs.len() as f64;
    if let Some(answers) = answers.as_mut() {
        answers.verify(average).context("average check failed")?;
        debug!("all {} answer(s) verified", pairs.len() + 1);
    }
    let math = start.elapsed();

    Ok(Report {
        count: pairs.len(),
        average,
        input,
        math,
    })
}
