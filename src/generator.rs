/*!
# Input Generator

Produces benchmark inputs: a JSON document of random coordinate pairs and the
matching answer file (see [`crate::answers`]). Output is fully determined by
the seed.

In uniform mode every coordinate is drawn from the whole globe. In cluster
mode the pairs come in runs of `1 + count / 64`, each run confined to a
randomly placed and sized box.
*/
use anyhow::{Context, Result, ensure};
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::io::Write;

use crate::answers::AnswerWriter;
use crate::distance::Pair;

/// How coordinates are spread over the globe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Every coordinate drawn from the whole globe
    Uniform,
    /// Pairs drawn from a sequence of small random regions
    Cluster,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform => f.write_str("Uniform"),
            Self::Cluster => f.write_str("Cluster"),
        }
    }
}

/// What a generation run produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Spread used for the coordinates
    pub method: Method,
    /// Seed the generator started from
    pub seed: u64,
    /// Number of pairs written
    pub count: usize,
    /// Average haversine distance over all pairs
    pub average: f64,
}

/// Region coordinates are drawn from.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Bounds {
    const GLOBE: Self = Self {
        x_min: -180.0,
        x_max: 180.0,
        y_min: -90.0,
        y_max: 90.0,
    };

    /// A random box inside the globe.
    fn cluster(rng: &mut ChaCha8Rng) -> Self {
        let x_center = between(rng, -180.0, 180.0);
        let y_center = between(rng, -90.0, 90.0);
        let x_radius = between(rng, 0.0, 180.0);
        let y_radius = between(rng, 0.0, 90.0);
        Self {
            x_min: (x_center - x_radius).max(Self::GLOBE.x_min),
            x_max: (x_center + x_radius).min(Self::GLOBE.x_max),
            y_min: (y_center - y_radius).max(Self::GLOBE.y_min),
            y_max: (y_center + y_radius).min(Self::GLOBE.y_max),
        }
    }

    fn pair(&self, rng: &mut ChaCha8Rng) -> Pair {
        Pair {
            x0: between(rng, self.x_min, self.x_max),
            y0: between(rng, self.y_min, self.y_max),
            x1: between(rng, self.x_min, self.x_max),
            y1: between(rng, self.y_min, self.y_max),
        }
    }
}

/// Uniform draw from `[min, max)`.
fn between(rng: &mut ChaCha8Rng, min: f64, max: f64) -> f64 {
    rng.random::<f64>().mul_add(max - min, min)
}

/// Write `count` random pairs as JSON to `json`, and their distances followed
/// by the average to `answers`.
///
/// # Errors
///
/// Returns an error if `count` is zero or either writer fails.
pub fn generate<J: Write, A: Write>(
    count: usize,
    seed: u64,
    method: Method,
    mut json: J,
    answers: A,
) -> Result<Summary> {
    ensure!(count > 0, "pair count must be greater than 0");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut answers = AnswerWriter::new(answers);
    let cluster_len = 1 + count / 64;
    let mut bounds = Bounds::GLOBE;
    let mut total = 0.0;

    json.write_all(b"{\"pairs\":[\n")
        .context("write JSON header")?;

    for i in 0..count {
        if method == Method::Cluster && i % cluster_len == 0 {
            bounds = Bounds::cluster(&mut rng);
            debug!("cluster {} bounds: {bounds:?}", i / cluster_len);
        }

        let pair = bounds.pair(&mut rng);
        let distance = pair.distance();
        total += distance;
        trace!("pair {i}: {pair:?} -> {distance}");

        let separator = if i + 1 < count { ",\n" } else { "\n" };
        write!(
            json,
            "    {{\"x0\":{:.9}, \"y0\":{:.9}, \"x1\":{:.9}, \"y1\":{:.9}}}{separator}",
            pair.x0, pair.y0, pair.x1, pair.y1
        )
        .context("write JSON pair")?;
        answers.write(distance).context("write answer")?;
    }

    json.write_all(b"]}").context("write JSON footer")?;
    json.flush().context("flush JSON output")?;

    #[allow(clippy::cast_precision_loss)]
    let average = total / count as f64;
    answers.write(average).context("write average")?;
    answers.finish().context("flush answer output")?;

    Ok(Summary {
        method,
        seed,
        count,
        average,
    })
}
