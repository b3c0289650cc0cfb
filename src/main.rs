/*!
Main binary for the haversine benchmark toolkit.
*/

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::generate;
use clap_verbosity_flag::Verbosity;
use std::io::stdout;
use std::path::PathBuf;

use haversine::commands;
use haversine::generator::Method;

/// Generate haversine benchmark inputs and compute their average distance
/// using a hand-rolled JSON parser.
#[derive(Parser)]
#[command(name = "haversine", version, about, arg_required_else_help = true, long_about = None, disable_help_subcommand = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
    #[command(flatten)]
    verbose: Verbosity,
}

/// Available subcommands for `haversine`
#[derive(Subcommand)]
enum Commands {
    /// Generate a random JSON input of coordinate pairs and its answer file.
    Generate {
        /// Number of pairs to generate
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        size: u64,
        /// Random seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Draw pairs from random clusters instead of the whole globe
        #[arg(long, action = ArgAction::SetTrue)]
        cluster: bool,
        /// The output directory to write the files to. Defaults to the
        /// current directory.
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Compute the average haversine distance of a JSON input.
    Calc {
        /// JSON input of coordinate pairs
        #[arg(long, value_name = "FILE")]
        json: PathBuf,
        /// Optional answer file to verify every distance against
        #[arg(long, value_name = "FILE")]
        bin: Option<PathBuf>,
    },
    /// Parse a JSON file and print the resulting tree.
    Dump {
        #[arg(value_name = "FILE")]
        input: PathBuf,
        /// Do not pretty-print the tree, instead use compact
        #[arg(long, action = ArgAction::SetTrue)]
        compact: bool,
        /// Display depth of the input document
        #[arg(long, action = ArgAction::SetTrue)]
        depth: bool,
    },
    /// Generate shell completions for the given shell to stdout.
    Completions { shell: clap_complete::Shell },
}

/// Entry point for main binary.
///
/// Any error is reported on stderr and ends the program with a non-zero exit
/// code.
fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match args.command {
        Commands::Generate {
            size,
            seed,
            cluster,
            output_dir,
        } => {
            let count = usize::try_from(size).context("pair count too large")?;
            let method = if cluster {
                Method::Cluster
            } else {
                Method::Uniform
            };
            let summary = commands::generate::generate_input(
                count, seed, method, output_dir,
            )?;
            println!("Method: {}", summary.method);
            println!("Random seed: {}", summary.seed);
            println!("Pair count: {}", summary.count);
            println!("Expected sum: {:.6}", summary.average);
        }
        Commands::Calc { json, bin } => {
            let report = commands::calc::calculate(&json, bin.as_deref())?;
            println!("{report}");
        }
        Commands::Dump {
            input,
            compact,
            depth,
        } => commands::dump::dump(&input, compact, depth)?,
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            generate(shell, &mut cmd, "haversine", &mut stdout().lock());
        }
    }

    Ok(())
}
