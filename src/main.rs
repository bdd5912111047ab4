use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use r2_indicator::io::read_front;
use r2_indicator::{Error, R2Indicator, Result};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: r2 <approximationFrontFile> <referenceFrontFile> <numberOfObjectives> [<weightVectorFile>]";

/// Compute the R2 quality indicator of an approximation front.
#[derive(Debug, Parser)]
#[command(name = "r2", version, about)]
struct Cli {
    /// Front to score, one point per line.
    approximation: PathBuf,

    /// Reference front used for normalization.
    reference: PathBuf,

    /// Number of objectives per point.
    n_objectives: usize,

    /// Weight vectors, one per line; required unless there are 2 objectives.
    weights: Option<PathBuf>,

    /// Number of evenly spaced 2-objective weight vectors.
    #[arg(long, conflicts_with = "weights")]
    vectors: Option<usize>,

    /// Point index whose leave-one-out value is printed (repeatable).
    #[arg(long = "index", default_values_t = [1usize, 15, 25, 75])]
    indices: Vec<usize>,

    /// Also print the K indices with the smallest contributions.
    #[arg(long, value_name = "K")]
    n_best: Option<usize>,

    /// Also print the best and worst point indices.
    #[arg(long)]
    rank: bool,

    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match parse_args(std::env::args_os()) {
        Ok(Some(cli)) => cli,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Parses the command line. `Ok(None)` means help or version was printed.
fn parse_args<I, T>(args: I) -> Result<Option<Cli>>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            Ok(None)
        }
        Err(err) => Err(Error::Argument(err.to_string().trim_end().to_string())),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_indicator(cli: &Cli) -> Result<R2Indicator> {
    match (&cli.weights, cli.vectors) {
        (Some(path), _) => R2Indicator::from_weights_file(cli.n_objectives, path),
        (None, Some(n)) if cli.n_objectives == 2 => R2Indicator::with_vectors(n),
        (None, None) if cli.n_objectives == 2 => Ok(R2Indicator::new()),
        (None, _) => Err(Error::Argument(format!(
            "a weight vector file is required for {} objectives\n{USAGE}",
            cli.n_objectives
        ))),
    }
}

/// Runs the evaluation and returns the lines to print.
fn run(cli: &Cli) -> Result<Vec<String>> {
    let indicator = build_indicator(cli)?;
    let approximation = read_front(&cli.approximation)?;
    let reference = read_front(&cli.reference)?;
    debug!(
        approximation = approximation.len(),
        reference = reference.len(),
        vectors = indicator.weights().len(),
        "evaluating fronts"
    );

    let evaluation = indicator.evaluate(&approximation, &reference)?;
    let mut lines = vec![evaluation.r2()?.to_string()];

    for &index in &cli.indices {
        if index >= evaluation.len() {
            warn!(
                index,
                points = evaluation.len(),
                "skipping contribution: index past end of front"
            );
            continue;
        }
        lines.push(evaluation.contribution_without(index)?.to_string());
    }

    if cli.rank {
        lines.push(format!("best {}", evaluation.best()?));
        lines.push(format!("worst {}", evaluation.worst()?));
    }
    if let Some(k) = cli.n_best {
        let indices: Vec<String> = evaluation
            .n_best(k)?
            .iter()
            .map(ToString::to_string)
            .collect();
        lines.push(format!("n-best {}", indices.join(" ")));
    }

    Ok(lines)
}
