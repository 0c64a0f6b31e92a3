#[macro_use]
mod logging;
mod output;

use anyhow::{bail, Context, Result};
use binairo_core::{Enumerator, EnumeratorConfig, Generator, Strategy};
use clap::{Parser, ValueEnum};
use output::Format;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

/// Enumerate solutions of Binairo (Takuzu) grids
#[derive(Debug, Parser)]
#[command(name = "binairo", version, about)]
struct Args {
    /// Grid side length (positive, even)
    #[arg(short, long, default_value_t = 6)]
    dimension: usize,

    /// Search strategy
    #[arg(short, long, value_enum, default_value_t = SearchStrategy::Backtracking)]
    strategy: SearchStrategy,

    /// Stop after this many solutions
    #[arg(short, long)]
    limit: Option<usize>,

    /// Print only the number of solutions
    #[arg(short, long)]
    count: bool,

    /// Count partitions in parallel (with --count)
    #[arg(long, requires = "count")]
    parallel: bool,

    /// Print one random solution instead of enumerating
    #[arg(short, long, conflicts_with = "count")]
    random: bool,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SearchStrategy {
    Backtracking,
    BruteForce,
}

impl From<SearchStrategy> for Strategy {
    fn from(s: SearchStrategy) -> Self {
        match s {
            SearchStrategy::Backtracking => Strategy::Backtracking,
            SearchStrategy::BruteForce => Strategy::BruteForce,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.verbose {
        logging::enable_verbose_logging();
    }

    if args.random {
        return run_random(&args);
    }

    let started = Instant::now();
    let enumerator = build_enumerator(&args)?;
    vlog!(
        "dimension {}: {} candidate rows, {} search",
        enumerator.dimension(),
        enumerator.catalog().len(),
        enumerator.config().strategy
    );

    let found = if args.count {
        let count = if args.parallel && args.limit.is_none() {
            enumerator.par_count()
        } else {
            enumerator.solutions().count()
        };
        println!("{}", count);
        count
    } else {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let mut count = 0;
        for grid in enumerator.solutions() {
            output::write_grid(&mut out, &grid, args.format)?;
            count += 1;
        }
        out.flush().context("writing solutions")?;
        count
    };

    vlog!("{} solutions in {:.2?}", found, started.elapsed());
    Ok(())
}

/// Validate the dimension first, then refuse brute force where it cannot finish
fn build_enumerator(args: &Args) -> Result<Enumerator> {
    let mut config = EnumeratorConfig::new(args.dimension).with_strategy(args.strategy.into());
    config.limit = args.limit;
    let enumerator = Enumerator::new(config)
        .with_context(|| format!("cannot enumerate dimension {}", args.dimension))?;
    if enumerator.config().strategy == Strategy::BruteForce && args.dimension > 6 {
        bail!(
            "brute force search over dimension {} will not finish; use backtracking",
            args.dimension
        );
    }
    Ok(enumerator)
}

fn run_random(args: &Args) -> Result<()> {
    let mut generator = match args.seed {
        Some(seed) => Generator::with_seed(args.dimension, seed),
        None => Generator::new(args.dimension),
    }
    .with_context(|| format!("cannot generate dimension {}", args.dimension))?;

    let started = Instant::now();
    let Some(grid) = generator.generate() else {
        bail!("no solution exists for dimension {}", args.dimension);
    };
    vlog!("generated in {:.2?}", started.elapsed());

    let mut out = io::stdout().lock();
    output::write_grid(&mut out, &grid, args.format)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use binairo_core::BinairoError;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["binairo"]);
        assert_eq!(args.dimension, 6);
        assert_eq!(args.strategy, SearchStrategy::Backtracking);
        assert_eq!(args.format, Format::Text);
        assert!(!args.count);
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from([
            "binairo",
            "--dimension",
            "4",
            "--strategy",
            "brute-force",
            "--count",
            "--parallel",
        ]);
        assert_eq!(args.dimension, 4);
        assert_eq!(Strategy::from(args.strategy), Strategy::BruteForce);
        assert!(args.count && args.parallel);
    }

    #[test]
    fn test_conflicting_flags() {
        assert!(Args::try_parse_from(["binairo", "--random", "--count"]).is_err());
        assert!(Args::try_parse_from(["binairo", "--seed", "3"]).is_err());
        assert!(Args::try_parse_from(["binairo", "--dimension", "-2"]).is_err());
    }

    #[test]
    fn test_odd_dimension_reported_before_brute_force_limit() {
        let args = Args::parse_from(["binairo", "-d", "7", "-s", "brute-force"]);
        let err = build_enumerator(&args).unwrap_err();
        assert_eq!(
            err.downcast_ref::<BinairoError>(),
            Some(&BinairoError::InvalidDimension { dimension: 7 })
        );

        let args = Args::parse_from(["binairo", "-d", "8", "-s", "brute-force"]);
        let err = build_enumerator(&args).unwrap_err();
        assert!(err.to_string().contains("will not finish"));

        let args = Args::parse_from(["binairo", "-d", "6", "-s", "brute-force"]);
        assert!(build_enumerator(&args).is_ok());
    }
}
