mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::{read_config, Config, DEFAULT_LOG_LEVEL};
use perc::{evaluate_probability, PercolationStats, DEFAULT_PROBABILITY_TRIALS};
use rand::{rngs::StdRng, SeedableRng};

use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// TOML file with default seed, log level and trial count
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the random generator, fresh entropy if absent
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long)]
    log_level: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimates the percolation threshold of an n-by-n grid
    Threshold { size: usize, trials: usize },

    /// Estimates the probability that a random n-by-n grid percolates
    Probability {
        size: usize,
        vacancy: f64,

        #[arg(short, long)]
        trials: Option<usize>,
    },
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => Config::default(),
    };

    stderrlog::new()
        .verbosity(args.log_level.or(config.log_level).unwrap_or(DEFAULT_LOG_LEVEL))
        .module(module_path!())
        .module("perc")
        .init()?;

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => {
            log::info!("seeding random generator with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut writer = BufWriter::new(io::stdout());

    match args.command {
        Command::Threshold { size, trials } => {
            let stats = PercolationStats::with_rng(size, trials, &mut rng)?;
            write_stats(&mut writer, &stats)?;
        }
        Command::Probability {
            size,
            vacancy,
            trials,
        } => {
            let trials = trials
                .or(config.trials)
                .unwrap_or(DEFAULT_PROBABILITY_TRIALS);
            let probability = evaluate_probability(size, vacancy, trials, &mut rng)?;
            writeln!(writer, "probability             = {probability}")?;
        }
    }

    writer.flush()?;

    Ok(())
}

fn write_stats(writer: &mut impl Write, stats: &PercolationStats) -> io::Result<()> {
    writeln!(writer, "mean                    = {}", stats.mean())?;
    writeln!(writer, "stddev                  = {}", stats.stddev())?;
    writeln!(
        writer,
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    )
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn arguments_are_consistent() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn parses_threshold_invocation() {
        let args = Arguments::try_parse_from(["perc-stats", "-s", "5", "threshold", "200", "100"])
            .unwrap();
        assert_eq!(args.seed, Some(5));
        assert!(matches!(
            args.command,
            Command::Threshold {
                size: 200,
                trials: 100
            }
        ));
    }

    #[test]
    fn rejects_malformed_invocation() {
        assert!(Arguments::try_parse_from(["perc-stats", "threshold", "200"]).is_err());
        assert!(Arguments::try_parse_from(["perc-stats", "threshold", "-1", "10"]).is_err());
        assert!(Arguments::try_parse_from(["perc-stats", "threshold", "ten", "10"]).is_err());
    }

    #[test]
    fn writes_single_site_report() {
        let stats = PercolationStats::new(1, 4).unwrap();

        let mut output = Vec::new();
        write_stats(&mut output, &stats).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "mean                    = 1\n\
             stddev                  = 0\n\
             95% confidence interval = [1, 1]\n"
        );
    }
}
