use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use anyhow::{Result, Context};

use strandalign_core::{RandomSequenceGenerator, Strategy};

mod config;
mod commands;
mod error;
mod interactive;

use config::Config;
use error::CliError;

#[derive(Parser)]
#[command(name = "strandalign")]
#[command(about = "strandalign - optimal global alignment of DNA strands")]
#[command(version)]
#[command(long_about = "
strandalign computes the optimal global alignment of two sequences
(match +1, mismatch -1, gap -2 by default) and prints one alignment
that achieves it.

Examples:
  strandalign align GATTACA GCATGCT
  strandalign align GATTACA GCATGCT --strategy wavefront --json
  strandalign random --pairs 10 --min-len 50 --max-len 80 --seed 7
  strandalign interactive
  strandalign config --output strandalign.toml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for random strand generation (reproducible output)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Number of threads to use (0 = all cores)
    #[arg(short, long, global = true)]
    pub threads: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align two sequences given on the command line
    Align {
        /// First sequence
        seq1: String,

        /// Second sequence
        seq2: String,

        /// Order in which subproblems are solved
        #[arg(long)]
        strategy: Option<StrategyArg>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Refuse alignments needing more memo cells than this
        #[arg(long)]
        max_cells: Option<usize>,
    },

    /// Generate and align random DNA strand pairs
    Random {
        /// Shortest strand length
        #[arg(long)]
        min_len: Option<usize>,

        /// Longest strand length
        #[arg(long)]
        max_len: Option<usize>,

        /// Number of pairs to align
        #[arg(long, default_value = "1")]
        pairs: usize,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Repeatedly ask whether to align a new random pair
    Interactive,

    /// Print the default configuration, or write it to a file
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StrategyArg {
    BottomUp,
    TopDown,
    Wavefront,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::BottomUp => Strategy::BottomUp,
            StrategyArg::TopDown => Strategy::TopDown,
            StrategyArg::Wavefront => Strategy::Wavefront,
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) -> Result<()> {
    if quiet {
        std::env::set_var("RUST_LOG", "error");
    } else {
        let level = match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        std::env::set_var("RUST_LOG", level);
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .init();

    Ok(())
}

fn generator(seed: Option<u64>) -> RandomSequenceGenerator {
    match seed {
        Some(seed) => {
            log::debug!("Using random seed {}", seed);
            RandomSequenceGenerator::from_seed(seed)
        }
        None => RandomSequenceGenerator::from_entropy(),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    if let Some(threads) = cli.threads {
        let threads = if threads == 0 { num_cpus::get() } else { threads };
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to set thread count")?;
        log::debug!("Using {} threads", threads);
    }

    match cli.command {
        Commands::Align {
            seq1,
            seq2,
            strategy,
            json,
            max_cells,
        } => {
            commands::align::execute(&config, seq1, seq2, strategy, json, max_cells)?;
        }

        Commands::Random {
            min_len,
            max_len,
            pairs,
            json,
        } => {
            commands::random::execute(
                &config,
                generator(cli.seed),
                min_len,
                max_len,
                pairs,
                json,
            )?;
        }

        Commands::Interactive => {
            commands::interactive::execute(&config, generator(cli.seed))?;
        }

        Commands::Config { output } => {
            commands::config::execute(output)?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet)?;

    if let Err(err) = run(cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            error::print_error_and_exit(cli_err);
        }
        return Err(err);
    }

    Ok(())
}
