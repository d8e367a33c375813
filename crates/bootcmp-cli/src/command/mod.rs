use std::path::PathBuf;

use anyhow::Context as _;
use bootcmp_engine::{
    BootstrapConfig, Bootstrapper, ResampleSeed,
    bootstrap::{DEFAULT_CONFIDENCE, DEFAULT_NUM_SAMPLES},
};
use clap::{ArgAction, Parser, Subcommand};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

use self::{bootstrap::BootstrapArg, compare::CompareArg};

mod bootstrap;
mod compare;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compare the mean and median of two samples
    Compare(#[clap(flatten)] CompareArg),
    /// Confidence intervals for the mean and median of one sample
    Bootstrap(#[clap(flatten)] BootstrapArg),
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Options shared by every resampling command.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ResamplingArg {
    /// Number of bootstrap resamples per sample
    #[arg(long, short = 'n', default_value_t = DEFAULT_NUM_SAMPLES)]
    num_samples: usize,
    /// Confidence level in percent
    #[arg(long, short, default_value_t = DEFAULT_CONFIDENCE)]
    confidence: f64,
    /// Seed for the resampling generator (32 hex digits); random if omitted
    #[arg(long)]
    seed: Option<ResampleSeed>,
    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,
    /// Include the sorted bootstrap distributions in JSON output
    #[arg(long)]
    include_distributions: bool,
    /// Output file path (stdout if omitted)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

impl ResamplingArg {
    fn config(&self) -> anyhow::Result<BootstrapConfig> {
        BootstrapConfig::new(self.num_samples, self.confidence)
            .context("Invalid bootstrap parameters")
    }

    fn bootstrapper(&self) -> Bootstrapper {
        let bootstrapper = self.seed.map_or_else(Bootstrapper::new, Bootstrapper::with_seed);
        log::info!("Resampling with seed {}", bootstrapper.seed());
        bootstrapper
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logger(args.verbose, args.quiet)?;
    match args.mode {
        Mode::Compare(arg) => compare::run(&arg)?,
        Mode::Bootstrap(arg) => bootstrap::run(&arg)?,
    }
    Ok(())
}

fn warn_unused_distributions(arg: &ResamplingArg) {
    if arg.include_distributions && arg.format == OutputFormat::Text {
        log::warn!("--include-distributions has no effect on text output");
    }
}

fn init_logger(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, _) => LevelFilter::Debug,
    };
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")
}
