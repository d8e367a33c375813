use std::path::PathBuf;

use anyhow::Context as _;
use bootcmp_stats::descriptive::DescriptiveStats;
use clap::Args;

use super::{OutputFormat, ResamplingArg, warn_unused_distributions};
use crate::{input, render, schema::BootstrapReport, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct BootstrapArg {
    /// File with the sample, one number per line ('-' for stdin)
    pub(crate) sample: PathBuf,
    #[clap(flatten)]
    pub(crate) resampling: ResamplingArg,
}

pub(crate) fn run(arg: &BootstrapArg) -> anyhow::Result<()> {
    let BootstrapArg { sample, resampling } = arg;
    let config = resampling.config()?;
    let sample = input::read_sample("sample", sample)?;

    let mut bootstrapper = resampling.bootstrapper();
    let stats = bootstrapper.bootstrap_sampling(&sample, &config)?;

    let observed = DescriptiveStats::new(sample.iter().copied())
        .context("Failed to summarize sample")?;
    let report = BootstrapReport::new(
        bootstrapper.seed(),
        &config,
        observed,
        stats,
        resampling.include_distributions,
    );

    warn_unused_distributions(resampling);
    let mut output = Output::from_output_path(resampling.output.clone())?;
    match resampling.format {
        OutputFormat::Text => output.write_text(|w| render::write_bootstrap(w, &report)),
        OutputFormat::Json => output.write_json(&report),
    }
}
