use std::path::PathBuf;

use anyhow::Context as _;
use bootcmp_stats::descriptive::DescriptiveStats;
use clap::Args;

use super::{OutputFormat, ResamplingArg, warn_unused_distributions};
use crate::{input, render, schema::ComparisonReport, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct CompareArg {
    /// File with the first sample, one number per line ('-' for stdin)
    pub(crate) sample1: PathBuf,
    /// File with the second sample, one number per line ('-' for stdin)
    pub(crate) sample2: PathBuf,
    #[clap(flatten)]
    pub(crate) resampling: ResamplingArg,
}

pub(crate) fn run(arg: &CompareArg) -> anyhow::Result<()> {
    let CompareArg {
        sample1,
        sample2,
        resampling,
    } = arg;
    let config = resampling.config()?;
    input::ensure_single_stdin([sample1, sample2])?;
    let sample1 = input::read_sample("sample 1", sample1)?;
    let sample2 = input::read_sample("sample 2", sample2)?;

    let mut bootstrapper = resampling.bootstrapper();
    let result = bootstrapper.compare_statistics(&sample1, &sample2, &config)?;

    let observed1 = DescriptiveStats::new(sample1.iter().copied())
        .context("Failed to summarize sample 1")?;
    let observed2 = DescriptiveStats::new(sample2.iter().copied())
        .context("Failed to summarize sample 2")?;
    let report = ComparisonReport::new(
        bootstrapper.seed(),
        &config,
        [observed1, observed2],
        result,
        resampling.include_distributions,
    );

    warn_unused_distributions(resampling);
    let mut output = Output::from_output_path(resampling.output.clone())?;
    match resampling.format {
        OutputFormat::Text => output.write_text(|w| render::write_comparison(w, &report)),
        OutputFormat::Json => output.write_json(&report),
    }
}
