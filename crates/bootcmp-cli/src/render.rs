//! Plain-text rendering of reports, with two decimals per value.

use std::io::{self, Write};

use crate::schema::{BootstrapReport, ComparisonReport, IntervalReport};

pub fn write_comparison<W>(w: &mut W, report: &ComparisonReport) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let confidence = report.confidence;
    let samples = [("Sample 1", &report.sample1), ("Sample 2", &report.sample2)];

    for (label, sample) in samples {
        write_interval(w, label, "Mean", sample.observed.mean, &sample.mean, confidence)?;
    }
    writeln!(
        w,
        "Percentage of Bootstrap Samples Where Mean(Sample 1) > Mean(Sample 2): {:.2}%",
        report.percentage_mean_sample1_larger
    )?;

    for (label, sample) in samples {
        write_interval(
            w,
            label,
            "Median",
            sample.observed.median,
            &sample.median,
            confidence,
        )?;
    }
    writeln!(
        w,
        "Percentage of Bootstrap Samples Where Median(Sample 1) > Median(Sample 2): {:.2}%",
        report.percentage_median_sample1_larger
    )?;
    Ok(())
}

pub fn write_bootstrap<W>(w: &mut W, report: &BootstrapReport) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let sample = &report.sample;
    let confidence = report.confidence;
    write_interval(w, "Sample", "Mean", sample.observed.mean, &sample.mean, confidence)?;
    write_interval(
        w,
        "Sample",
        "Median",
        sample.observed.median,
        &sample.median,
        confidence,
    )?;
    Ok(())
}

fn write_interval<W>(
    w: &mut W,
    label: &str,
    statistic: &str,
    observed: f64,
    interval: &IntervalReport,
    confidence: f64,
) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(
        w,
        "{label} {statistic}: {observed:.2} - [{:.2}, {:.2}] ({confidence}% CI)",
        interval.lower_bound, interval.upper_bound
    )
}

#[cfg(test)]
mod tests {
    use bootcmp_engine::{BootstrapConfig, Bootstrapper, ResampleSeed};
    use bootcmp_stats::descriptive::DescriptiveStats;

    use super::*;

    #[test]
    fn test_comparison_text() {
        let seed = ResampleSeed::from_bytes([1; 16]);
        let config = BootstrapConfig::new(200, 95.0).unwrap();
        let sample = [5.0, 5.0, 5.0];
        let result = Bootstrapper::with_seed(seed)
            .compare_statistics(&sample, &sample, &config)
            .unwrap();
        let observed = [
            DescriptiveStats::new(sample).unwrap(),
            DescriptiveStats::new(sample).unwrap(),
        ];
        let report = ComparisonReport::new(seed, &config, observed, result, false);

        let mut out = Vec::new();
        write_comparison(&mut out, &report).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Sample 1 Mean: 5.00 - [5.00, 5.00] (95% CI)\n\
             Sample 2 Mean: 5.00 - [5.00, 5.00] (95% CI)\n\
             Percentage of Bootstrap Samples Where Mean(Sample 1) > Mean(Sample 2): 0.00%\n\
             Sample 1 Median: 5.00 - [5.00, 5.00] (95% CI)\n\
             Sample 2 Median: 5.00 - [5.00, 5.00] (95% CI)\n\
             Percentage of Bootstrap Samples Where Median(Sample 1) > Median(Sample 2): 0.00%\n"
        );
    }

    #[test]
    fn test_bootstrap_text() {
        let seed = ResampleSeed::from_bytes([2; 16]);
        let config = BootstrapConfig::new(100, 90.0).unwrap();
        let sample = [1.25];
        let stats = Bootstrapper::with_seed(seed)
            .bootstrap_sampling(&sample, &config)
            .unwrap();
        let observed = DescriptiveStats::new(sample).unwrap();
        let report = BootstrapReport::new(seed, &config, observed, stats, false);

        let mut out = Vec::new();
        write_bootstrap(&mut out, &report).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Sample Mean: 1.25 - [1.25, 1.25] (90% CI)\n\
             Sample Median: 1.25 - [1.25, 1.25] (90% CI)\n"
        );
    }

    #[test]
    fn test_fractional_confidence_is_kept() {
        let interval = IntervalReport {
            lower_bound: 0.5,
            upper_bound: 2.126,
            values: None,
        };
        let mut out = Vec::new();
        write_interval(&mut out, "Sample 2", "Mean", 1.0, &interval, 97.5).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Sample 2 Mean: 1.00 - [0.50, 2.13] (97.5% CI)\n"
        );
    }
}
