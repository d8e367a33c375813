//! Reading samples from text input.
//!
//! A sample is written one number per line. Blank lines are skipped; lines
//! that are not a finite number are reported and dropped.

use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context;

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Numbers parsed from a sample, with the lines that were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSample {
    pub values: Vec<f64>,
    /// `(line number, line)` of every non-blank line that was not a finite number.
    /// Line numbers start at 1.
    pub rejected: Vec<(usize, String)>,
}

/// Parses one number per line.
pub fn parse_sample(text: &str) -> ParsedSample {
    let mut parsed = ParsedSample::default();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<f64>() {
            Ok(value) if value.is_finite() => parsed.values.push(value),
            _ => parsed.rejected.push((idx + 1, line.to_owned())),
        }
    }
    parsed
}

/// Reads and parses the sample at `path`, or from stdin if `path` is `-`.
///
/// Fails if the input cannot be read or contains no numbers at all.
pub fn read_sample(label: &str, path: &Path) -> anyhow::Result<Vec<f64>> {
    let text = if path == Path::new(STDIN_PATH) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .with_context(|| format!("Failed to read {label} from stdin"))?;
        text
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read {label} file: {}", path.display()))?
    };

    let ParsedSample { values, rejected } = parse_sample(&text);
    for (line_no, line) in &rejected {
        log::warn!("{label}: skipping line {line_no}, not a finite number: {line:?}");
    }
    if values.is_empty() {
        anyhow::bail!(
            "Please provide valid samples: {label} ({}) contains no numbers",
            path.display()
        );
    }
    log::info!("{label}: read {} values from {}", values.len(), path.display());
    Ok(values)
}

/// Rejects more than one sample being read from stdin.
pub fn ensure_single_stdin<'a, I>(paths: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = &'a PathBuf>,
{
    let stdin_count = paths
        .into_iter()
        .filter(|path| path.as_path() == Path::new(STDIN_PATH))
        .count();
    if stdin_count > 1 {
        anyhow::bail!("Only one sample can be read from stdin ('{STDIN_PATH}')");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_number_per_line() {
        let parsed = parse_sample("1\n2.5\n-3\n1e2\n");
        assert_eq!(parsed.values, vec![1.0, 2.5, -3.0, 100.0]);
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let parsed = parse_sample("  4 \r\n\n\t\n5\r\n");
        assert_eq!(parsed.values, vec![4.0, 5.0]);
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_lines() {
        let parsed = parse_sample("1\nabc\n2\nNaN\ninf\n3,5\n");
        assert_eq!(parsed.values, vec![1.0, 2.0]);
        assert_eq!(
            parsed.rejected,
            vec![
                (2, "abc".to_owned()),
                (4, "NaN".to_owned()),
                (5, "inf".to_owned()),
                (6, "3,5".to_owned()),
            ]
        );
    }

    #[test]
    fn test_parse_empty_text() {
        assert_eq!(parse_sample(""), ParsedSample::default());
    }

    #[test]
    fn test_ensure_single_stdin() {
        let file = PathBuf::from("a.txt");
        let stdin = PathBuf::from(STDIN_PATH);
        assert!(ensure_single_stdin([&file, &stdin]).is_ok());
        assert!(ensure_single_stdin([&stdin, &stdin]).is_err());
    }

    #[test]
    fn test_read_sample_missing_file() {
        let err = read_sample("sample 1", Path::new("/nonexistent/bootcmp/sample.txt"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("Failed to read sample 1 file"));
    }

    #[test]
    fn test_read_sample_from_file() {
        let path = std::env::temp_dir().join(format!("bootcmp-read-{}.txt", std::process::id()));
        fs::write(&path, "1\n2\nx\n3\n").unwrap();
        let values = read_sample("sample", &path);
        fs::remove_file(&path).unwrap();
        assert_eq!(values.unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_read_sample_without_numbers() {
        let path = std::env::temp_dir().join(format!("bootcmp-empty-{}.txt", std::process::id()));
        fs::write(&path, "\nfoo\n").unwrap();
        let result = read_sample("sample 2", &path);
        fs::remove_file(&path).unwrap();
        let err = result.unwrap_err().to_string();
        assert!(err.starts_with("Please provide valid samples: sample 2"));
    }
}
