use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::PathBuf,
};

use anyhow::Context;

/// Destination of a report: stdout, or a file given with `--output`.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Creates the file at `path`, or locks stdout if `path` is `None`.
    pub fn from_output_path(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Output::Stdout(io::stdout().lock()));
        };
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    fn destination(&self) -> String {
        match self {
            Output::Stdout(_) => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    /// Writes `report` as pretty-printed JSON followed by a newline.
    pub fn write_json<T>(&mut self, report: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize + ?Sized,
    {
        serde_json::to_writer_pretty(&mut *self, report)
            .and_then(|()| writeln!(self).map_err(serde_json::Error::io))
            .with_context(|| format!("Failed to write JSON report to {}", self.destination()))?;
        self.finish()
    }

    /// Writes a plain-text report through `render`.
    pub fn write_text<F>(&mut self, render: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Self) -> io::Result<()>,
    {
        render(self)
            .with_context(|| format!("Failed to write report to {}", self.destination()))?;
        self.finish()
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.destination()))?;
        if let Output::File { path, .. } = self {
            log::info!("Report written to {}", path.display());
        }
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(writer) => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(writer) => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}
