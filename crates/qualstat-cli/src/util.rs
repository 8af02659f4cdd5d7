use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::PathBuf,
};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Where a command writes its report.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Creates `path`, or locks stdout when no path is given.
    pub fn new(path: Option<PathBuf>) -> anyhow::Result<Self> {
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

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout(_) => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    /// Writes `value` as pretty JSON followed by a newline, then flushes.
    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .and_then(|()| writeln!(self).map_err(serde_json::Error::io))
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))
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

/// Top-level JSON document written by every command.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a, T> {
    pub generated_at: DateTime<Utc>,
    pub command: &'static str,
    pub result: &'a T,
}

impl<'a, T> JsonReport<'a, T> {
    pub fn new(command: &'static str, result: &'a T) -> Self {
        Self {
            generated_at: Utc::now(),
            command,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use qualstat_stats::{request::ControlChartRequest, response::Response};

    use super::*;

    #[test]
    fn test_report_wraps_error_response() {
        let request = ControlChartRequest {
            subgroups: vec![vec![1.0, 2.0], vec![3.0]],
            subgroup_size: 2,
        };
        let response: Response<_> = request.respond();
        let json = serde_json::to_value(JsonReport::new("control-chart", &response)).unwrap();
        assert_eq!(json["command"], "control-chart");
        assert!(json["generated_at"].is_string());
        assert_eq!(json["result"]["kind"], "subgroup_size_mismatch");
        assert_eq!(
            json["result"]["error"],
            "sample 2 has 1 valid measurements, expected 2"
        );
    }

    #[test]
    fn test_write_json_to_file() {
        let path = std::env::temp_dir().join(format!("qualstat-output-{}.json", std::process::id()));
        let mut output = Output::new(Some(path.clone())).unwrap();
        assert_eq!(output.display_path(), path.display().to_string());
        output.write_json(&serde_json::json!({"mean": 5.0})).unwrap();
        drop(output);
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\"mean\": 5.0"));
    }
}
