use std::{io::Write as _, path::PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use qualstat_stats::response::{Report, Response};

use crate::util::{JsonReport, Output};

use self::{control_chart::ControlChartArg, describe::DescribeArg, group::GroupArg};

mod control_chart;
mod describe;
mod group;
mod table;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Enable debug logging (`RUST_LOG` overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// What to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Descriptive statistics and frequency table of a list of numbers
    Describe(#[clap(flatten)] DescribeArg),
    /// Grouped frequency distribution with Sturges classes
    Group(#[clap(flatten)] GroupArg),
    /// X-bar/R control chart, one subgroup per line
    ControlChart(#[clap(flatten)] ControlChartArg),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Human readable tables
    #[default]
    Table,
    /// Pretty printed JSON report
    Json,
}

/// Input and output options shared by every command.
#[derive(Debug, Clone, Args)]
pub(crate) struct IoArg {
    /// Input file; `-` or omitted reads stdin
    pub input: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
    /// Output file (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .filter_level(log_level)
        .parse_default_env()
        .init();

    match &args.mode {
        Mode::Describe(arg) => describe::run(arg)?,
        Mode::Group(arg) => group::run(arg)?,
        Mode::ControlChart(arg) => control_chart::run(arg)?,
    }
    Ok(())
}

/// Write `response` in the requested format, then surface its error.
///
/// JSON output always carries the response, including the error body. Table
/// output is only produced on success.
fn emit<R>(
    io: &IoArg,
    command: &'static str,
    response: Response<R>,
    print_table: fn(&mut Output, &R) -> anyhow::Result<()>,
) -> anyhow::Result<()>
where
    R: Report,
{
    let mut output = Output::new(io.output.clone())?;
    match io.format {
        Format::Json => output.write_json(&JsonReport::new(command, &response))?,
        Format::Table => {
            if let Ok(result) = &response.0 {
                print_table(&mut output, result)?;
                output
                    .flush()
                    .with_context(|| format!("Failed to flush output to {}", output.display_path()))?;
            }
        }
    }
    if response.is_ok() && matches!(output, Output::File { .. }) {
        log::info!("{command} report written to {}", output.display_path());
    }
    response
        .into_result()
        .with_context(|| format!("Failed to compute {command}"))?;
    Ok(())
}
