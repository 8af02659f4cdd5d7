use clap::Args;
use qualstat_stats::request::DescriptiveRequest;

use crate::{command::IoArg, input};

use super::table;

#[derive(Debug, Clone, Args)]
pub(crate) struct DescribeArg {
    #[clap(flatten)]
    io: IoArg,
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let text = input::read_input(arg.io.input.as_deref())?;
    let request = DescriptiveRequest {
        numbers: input::parse_numbers(&text)?,
    };
    super::emit(
        &arg.io,
        "describe",
        request.respond(),
        table::print_descriptive,
    )
}
