use clap::Args;
use qualstat_stats::request::GroupedRequest;

use crate::{command::IoArg, input};

use super::table;

#[derive(Debug, Clone, Args)]
pub(crate) struct GroupArg {
    #[clap(flatten)]
    io: IoArg,
    /// Number of classes (defaults to Sturges' rule)
    #[arg(long, short = 'k')]
    classes: Option<usize>,
}

pub(crate) fn run(arg: &GroupArg) -> anyhow::Result<()> {
    let text = input::read_input(arg.io.input.as_deref())?;
    let request = GroupedRequest {
        numbers: input::parse_numbers(&text)?,
        desired_class_count: arg.classes,
    };
    super::emit(&arg.io, "group", request.respond(), table::print_grouped)
}
