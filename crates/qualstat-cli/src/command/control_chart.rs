use clap::Args;
use qualstat_stats::request::ControlChartRequest;

use crate::{command::IoArg, input};

use super::table;

#[derive(Debug, Clone, Args)]
pub(crate) struct ControlChartArg {
    #[clap(flatten)]
    io: IoArg,
    /// Measurements per subgroup (defaults to the length of the first line)
    #[arg(long, short = 'n')]
    subgroup_size: Option<usize>,
}

pub(crate) fn run(arg: &ControlChartArg) -> anyhow::Result<()> {
    let text = input::read_input(arg.io.input.as_deref())?;
    let subgroups = input::parse_subgroups(&text)?;
    let subgroup_size = arg
        .subgroup_size
        .or_else(|| subgroups.first().map(Vec::len))
        .unwrap_or_default();
    let request = ControlChartRequest {
        subgroups,
        subgroup_size,
    };
    super::emit(
        &arg.io,
        "control-chart",
        request.respond(),
        table::print_control_chart,
    )
}
