//! Plain-text rendering of computation results.

use std::{
    fmt,
    io::{self, Write},
};

use qualstat_stats::{
    control_chart::{ControlLimits, XBarRChart},
    descriptive::DescriptiveStats,
    frequency::FrequencyRow,
    grouped::{GroupedFrequencyRow, GroupedStats},
    shape::{Kurtosis, Skewness},
};

fn print_title<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;
    writeln!(out)
}

fn print_summary_row<W: Write>(out: &mut W, label: &str, value: impl fmt::Display) -> io::Result<()> {
    writeln!(out, "  {label:<22} {value}")
}

fn print_shape<W: Write>(
    out: &mut W,
    skewness_shape: Option<Skewness>,
    kurtosis_shape: Option<Kurtosis>,
) -> io::Result<()> {
    if let Some(shape) = skewness_shape {
        print_summary_row(out, "Skewness shape", shape)?;
    }
    if let Some(shape) = kurtosis_shape {
        print_summary_row(out, "Kurtosis shape", shape)?;
    }
    Ok(())
}

fn print_frequency_table<W: Write>(out: &mut W, rows: &[FrequencyRow]) -> io::Result<()> {
    writeln!(out, "Frequency Table")?;
    writeln!(
        out,
        "  {:>12} {:>8} {:>10} {:>10} {:>10}",
        "Value", "Freq", "Rel", "Cum Freq", "Cum Rel"
    )?;
    writeln!(out, "  {}", "-".repeat(54))?;
    for row in rows {
        writeln!(
            out,
            "  {:>12} {:>8} {:>10.4} {:>10} {:>10.4}",
            row.value,
            row.absolute_frequency,
            row.relative_frequency,
            row.cumulative_absolute,
            row.cumulative_relative,
        )?;
    }
    Ok(())
}

pub(super) fn print_descriptive<W: Write>(out: &mut W, stats: &DescriptiveStats) -> anyhow::Result<()> {
    print_title(out, &format!("Descriptive Statistics (n = {})", stats.count))?;
    print_summary_row(out, "Min", stats.min)?;
    print_summary_row(out, "Max", stats.max)?;
    print_summary_row(out, "Range", stats.range)?;
    print_summary_row(out, "Mean", stats.mean)?;
    print_summary_row(out, "Median", stats.median)?;
    print_summary_row(out, "Mode", &stats.mode)?;
    print_summary_row(out, "Q1", stats.q1)?;
    print_summary_row(out, "Q3", stats.q3)?;
    print_summary_row(out, "IQR", stats.iqr)?;
    print_summary_row(out, "Variance (population)", stats.population_variance)?;
    print_summary_row(out, "Variance (sample)", stats.sample_variance)?;
    print_summary_row(out, "Std dev (population)", stats.population_std_dev)?;
    print_summary_row(out, "Std dev (sample)", stats.sample_std_dev)?;
    print_summary_row(out, "Skewness", stats.skewness)?;
    print_summary_row(out, "Kurtosis (excess)", stats.kurtosis)?;
    print_shape(out, stats.skewness_shape, stats.kurtosis_shape)?;
    writeln!(out)?;
    print_frequency_table(out, &stats.frequency_table)?;
    Ok(())
}

fn print_distribution_table<W: Write>(out: &mut W, rows: &[GroupedFrequencyRow]) -> io::Result<()> {
    writeln!(out, "Grouped Frequency Distribution")?;
    writeln!(
        out,
        "  {:>3} {:<24} {:>10} {:>8} {:>10} {:>10} {:>10}",
        "#", "Class", "Mark", "Freq", "Rel", "Cum Freq", "Cum Rel"
    )?;
    writeln!(out, "  {}", "-".repeat(81))?;
    for row in rows {
        writeln!(
            out,
            "  {:>3} {:<24} {:>10} {:>8} {:>10.4} {:>10} {:>10.4}",
            row.id,
            row.label,
            row.class_mark,
            row.absolute_frequency,
            row.relative_frequency,
            row.cumulative_absolute,
            row.cumulative_relative,
        )?;
    }
    Ok(())
}

pub(super) fn print_grouped<W: Write>(out: &mut W, stats: &GroupedStats) -> anyhow::Result<()> {
    print_title(out, &format!("Grouped Statistics (n = {})", stats.count))?;
    print_summary_row(out, "Min", stats.min)?;
    print_summary_row(out, "Max", stats.max)?;
    print_summary_row(out, "Range", stats.range)?;
    print_summary_row(out, "Classes", stats.class_count)?;
    print_summary_row(out, "Class width", stats.class_width)?;
    print_summary_row(out, "Mean", stats.mean)?;
    print_summary_row(out, "Median", stats.median)?;
    print_summary_row(out, "Mode", &stats.mode)?;
    print_summary_row(out, "Variance (population)", stats.population_variance)?;
    print_summary_row(out, "Variance (sample)", stats.sample_variance)?;
    print_summary_row(out, "Std dev (population)", stats.population_std_dev)?;
    print_summary_row(out, "Std dev (sample)", stats.sample_std_dev)?;
    print_summary_row(out, "Skewness", stats.skewness)?;
    print_summary_row(out, "Kurtosis (excess)", stats.kurtosis)?;
    print_shape(out, stats.skewness_shape, stats.kurtosis_shape)?;
    writeln!(out)?;
    print_distribution_table(out, &stats.distribution_table)?;
    Ok(())
}

fn print_limits<W: Write>(out: &mut W, chart: &str, limits: &ControlLimits) -> io::Result<()> {
    writeln!(
        out,
        "  {chart:<8} {:>12.4} {:>12.4} {:>12.4}",
        limits.lower, limits.center, limits.upper
    )
}

pub(super) fn print_control_chart<W: Write>(out: &mut W, chart: &XBarRChart) -> anyhow::Result<()> {
    print_title(
        out,
        &format!(
            "X-bar/R Control Chart ({} subgroups of {})",
            chart.subgroups.len(),
            chart.subgroup_size
        ),
    )?;
    let factors = chart.factors;
    writeln!(
        out,
        "  Factors: A2 = {}, D3 = {}, D4 = {}",
        factors.a2, factors.d3, factors.d4
    )?;
    writeln!(out, "  Grand mean:       {:.4}", chart.grand_mean)?;
    writeln!(out, "  Mean range:       {:.4}", chart.grand_range_mean)?;
    writeln!(out)?;

    writeln!(out, "  {:<8} {:>12} {:>12} {:>12}", "Chart", "LCL", "CL", "UCL")?;
    writeln!(out, "  {}", "-".repeat(47))?;
    print_limits(out, "X-bar", &chart.x_bar_limits)?;
    print_limits(out, "R", &chart.range_limits)?;
    writeln!(out)?;

    let out_of_control = chart.out_of_control();
    writeln!(out, "  {:<12} {:>12} {:>12} {:>4}", "Subgroup", "Mean", "Range", "")?;
    writeln!(out, "  {}", "-".repeat(43))?;
    for point in &chart.subgroups {
        let flag = if out_of_control.contains(&point.label.as_str()) {
            "*"
        } else {
            ""
        };
        writeln!(
            out,
            "  {:<12} {:>12.4} {:>12.4} {:>4}",
            point.label, point.mean, point.range, flag
        )?;
    }
    if !out_of_control.is_empty() {
        writeln!(out, "  (* outside control limits)")?;
    }
    Ok(())
}
