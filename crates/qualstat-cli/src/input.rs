//! Reading and parsing numeric input text.
//!
//! Numbers are separated by commas and/or newlines. Blank tokens are skipped;
//! any other token must parse as `f64`.

use std::{
    fs,
    io::{self, Read as _},
    path::Path,
};

use anyhow::Context;

/// Read the whole input, from stdin when `path` is `None` or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read input from stdin")?;
            Ok(text)
        }
    }
}

fn parse_line(line_number: usize, line: &str) -> anyhow::Result<Vec<f64>> {
    line.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("line {line_number}: invalid number {token:?}"))
        })
        .collect()
}

/// Parse a flat list of numbers.
pub(crate) fn parse_numbers(text: &str) -> anyhow::Result<Vec<f64>> {
    let mut numbers = Vec::new();
    for (index, line) in text.lines().enumerate() {
        numbers.extend(parse_line(index + 1, line)?);
    }
    log::debug!("parsed {} numbers", numbers.len());
    Ok(numbers)
}

/// Parse one subgroup per non-blank line.
pub(crate) fn parse_subgroups(text: &str) -> anyhow::Result<Vec<Vec<f64>>> {
    let mut subgroups = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let subgroup = parse_line(index + 1, line)?;
        if !subgroup.is_empty() {
            subgroups.push(subgroup);
        }
    }
    log::debug!("parsed {} subgroups", subgroups.len());
    Ok(subgroups)
}
