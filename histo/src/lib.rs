pub mod args;
pub mod config;
pub mod input;
pub mod logging;
pub mod render;

use crate::args::{Format, Mode};
use crate::config::Config;
use crate::render::Report;
use anyhow::{Context, Result};
use bucketed::classify::{is_separator, Digits, Letters, LineLength, Whitespace, WordLength};
use bucketed::{Classifier, Counter};
use std::io::{BufRead, Write};

/// Count the input according to `config` and write the rendered report.
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, output: &mut W) -> Result<()> {
    log::debug!(
        "counting {} into {} buckets",
        config.mode.name(),
        config.buckets
    );

    let report = match config.mode {
        Mode::Letters => count_chars(config, Letters, input)?,
        Mode::Digits => count_chars(config, Digits, input)?,
        Mode::Whitespace => count_chars(config, Whitespace, input)?,
        Mode::Words => count_chars(config, WordLength::new(config.trailing), input)?,
        Mode::Lines => count_lines(config, input)?,
    };

    match config.format {
        Format::Bars => render::bars(output, &report, config.skip_empty)?,
        Format::Table => render::table(output, &report, config.skip_empty)?,
        Format::Json => render::json(output, &report, config.skip_empty)?,
    }

    output.flush().context("failed to write report")
}

fn count_chars<C, R>(config: &Config, classifier: C, input: R) -> Result<Report>
where
    C: Classifier<char>,
    R: BufRead,
{
    let mut counter = Counter::new(config.buckets, classifier)?;
    let mut white_space = 0;

    input::for_each_line(input, |line| {
        for c in line.chars() {
            let skipped = counter.skipped();
            counter
                .observe(c)
                .with_context(|| format!("failed to count {:?}", line.trim_end()))?;
            if counter.skipped() > skipped && is_separator(c) {
                white_space += 1;
            }
        }
        Ok(())
    })?;
    counter.finish().context("failed to count the end of input")?;

    let report = report(config, &counter)?;
    Ok(match config.mode {
        Mode::Digits => report.with_white_space(white_space),
        _ => report,
    })
}

fn count_lines<R: BufRead>(config: &Config, input: R) -> Result<Report> {
    let mut counter = Counter::new(config.buckets, LineLength)?;

    input::for_each_line(input, |line| {
        counter
            .observe(line.to_owned())
            .with_context(|| format!("failed to count line {}", counter.observed()))
    })?;
    counter.finish()?;

    report(config, &counter)
}

fn report<C: Classifier<U>, U>(config: &Config, counter: &Counter<C, U>) -> Result<Report> {
    log::debug!(
        "observed {} units, skipped {}",
        counter.observed(),
        counter.skipped()
    );

    Ok(Report::new(
        config.mode,
        counter.snapshot(),
        counter.observed(),
        counter.skipped(),
        &config.percentiles,
    )?)
}
