//! Text and JSON renderings of a histogram snapshot.

use crate::args::Mode;
use bucketed::classify::Whitespace;
use bucketed::{Bucket, Histograms, Snapshot};
use serde::Serialize;
use std::io::{self, Write};

/// A finished histogram run, ready to be rendered.
#[derive(Debug, Clone)]
pub struct Report {
    pub mode: Mode,
    pub snapshot: Snapshot,
    pub observed: u64,
    pub skipped: u64,
    /// Skipped separators (space, tab and newline), when tracked.
    pub white_space: Option<u64>,
    pub percentiles: Vec<(f64, Bucket)>,
}

impl Report {
    /// Build a report, computing any requested percentiles. An empty
    /// histogram has no percentiles to report.
    pub fn new(
        mode: Mode,
        snapshot: Snapshot,
        observed: u64,
        skipped: u64,
        percentiles: &[f64],
    ) -> Result<Self, bucketed::Error> {
        let percentiles = if percentiles.is_empty() {
            Vec::new()
        } else {
            match snapshot.percentiles(percentiles) {
                Ok(percentiles) => percentiles,
                Err(bucketed::Error::Empty) => {
                    log::warn!("no observations, skipping percentiles");
                    Vec::new()
                }
                Err(e) => return Err(e),
            }
        };

        Ok(Self {
            mode,
            snapshot,
            observed,
            skipped,
            white_space: None,
            percentiles,
        })
    }

    /// Split the skipped units into separators and everything else.
    pub fn with_white_space(mut self, white_space: u64) -> Self {
        self.white_space = Some(white_space);
        self
    }

    /// Skipped units that were not separators.
    pub fn other(&self) -> Option<u64> {
        self.white_space
            .map(|white_space| self.skipped.saturating_sub(white_space))
    }

    fn rows(&self, skip_empty: bool) -> impl Iterator<Item = Bucket> + '_ {
        // there are no zero length words
        let first = usize::from(self.mode == Mode::Words);

        self.snapshot
            .iter()
            .skip(first)
            .filter(move |bucket| !skip_empty || bucket.count() > 0)
    }
}

/// Returns the label for a bucket: the letter for letter histograms, a name
/// for whitespace, and the right aligned index for everything else.
pub fn label(mode: Mode, index: usize) -> String {
    match mode {
        Mode::Letters if index < 26 => char::from(b'a' + index as u8).to_string(),
        Mode::Whitespace => match index {
            Whitespace::NEWLINE => "newline".to_string(),
            Whitespace::TAB => "tab".to_string(),
            Whitespace::BLANK => "blank".to_string(),
            _ => format!("{index:>3}"),
        },
        _ => format!("{index:>3}"),
    }
}

fn label_width(report: &Report) -> usize {
    (0..report.snapshot.total_bins())
        .map(|index| label(report.mode, index).len())
        .max()
        .unwrap_or(0)
}

/// One row per bucket: the label, a `|`, then one `*` per observation.
pub fn bars<W: Write>(out: &mut W, report: &Report, skip_empty: bool) -> io::Result<()> {
    let width = label_width(report);

    for bucket in report.rows(skip_empty) {
        let label = label(report.mode, bucket.index());
        let bar = "*".repeat(bucket.count() as usize);
        writeln!(out, "{label:>width$}|{bar}")?;
    }

    summary(out, report)
}

/// One `label | count` row per bucket.
pub fn table<W: Write>(out: &mut W, report: &Report, skip_empty: bool) -> io::Result<()> {
    let width = label_width(report);

    for bucket in report.rows(skip_empty) {
        let label = label(report.mode, bucket.index());
        writeln!(out, "{label:>width$} | {}", bucket.count())?;
    }

    summary(out, report)
}

fn summary<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    writeln!(
        out,
        "observed = {}, counted = {}, skipped = {}",
        report.observed,
        report.snapshot.total(),
        report.skipped
    )?;

    if let (Some(white_space), Some(other)) = (report.white_space, report.other()) {
        writeln!(out, "white space = {white_space}, other = {other}")?;
    }

    for (percentile, bucket) in &report.percentiles {
        writeln!(
            out,
            "p{percentile} = {}",
            label(report.mode, bucket.index()).trim_start()
        )?;
    }

    Ok(())
}

#[derive(Serialize)]
struct JsonPercentile {
    percentile: f64,
    bucket: usize,
}

#[derive(Serialize)]
struct JsonReport {
    mode: &'static str,
    observed: u64,
    counted: u64,
    skipped: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    white_space: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    other: Option<u64>,
    buckets: Vec<Bucket>,
    percentiles: Vec<JsonPercentile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<Vec<&'static str>>,
}

const LETTER_LABELS: [&str; 26] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
    "s", "t", "u", "v", "w", "x", "y", "z",
];

/// The report as a single JSON document.
pub fn json<W: Write>(out: &mut W, report: &Report, skip_empty: bool) -> serde_json::Result<()> {
    let buckets: Vec<Bucket> = report.rows(skip_empty).collect();

    let labels = match report.mode {
        Mode::Letters => Some(
            buckets
                .iter()
                .map(|b| LETTER_LABELS.get(b.index()).copied().unwrap_or(""))
                .collect(),
        ),
        _ => None,
    };

    let document = JsonReport {
        mode: report.mode.name(),
        observed: report.observed,
        counted: u64::try_from(report.snapshot.total()).unwrap_or(u64::MAX),
        skipped: report.skipped,
        white_space: report.white_space,
        other: report.other(),
        buckets,
        percentiles: report
            .percentiles
            .iter()
            .map(|(percentile, bucket)| JsonPercentile {
                percentile: *percentile,
                bucket: bucket.index(),
            })
            .collect(),
        labels,
    };

    serde_json::to_writer(&mut *out, &document)?;
    writeln!(out).map_err(serde_json::Error::io)
}
