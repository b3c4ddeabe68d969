//! Streaming filter engine.
//!
//! Reads the source line by line, runs every candidate through a fresh
//! [`Sifter`], and writes the survivors in input order once the whole source
//! has been read. All state lives for a single call.

mod error;
mod output;
mod report;
mod sift;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::canonical_key::KeyLimits;
use crate::dedup::Admission;
use crate::source::{extract_record, SourceMode};

pub use error::FilterError;
pub use output::write_output;
pub use report::{FilterReport, SkipCounts, SkipReason};
pub use sift::Sifter;

/// Filters `src` into `dst`, returning `true` when the scan and the write
/// both completed (including when nothing survived).
///
/// `json_field` selects JSON-lines mode when present and non-empty. Any
/// filesystem failure, or an empty path argument, yields `false`; bad lines
/// are skipped silently. Uses the default key limits.
pub fn interesting_urls(src: &str, dst: &str, json_field: Option<&str>) -> bool {
    let mode = SourceMode::from_field(json_field);
    match filter_file(Path::new(src), Path::new(dst), &mode, &KeyLimits::default()) {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("interesting_urls failed: {}", e);
            false
        }
    }
}

/// Filters `src` into `dst` and reports what happened.
pub fn filter_file(
    src: &Path,
    dst: &Path,
    mode: &SourceMode,
    limits: &KeyLimits,
) -> Result<FilterReport, FilterError> {
    if src.as_os_str().is_empty() {
        return Err(FilterError::EmptyArgument { which: "source" });
    }
    if dst.as_os_str().is_empty() {
        return Err(FilterError::EmptyArgument {
            which: "destination",
        });
    }

    let file = File::open(src).map_err(|source| FilterError::SourceOpen {
        path: src.to_path_buf(),
        source,
    })?;
    let (kept, report) =
        filter_reader(BufReader::new(file), mode, limits).map_err(|source| FilterError::Scan {
            path: src.to_path_buf(),
            source,
        })?;

    write_output(dst, &kept)?;
    tracing::info!(
        src = %src.display(),
        dst = %dst.display(),
        lines = report.lines_read,
        kept = report.kept,
        noise = report.noise_kept,
        skipped = report.skipped.total(),
        "filter run complete"
    );
    Ok(report)
}

/// Runs the pipeline over `reader`, returning surviving output lines in
/// input order together with the run's counters.
pub fn filter_reader<R: BufRead>(
    reader: R,
    mode: &SourceMode,
    limits: &KeyLimits,
) -> io::Result<(Vec<String>, FilterReport)> {
    let mut sifter = Sifter::new(*limits);
    let mut report = FilterReport::default();
    let mut kept = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        report.lines_read += 1;

        let record = match extract_record(&line, mode) {
            Ok(Some(record)) => record,
            Ok(None) => {
                report.blank_lines += 1;
                continue;
            }
            Err(reason) => {
                skip(&mut report, line_no, reason);
                continue;
            }
        };

        match sifter.offer(&record) {
            Ok(admission) => {
                if admission == Admission::NoiseSurvivor {
                    report.noise_kept += 1;
                }
                report.kept += 1;
                kept.push(record.output);
            }
            Err(reason) => skip(&mut report, line_no, reason),
        }
    }

    tracing::debug!(
        templates = sifter.store().unique_templates(),
        noisy_hosts = sifter.store().noisy_hosts(),
        "scan finished"
    );
    Ok((kept, report))
}

fn skip(report: &mut FilterReport, line_no: usize, reason: SkipReason) {
    tracing::debug!(line = line_no, %reason, "skipped record");
    report.skipped.record(reason);
}
