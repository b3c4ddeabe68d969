//! Per-run counters. Skipped records are never errors; they are tallied here.

use std::fmt;

use crate::canonical_key::KeyError;

const REASON_COUNT: usize = 8;

/// Why a record was left out of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    MalformedJson,
    MissingField,
    StaticAsset,
    Unparseable,
    EmptyHost,
    HighEntropyPath,
    Duplicate,
    ExtraNoise,
}

impl SkipReason {
    pub const ALL: [SkipReason; REASON_COUNT] = [
        SkipReason::MalformedJson,
        SkipReason::MissingField,
        SkipReason::StaticAsset,
        SkipReason::Unparseable,
        SkipReason::EmptyHost,
        SkipReason::HighEntropyPath,
        SkipReason::Duplicate,
        SkipReason::ExtraNoise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MalformedJson => "malformed-json",
            SkipReason::MissingField => "missing-field",
            SkipReason::StaticAsset => "static-asset",
            SkipReason::Unparseable => "unparseable",
            SkipReason::EmptyHost => "empty-host",
            SkipReason::HighEntropyPath => "high-entropy-path",
            SkipReason::Duplicate => "duplicate",
            SkipReason::ExtraNoise => "extra-noise",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<KeyError> for SkipReason {
    fn from(e: KeyError) -> Self {
        match e {
            KeyError::Unparseable => SkipReason::Unparseable,
            KeyError::EmptyHost => SkipReason::EmptyHost,
            KeyError::HighEntropyPath => SkipReason::HighEntropyPath,
        }
    }
}

/// Count of skipped records per reason.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipCounts {
    counts: [usize; REASON_COUNT],
}

impl SkipCounts {
    pub fn record(&mut self, reason: SkipReason) {
        self.counts[reason.index()] += 1;
    }

    pub fn get(&self, reason: SkipReason) -> usize {
        self.counts[reason.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Non-zero counts, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SkipReason, usize)> + '_ {
        SkipReason::ALL
            .iter()
            .map(|r| (*r, self.get(*r)))
            .filter(|(_, n)| *n > 0)
    }
}

/// Summary of one completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// Lines read from the source, blank ones included.
    pub lines_read: usize,
    pub blank_lines: usize,
    /// Records written to the destination (unique + noise survivors).
    pub kept: usize,
    /// Of `kept`, how many were a hostname's noise survivor.
    pub noise_kept: usize,
    pub skipped: SkipCounts,
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "read {} lines, kept {} ({} noise), skipped {}",
            self.lines_read,
            self.kept,
            self.noise_kept,
            self.skipped.total()
        )?;
        let mut first = true;
        for (reason, n) in self.skipped.iter() {
            write!(f, "{}{}={}", if first { " (" } else { ", " }, reason, n)?;
            first = false;
        }
        if !first {
            write!(f, ")")?;
        }
        Ok(())
    }
}
