//! Per-invocation bookkeeping of seen templates and per-host noise survivors.
//!
//! A `DedupStore` is created fresh for every run and dropped at the end of
//! it; nothing is shared between runs.

use std::collections::HashMap;

use crate::canonical_key::CanonicalKey;

/// Outcome of offering one candidate to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// First URL with this template; now recorded in the seen set.
    Unique,
    /// First noise URL for this hostname; now recorded in the host set.
    NoiseSurvivor,
    /// Template already seen.
    Duplicate,
    /// Hostname already has its one noise survivor.
    ExtraNoise,
}

impl Admission {
    pub fn is_kept(&self) -> bool {
        matches!(self, Admission::Unique | Admission::NoiseSurvivor)
    }
}

/// Seen templates (key → first line) and one noise line per hostname.
#[derive(Debug, Default)]
pub struct DedupStore {
    seen: HashMap<CanonicalKey, String>,
    host_noise: HashMap<String, String>,
}

impl DedupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decides whether `line` survives.
    ///
    /// The seen-set check runs before `is_noise` is evaluated, so a noise URL
    /// whose template was already kept is a duplicate, not a noise survivor.
    /// Noise URLs never enter the seen set.
    pub fn admit<F>(&mut self, key: CanonicalKey, host: &str, is_noise: F, line: &str) -> Admission
    where
        F: FnOnce() -> bool,
    {
        if self.seen.contains_key(&key) {
            return Admission::Duplicate;
        }
        if is_noise() {
            if self.host_noise.contains_key(host) {
                return Admission::ExtraNoise;
            }
            self.host_noise.insert(host.to_string(), line.to_string());
            return Admission::NoiseSurvivor;
        }
        self.seen.insert(key, line.to_string());
        Admission::Unique
    }

    /// Representative line for a template, if one was kept.
    #[cfg(test)]
    pub(crate) fn representative(&self, key: &CanonicalKey) -> Option<&str> {
        self.seen.get(key).map(String::as_str)
    }

    /// Noise survivor for a hostname, if one was kept.
    #[cfg(test)]
    pub(crate) fn noise_survivor(&self, host: &str) -> Option<&str> {
        self.host_noise.get(host).map(String::as_str)
    }

    pub(crate) fn unique_templates(&self) -> usize {
        self.seen.len()
    }

    pub(crate) fn noisy_hosts(&self) -> usize {
        self.host_noise.len()
    }
}
