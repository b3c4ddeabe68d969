//! The per-candidate pipeline: static filter, parse, key, dedup/noise.

use url::Url;

use crate::canonical_key::{build_key, KeyLimits};
use crate::classify::{is_noise_url, is_static_url};
use crate::dedup::{Admission, DedupStore};
use crate::source::SourceRecord;

use super::SkipReason;

/// State for one run. Build a new one per input; never reuse across runs.
#[derive(Debug)]
pub struct Sifter {
    limits: KeyLimits,
    store: DedupStore,
}

impl Sifter {
    pub fn new(limits: KeyLimits) -> Self {
        Self {
            limits,
            store: DedupStore::new(),
        }
    }

    /// Runs one candidate through the pipeline.
    ///
    /// Returns `Admission::Unique` or `Admission::NoiseSurvivor` when the
    /// record should be written, or the reason it was dropped.
    pub fn offer(&mut self, record: &SourceRecord) -> Result<Admission, SkipReason> {
        let raw = record.url.as_str();
        if is_static_url(raw) {
            return Err(SkipReason::StaticAsset);
        }

        let url = Url::parse(raw).map_err(|_| SkipReason::Unparseable)?;
        let host = url.host_str().unwrap_or_default();
        if host.is_empty() {
            return Err(SkipReason::EmptyHost);
        }
        let key = build_key(&url, &self.limits).map_err(SkipReason::from)?;

        match self.store.admit(key, host, || is_noise_url(raw), &record.output) {
            Admission::Duplicate => Err(SkipReason::Duplicate),
            Admission::ExtraNoise => Err(SkipReason::ExtraNoise),
            kept => Ok(kept),
        }
    }

    pub(crate) fn store(&self) -> &DedupStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(sifter: &mut Sifter, url: &str) -> Result<Admission, SkipReason> {
        sifter.offer(&SourceRecord::plain(url))
    }

    #[test]
    fn pipeline_order() {
        let mut s = Sifter::new(KeyLimits::default());
        assert_eq!(offer(&mut s, "http://a.com/p?x=1"), Ok(Admission::Unique));
        assert_eq!(offer(&mut s, "http://a.com/p?x=2"), Err(SkipReason::Duplicate));
        assert_eq!(offer(&mut s, "http://a.com/s.css"), Err(SkipReason::StaticAsset));
        assert_eq!(offer(&mut s, "a.com/p"), Err(SkipReason::Unparseable));
        assert_eq!(offer(&mut s, "file:///tmp/x"), Err(SkipReason::EmptyHost));
        assert_eq!(
            offer(&mut s, "http://a.com/this-is-a-long-slug"),
            Err(SkipReason::HighEntropyPath)
        );
        assert_eq!(offer(&mut s, "http://a.com/blog/x"), Ok(Admission::NoiseSurvivor));
        assert_eq!(offer(&mut s, "http://a.com/news/y"), Err(SkipReason::ExtraNoise));
        assert_eq!(s.store().unique_templates(), 1);
        assert_eq!(s.store().noisy_hosts(), 1);
    }

    #[test]
    fn static_filter_runs_before_parsing() {
        let mut s = Sifter::new(KeyLimits::default());
        assert_eq!(offer(&mut s, "not a url.png"), Err(SkipReason::StaticAsset));
    }

    #[test]
    fn path_limits_override_noise_status() {
        let mut s = Sifter::new(KeyLimits::default());
        let long = "9".repeat(120);
        assert_eq!(
            offer(&mut s, &format!("http://a.com/item/{long}")),
            Err(SkipReason::HighEntropyPath)
        );
        // The rejected URL did not take the host's noise slot.
        assert_eq!(offer(&mut s, "http://a.com/item/42"), Ok(Admission::NoiseSurvivor));
    }

    #[test]
    fn duplicate_template_beats_fresh_noise() {
        let mut s = Sifter::new(KeyLimits::default());
        assert_eq!(offer(&mut s, "http://a.com/p?d=1"), Ok(Admission::Unique));
        assert_eq!(
            offer(&mut s, "http://a.com/p?d=2022-01-02"),
            Err(SkipReason::Duplicate)
        );
        assert_eq!(s.store().noise_survivor("a.com"), None);
    }
}
