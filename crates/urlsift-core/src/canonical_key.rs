//! Canonical request-template keys.
//!
//! Two URLs share a key when they have the same hostname, the same path and
//! the same set of query parameter names. Parameter values, their order and
//! repetitions do not contribute, so `?id=1` and `?id=2` collapse together.

use percent_encoding::percent_decode_str;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::fmt;
use url::Url;

/// Default longest path segment accepted before a URL is rejected.
pub const DEFAULT_MAX_SEGMENT_LEN: usize = 100;
/// Default highest number of `-` accepted in one path segment.
pub const DEFAULT_MAX_SEGMENT_DASHES: usize = 3;

/// Shape limits applied to every non-empty path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLimits {
    pub max_segment_len: usize,
    pub max_segment_dashes: usize,
}

impl Default for KeyLimits {
    fn default() -> Self {
        Self {
            max_segment_len: DEFAULT_MAX_SEGMENT_LEN,
            max_segment_dashes: DEFAULT_MAX_SEGMENT_DASHES,
        }
    }
}

impl KeyLimits {
    /// True if any non-empty segment of `path` is too long or has too many dashes.
    ///
    /// Segments are percent-decoded before measuring, so `%C3%A9` is one
    /// character and `%2D` is a dash.
    pub fn rejects_path(&self, path: &str) -> bool {
        path.split('/').filter(|s| !s.is_empty()).any(|segment| {
            let decoded = percent_decode_str(segment).decode_utf8_lossy();
            decoded.chars().count() > self.max_segment_len
                || decoded.matches('-').count() > self.max_segment_dashes
        })
    }
}

/// Why no key could be derived for a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// The string is not an absolute URL.
    #[error("unparseable URL")]
    Unparseable,
    /// The URL has no hostname (e.g. `file:///etc/passwd`).
    #[error("empty hostname")]
    EmptyHost,
    /// A path segment breaks the configured [`KeyLimits`].
    #[error("path segment too long or too dashed")]
    HighEntropyPath,
}

/// Fingerprint of a request template: lowercase hex SHA-256.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Distinct query parameter names, sorted and joined with `-`.
pub fn parameter_signature(url: &Url) -> String {
    let names: BTreeSet<String> = url.query_pairs().map(|(name, _)| name.into_owned()).collect();
    names.into_iter().collect::<Vec<_>>().join("-")
}

/// Derives the canonical key of an already parsed URL.
pub fn build_key(url: &Url, limits: &KeyLimits) -> Result<CanonicalKey, KeyError> {
    let host = match url.host_str() {
        Some(h) if !h.is_empty() => h,
        _ => return Err(KeyError::EmptyHost),
    };
    let path = url.path();
    if limits.rejects_path(path) {
        return Err(KeyError::HighEntropyPath);
    }

    let template = format!("{}-{}-{}", host, path, parameter_signature(url));
    let digest = Sha256::digest(template.as_bytes());
    Ok(CanonicalKey(hex::encode(digest)))
}

/// Parses `raw` and derives its canonical key.
pub fn key_for(raw: &str, limits: &KeyLimits) -> Result<CanonicalKey, KeyError> {
    let url = Url::parse(raw).map_err(|_| KeyError::Unparseable)?;
    build_key(&url, limits)
}
