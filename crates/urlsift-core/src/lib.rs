//! urlsift core: narrows a recon URL corpus down to interesting endpoints.
//!
//! Static assets are dropped, noisy editorial/dated pages are reduced to one
//! per hostname, and URLs that share a request template (host, path and set
//! of query parameter names) are collapsed to the first one seen.

pub mod config;
pub mod logging;

pub mod canonical_key;
pub mod classify;
pub mod dedup;
pub mod engine;
pub mod source;

pub use engine::{filter_file, interesting_urls, FilterError, FilterReport};
