//! URL classification: static assets and low-signal "noise" pages.
//!
//! Both predicates work on the raw URL string and never fail. Patterns are
//! compiled on first use and shared for the life of the process.

mod noise;
mod static_asset;

pub use noise::{is_noise_url, noise_kind, NoiseKind};
pub use static_asset::is_static_url;
