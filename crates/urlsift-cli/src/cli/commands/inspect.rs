//! `urlsift inspect <url>...` – explain the verdict for individual URLs.

use anyhow::Result;
use urlsift_core::canonical_key::key_for;
use urlsift_core::classify::{is_static_url, noise_kind};
use urlsift_core::config::SiftConfig;

pub fn run_inspect(cfg: &SiftConfig, urls: &[String]) -> Result<()> {
    let limits = cfg.key_limits();
    for url in urls {
        let noise = noise_kind(url).map_or("-", |k| k.as_str());
        let key = match key_for(url, &limits) {
            Ok(k) => k.to_string(),
            Err(e) => format!("none ({e})"),
        };
        println!("{url}");
        println!("  {:<8} {}", "static", if is_static_url(url) { "yes" } else { "no" });
        println!("  {:<8} {}", "noise", noise);
        println!("  {:<8} {}", "key", key);
    }
    Ok(())
}
