//! `urlsift filter <src> <dst>` – run the engine over a file.

use anyhow::Result;
use std::path::Path;
use urlsift_core::config::SiftConfig;
use urlsift_core::filter_file;
use urlsift_core::source::SourceMode;

pub fn run_filter(cfg: &SiftConfig, src: &Path, dst: &Path, json_field: Option<&str>) -> Result<()> {
    let mode = SourceMode::from_field(json_field);
    let report = filter_file(src, dst, &mode, &cfg.key_limits())?;
    println!("{report}");
    println!("Results saved in {}", dst.display());
    Ok(())
}
