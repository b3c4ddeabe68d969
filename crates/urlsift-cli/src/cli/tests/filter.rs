//! Tests for the filter subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_filter_plain() {
    match parse(&["urlsift", "filter", "urls.txt", "out/urls.txt"]) {
        CliCommand::Filter {
            src,
            dst,
            json_field,
        } => {
            assert_eq!(src, Path::new("urls.txt"));
            assert_eq!(dst, Path::new("out/urls.txt"));
            assert!(json_field.is_none());
        }
        _ => panic!("expected Filter"),
    }
}

#[test]
fn cli_parse_filter_json_field() {
    match parse(&[
        "urlsift",
        "filter",
        "crawl.jsonl",
        "out.jsonl",
        "--json-field",
        "url",
    ]) {
        CliCommand::Filter {
            src, json_field, ..
        } => {
            assert_eq!(src, Path::new("crawl.jsonl"));
            assert_eq!(json_field.as_deref(), Some("url"));
        }
        _ => panic!("expected Filter with --json-field"),
    }
}

#[test]
fn cli_parse_filter_requires_destination() {
    assert!(Cli::try_parse_from(["urlsift", "filter", "urls.txt"]).is_err());
}
