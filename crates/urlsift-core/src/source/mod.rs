//! Input side: how a line of the source file becomes a candidate URL.
//!
//! Plain mode treats each trimmed line as the URL. JSON mode parses each
//! line as an object, reads one string field as the URL, and keeps the
//! original line for output.

mod record;

pub use record::{extract_record, SourceMode, SourceRecord};
