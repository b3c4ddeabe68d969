//! Static asset detection by file extension.

use once_cell::sync::Lazy;
use regex::Regex;

/// Extensions of assets that never carry an interesting request surface.
/// `.js` is deliberately absent: scripts are kept for endpoint mining.
const STATIC_EXTENSIONS: &[&str] = &[
    // images
    "png", "jpg", "jpeg", "gif", "bmp", "svg", "webp", "ico", "tif", "tiff", "avif", "heic",
    // fonts
    "woff", "woff2", "ttf", "otf", "eot",
    // stylesheets
    "css", "scss", "sass", "less",
    // audio
    "mp3", "wav", "ogg", "oga", "flac", "aac", "m4a", "wma",
    // video
    "mp4", "m4v", "webm", "avi", "mov", "mkv", "flv", "wmv", "mpg", "mpeg", "3gp",
];

/// Matches an extension at the end of the part of the URL before `?` or `#`.
static STATIC_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = STATIC_EXTENSIONS.join("|");
    Regex::new(&format!(r"(?i)^[^?#]*\.(?:{alternation})(?:[?#]|$)"))
        .expect("static extension pattern is valid")
});

/// True if `raw` points at an image, font, stylesheet, audio or video file.
///
/// Only the portion before the first `?` or `#` is considered, and the
/// comparison is case-insensitive.
pub fn is_static_url(raw: &str) -> bool {
    STATIC_RE.is_match(raw)
}
