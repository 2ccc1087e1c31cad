//! Text decoding helpers used while taking URLs apart.
//!
//! These are deliberately narrow. HTML unescaping in particular is only
//! applied to hosts known to hand out entity-encoded URLs; running it over
//! every URL would mangle ones that contain a literal `&amp;` sequence.

use std::borrow::Cow;

use html_escape::decode_html_entities;

/// Undo HTML entity encoding, e.g. `&amp;` → `&`.
pub fn unescape_html(text: &str) -> Cow<'_, str> {
    decode_html_entities(text)
}

/// Percent-decode a URL path. Paths that do not decode to valid UTF-8 are
/// returned unchanged.
pub fn decode_path(path: &str) -> Cow<'_, str> {
    match urlencoding::decode(path) {
        Ok(decoded) => decoded,
        Err(_) => Cow::Borrowed(path),
    }
}

const IMAGE_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".gif"];

/// Whether a path names a still image or GIF file.
pub fn is_image_path(path: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| ends_with_ignore_case(path, ext))
}

pub fn ends_with_ignore_case(text: &str, suffix: &str) -> bool {
    text.len() >= suffix.len()
        && text.is_char_boundary(text.len() - suffix.len())
        && text[text.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
