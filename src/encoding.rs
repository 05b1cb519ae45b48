//! Character encoding detection and transcoding.
//!
//! Result pages arrive as bytes in UTF-8 or, on older mirrors, in the
//! Cyrillic windows-1251 code page. This module picks the charset and
//! converts to UTF-8 before any marker or pattern is applied.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1251};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;/]+)"#).expect("valid regex")
});

/// Only this many leading bytes are searched for a declaration.
const DECLARATION_WINDOW: usize = 1024;

/// Detect the character encoding of a result page.
///
/// Checked in order:
/// 1. Byte order mark
/// 2. `<meta charset>` or `http-equiv` declaration in the first 1024 bytes
/// 3. UTF-8, if the whole document is valid UTF-8
/// 4. windows-1251 otherwise
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = &html[..html.len().min(DECLARATION_WINDOW)];
    if let Some(encoding) = declared_charset(&String::from_utf8_lossy(head))
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return encoding;
    }

    if std::str::from_utf8(html).is_ok() {
        UTF_8
    } else {
        WINDOWS_1251
    }
}

/// Charset label from either meta declaration form.
fn declared_charset(head: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode page bytes to a UTF-8 string.
///
/// Lossy: undecodable sequences become U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use yandex_serp::encoding::transcode_to_utf8;
///
/// // "Поиск" in windows-1251, no declaration
/// let page = b"<title>\xcf\xee\xe8\xf1\xea</title>";
/// assert!(transcode_to_utf8(page).contains("Поиск"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    debug!(encoding = encoding.name(), bytes = html.len(), "decoding page");

    // decode() strips a matching BOM itself
    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
