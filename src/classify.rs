//! Page-state classification and result-count extraction.
//!
//! Everything here works on the raw markup with substring tests and one
//! anchored regex; no DOM is built.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::patterns::{
    CAPTCHA_MARKER, MILLION_SUFFIX, NOT_FOUND_MARKER, PAGE_COUNT, PAGINATION_MARKER,
    THOUSAND_SUFFIX,
};
use crate::result::PageState;

/// True iff the page carries the "nothing found for your query" text.
#[must_use]
pub fn is_not_found(html: &str) -> bool {
    html.contains(NOT_FOUND_MARKER)
}

/// True iff the pagination block is present.
#[must_use]
pub fn has_pagination(html: &str) -> bool {
    html.contains(PAGINATION_MARKER)
}

/// True iff the page is the CAPTCHA checkpoint.
#[must_use]
pub fn is_captcha(html: &str) -> bool {
    html.contains(CAPTCHA_MARKER)
}

/// Classify the page. A checkpoint takes precedence over everything else.
#[must_use]
pub fn page_state(html: &str) -> PageState {
    if is_captcha(html) {
        PageState::Captcha
    } else if is_not_found(html) {
        PageState::NotFound
    } else {
        PageState::Results
    }
}

/// Total number of results the page reports.
///
/// `Ok(Some(0))` on a not-found page, `Ok(None)` when the count blob is
/// missing (undetermined, which callers must not read as zero).
///
/// # Errors
/// `Error::ParseError` when the count phrase does not start with an integer
/// or the scaled count overflows.
pub fn page_count(html: &str) -> Result<Option<u64>> {
    if is_not_found(html) {
        return Ok(Some(0));
    }

    let Some(phrase) = count_phrase(html) else {
        debug!("result count blob not found");
        return Ok(None);
    };

    parse_count_phrase(phrase).map(Some)
}

/// Raw count phrase captured from the page JSON.
fn count_phrase(html: &str) -> Option<&str> {
    PAGE_COUNT
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Turn `"2 млн "` into `2_000_000`.
///
/// The first whitespace-delimited token is the number; `&nbsp;` entities and
/// no-break spaces count as whitespace. The magnitude word may appear
/// anywhere in the phrase.
pub(crate) fn parse_count_phrase(phrase: &str) -> Result<u64> {
    let normalized = phrase.replace("&nbsp;", " ");
    let token = normalized
        .split(|c: char| c.is_whitespace())
        .find(|t| !t.is_empty())
        .unwrap_or_default();

    let base: u64 = token.parse().map_err(|_| {
        warn!(phrase, "result count does not start with an integer");
        Error::ParseError(format!("unparsable result count: {phrase:?}"))
    })?;

    let multiplier = if normalized.contains(THOUSAND_SUFFIX) {
        1_000
    } else if normalized.contains(MILLION_SUFFIX) {
        1_000_000
    } else {
        1
    };

    base.checked_mul(multiplier)
        .ok_or_else(|| Error::ParseError(format!("result count overflows: {phrase:?}")))
}
