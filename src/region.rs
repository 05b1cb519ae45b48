//! Search region extraction.

use crate::dom::DomAdapter;
use crate::error::{Error, Result};
use crate::patterns::REGION_INPUT_SELECTOR;

/// Region code from the hidden `rstr` input, or `default` when absent.
///
/// The markup sometimes stores the code negated (`-213`); the sign is
/// dropped so the result is always the magnitude.
///
/// # Errors
/// `Error::ParseError` when the input exists but its value is not a number.
pub fn extract_region_code<D: DomAdapter>(dom: &D, default: u64) -> Result<u64> {
    let root = dom.root();
    let Some(input) = dom.query_first(&root, REGION_INPUT_SELECTOR) else {
        return Ok(default);
    };

    let raw = dom.attribute(&input, "value").unwrap_or_default();
    raw.trim()
        .trim_start_matches('-')
        .parse()
        .map_err(|_| Error::ParseError(format!("invalid region code: {raw:?}")))
}
