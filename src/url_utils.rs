//! URL Utility Functions
//!
//! Normalization of result links: bare-domain extraction, infected-site
//! redirect unwrapping and maps-service detection.

use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::patterns::{INFECTED_REDIRECT, MAPS_URL_PREFIXES};

/// Check if a string is a valid absolute URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    // Must start with http:// or https://
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => {
            if url.host().is_some() {
                (true, Some(url))
            } else {
                (false, None)
            }
        }
        Err(_) => (false, None),
    }
}

/// Reduce a URL to its bare domain.
///
/// Strips scheme, credentials, port, path and a leading `www.`, lowercases
/// the host and turns punycode labels back into Unicode.
///
/// # Errors
/// Returns `Error::EncodingError` when a punycode label cannot be decoded.
pub fn domain_without_scheme(url_str: &str) -> Result<String> {
    let trimmed = url_str.trim();

    let host = match is_absolute_url(trimmed) {
        (true, Some(url)) => url.host_str().map(str::to_string),
        _ => None,
    }
    .unwrap_or_else(|| raw_host(trimmed).to_string());

    let host = host.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host).trim_end_matches('.');

    host_to_unicode(host)
}

/// Host part of a URL the `url` crate refused, cut out by hand.
fn raw_host(s: &str) -> &str {
    let rest = s
        .split_once("://")
        .map_or_else(|| s.strip_prefix("//").unwrap_or(s), |(_, rest)| rest);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    host_port.split(':').next().unwrap_or(host_port)
}

fn host_to_unicode(host: &str) -> Result<String> {
    if !host.split('.').any(|label| label.starts_with("xn--")) {
        return Ok(host.to_string());
    }

    let unicode = url::quirks::domain_to_unicode(host);
    if unicode.is_empty() {
        return Err(Error::EncodingError(format!("invalid punycode host: {host}")));
    }
    Ok(unicode)
}

/// Unwrap an infected-site interstitial link.
///
/// Returns the percent-decoded target when `url_str` is a
/// `/search/infected?url=...` redirect, `None` for any other link.
///
/// # Errors
/// Returns `Error::EncodingError` when the decoded target is not valid UTF-8.
pub fn decode_infected_redirect(url_str: &str) -> Result<Option<String>> {
    if !url_str.contains("infected") {
        return Ok(None);
    }

    let Some(encoded) = INFECTED_REDIRECT.captures(url_str).and_then(|c| c.get(1)) else {
        debug!(url = url_str, "link mentions infected but is not a redirect");
        return Ok(None);
    };

    let decoded = urlencoding::decode(encoded.as_str())
        .map_err(|e| Error::EncodingError(format!("redirect target is not UTF-8: {e}")))?;
    Ok(Some(decoded.into_owned()))
}

/// Whether the link points at the maps service.
#[must_use]
pub fn is_maps_url(url_str: &str) -> bool {
    MAPS_URL_PREFIXES.iter().any(|prefix| url_str.starts_with(prefix))
}
