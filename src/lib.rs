//! # yandex-serp
//!
//! Structured result extraction from Yandex search result pages.
//!
//! Takes the HTML of a results page and produces a stable record: the total
//! result count, and the organic snippets with their 1-based positions,
//! decoded URLs and bare domains. It also recognizes not-found pages and
//! CAPTCHA checkpoints, and reads the search region.
//!
//! ## Quick Start
//!
//! ```rust
//! use yandex_serp::{parse_serp, SerpDocument};
//!
//! let html = r#"<html><script>{"found":"&mdash;&nbsp;12 тыс. ответов"}</script>
//! <ul class="serp-list">
//!   <li class="serp-item serp-item_plain_yes">
//!     <h2 class="serp-item__title"><a href="https://www.rust-lang.org/">Rust</a></h2>
//!     <div class="serp-item__text">A language empowering everyone.</div>
//!   </li>
//! </ul></html>"#;
//!
//! let serp = parse_serp(html)?;
//! assert_eq!(serp.page_count, Some(12_000));
//! assert_eq!(serp.snippets[0].domain, "rust-lang.org");
//! assert_eq!(serp.snippets[0].position, 1);
//! # Ok::<(), yandex_serp::Error>(())
//! ```
//!
//! ## Failure modes
//!
//! - A not-found page is a valid zero-result record, not an error.
//! - An unreadable result count is `None`, never zero.
//! - A normal page without snippets is [`Error::EmptySerp`].
//! - Malformed result items abort extraction with [`Error::ParseError`].

mod captcha;
mod classify;
mod document;
mod error;
mod options;
mod patterns;
mod region;
mod result;
mod snippets;

/// DOM adapter trait and its `dom_query` implementation.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// URL normalization for result links.
pub mod url_utils;

// Public API - re-exports
pub use captcha::form_values;
pub use document::SerpDocument;
pub use error::{Error, Result};
pub use options::{Options, SnippetField};
pub use result::{CaptchaChallenge, PageState, SerpResult, Snippet};
pub use snippets::extract_snippets;

/// Extracts page count and snippets using the default snippet fields.
///
/// Shorthand for `SerpDocument::new(html).serp()`.
pub fn parse_serp(html: &str) -> Result<SerpResult> {
    SerpDocument::new(html).serp()
}

/// Extracts page count and snippets with custom options.
///
/// # Example
///
/// ```rust
/// use yandex_serp::{parse_serp_with_options, Options};
///
/// let html = r#"<ul class="serp-list"><li class="serp-item serp-item_plain_yes">
///   <h2 class="serp-item__title"><a href="http://example.com/">Example</a></h2>
/// </li></ul>"#;
/// let serp = parse_serp_with_options(html, &Options::minimal())?;
/// assert_eq!(serp.page_count, None);
/// assert_eq!(serp.snippets[0].title, None);
/// # Ok::<(), yandex_serp::Error>(())
/// ```
pub fn parse_serp_with_options(html: &str, options: &Options) -> Result<SerpResult> {
    SerpDocument::with_options(html, options.clone()).serp()
}

/// Extracts page count and snippets from raw bytes, detecting the charset.
pub fn parse_serp_bytes(html: &[u8], options: &Options) -> Result<SerpResult> {
    SerpDocument::from_bytes(html, options.clone()).serp()
}
