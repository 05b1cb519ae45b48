//! Compiled regex patterns, marker strings and CSS selectors for SERP extraction.
//!
//! All patterns are compiled once on first use with `LazyLock` and never
//! mutated afterwards. Each one sits behind a named extraction function in
//! the module that uses it, so a pattern can follow page-format drift
//! without touching the filtering logic.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Page State Markers
// =============================================================================

/// Text shown instead of results when the query matched nothing.
pub const NOT_FOUND_MARKER: &str = "По вашему запросу ничего не нашлось";

/// Pagination block that only renders when more result pages exist.
pub const PAGINATION_MARKER: &str = r#"<span class="pager__group">"#;

/// Substring present on the anti-robot checkpoint page.
pub const CAPTCHA_MARKER: &str = "checkcaptcha";

// =============================================================================
// Regex Patterns
// =============================================================================

/// Result count embedded in the page JSON, e.g.
/// `found":"&mdash;&nbsp;2 млн ответов`.
///
/// Anchored at the document start and lazy, so only the first blob counts.
pub static PAGE_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)\A.*?found":"&mdash;&nbsp;(.*?)отв"#).expect("PAGE_COUNT regex")
});

/// Interstitial redirect for sites flagged as infected.
pub static INFECTED_REDIRECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/search/infected\?url=([^&#]+)").expect("INFECTED_REDIRECT regex")
});

/// Challenge image on the checkpoint page.
pub static CAPTCHA_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<img class="image form__captcha".*?src="([^"]+)""#)
        .expect("CAPTCHA_IMAGE regex")
});

/// Matches runs of whitespace for text normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

// =============================================================================
// Magnitude Suffixes
// =============================================================================

/// "thousand" unit in the result count phrase.
pub const THOUSAND_SUFFIX: &str = "тыс";

/// "million" unit in the result count phrase.
pub const MILLION_SUFFIX: &str = "млн";

// =============================================================================
// Result Item Markup
// =============================================================================

/// Result items inside the result list.
pub const SERP_ITEM_SELECTOR: &str = ".serp-list .serp-item";

/// Class fragment marking an advertisement item.
pub const AD_CLASS: &str = "serp-adv";

/// Class fragment marking a plain text result.
pub const PLAIN_CLASS: &str = "serp-item_plain_yes";

/// Class fragment the result heading must carry.
pub const TITLE_CLASS: &str = "serp-item__title";

/// URL prefixes of the maps service.
pub const MAPS_URL_PREFIXES: &[&str] = &["http://maps.yandex.ru", "https://maps.yandex.ru"];

/// Body text containers, probed in priority order.
pub const BODY_SELECTORS: &[&str] = &[
    r#"div[class*="serp-item__text"]"#,
    r#"div[class*="serp-item__data"]"#,
    r#"div[class*="social-snippet2__text"]"#,
];

/// Popup holding the "saved copy" link.
pub const SAVED_COPY_SELECTOR: &str = r#"div[class*="popup2"]"#;

/// Hidden input carrying the search region.
pub const REGION_INPUT_SELECTOR: &str = r#"input[name="rstr"]"#;
