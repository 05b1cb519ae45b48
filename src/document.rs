//! The `SerpDocument` entry point.
//!
//! A document owns the decoded markup and the snippet options, nothing else.
//! Every query re-derives what it needs from the text; queries that need a
//! tree parse one with [`HtmlDom`] and drop it before returning.

use tracing::{debug, warn};

use crate::captcha;
use crate::classify;
use crate::dom::HtmlDom;
use crate::encoding;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::region;
use crate::result::{CaptchaChallenge, PageState, SerpResult, Snippet};
use crate::snippets;

/// A search results page ready for extraction.
///
/// Immutable after construction and `Send + Sync`, so one instance can be
/// queried from several threads at once.
///
/// # Example
///
/// ```rust
/// use yandex_serp::SerpDocument;
///
/// let page = SerpDocument::new("<p>По вашему запросу ничего не нашлось</p>");
/// let serp = page.serp()?;
/// assert_eq!(serp.page_count, Some(0));
/// assert!(serp.snippets.is_empty());
/// # Ok::<(), yandex_serp::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SerpDocument {
    content: String,
    options: Options,
}

impl SerpDocument {
    /// Wrap decoded markup, requesting the default snippet fields.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_options(content, Options::default())
    }

    /// Wrap decoded markup with explicit options.
    #[must_use]
    pub fn with_options(content: impl Into<String>, options: Options) -> Self {
        Self {
            content: content.into(),
            options,
        }
    }

    /// Decode raw page bytes (see [`encoding::transcode_to_utf8`]) and wrap them.
    #[must_use]
    pub fn from_bytes(bytes: &[u8], options: Options) -> Self {
        Self::with_options(encoding::transcode_to_utf8(bytes), options)
    }

    /// The decoded markup.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        classify::is_not_found(&self.content)
    }

    #[must_use]
    pub fn has_pagination(&self) -> bool {
        classify::has_pagination(&self.content)
    }

    #[must_use]
    pub fn page_state(&self) -> PageState {
        classify::page_state(&self.content)
    }

    /// Total result count; `None` when the page does not state it.
    pub fn page_count(&self) -> Result<Option<u64>> {
        classify::page_count(&self.content)
    }

    /// Organic and map snippets in page order.
    pub fn snippets(&self) -> Result<Vec<Snippet>> {
        let dom = HtmlDom::parse(&self.content);
        snippets::extract_snippets(&dom, &self.options)
    }

    /// Page count and snippets together.
    ///
    /// # Errors
    /// `Error::EmptySerp` when a page that is not a not-found page yields no
    /// snippets, plus anything [`Self::page_count`] or [`Self::snippets`]
    /// return.
    pub fn serp(&self) -> Result<SerpResult> {
        if self.is_not_found() {
            debug!("not-found page");
            return Ok(SerpResult::not_found());
        }

        let page_count = self.page_count()?;
        let snippets = self.snippets()?;

        if snippets.is_empty() {
            warn!(bytes = self.content.len(), "no snippets on a non-empty page");
            return Err(Error::EmptySerp);
        }

        debug!(?page_count, snippets = snippets.len(), "serp extracted");
        Ok(SerpResult {
            page_count,
            snippets,
        })
    }

    /// Search region code, or `default` when the page does not carry one.
    pub fn region_code(&self, default: u64) -> Result<u64> {
        let dom = HtmlDom::parse(&self.content);
        region::extract_region_code(&dom, default)
    }

    /// CAPTCHA challenge data, or `None` on a regular page.
    pub fn captcha(&self) -> Result<Option<CaptchaChallenge>> {
        if !classify::is_captcha(&self.content) {
            return Ok(None);
        }
        let dom = HtmlDom::parse(&self.content);
        captcha::extract_captcha(&self.content, &dom)
    }
}
