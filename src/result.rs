//! Result types for extraction output.
//!
//! Field names are idiomatic Rust; serialization produces the compact legacy
//! record layout downstream consumers read (`pc`/`sn`, `d`/`p`/`u`/...).

use std::collections::BTreeMap;

use serde::ser::{Serialize, Serializer};

/// Classification of the page as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageState {
    /// Anti-robot checkpoint instead of results.
    Captcha,
    /// The query legitimately matched nothing.
    NotFound,
    /// A regular results page.
    Results,
}

/// One organic (or map) result entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snippet {
    /// Bare domain of `url`.
    pub domain: String,

    /// 1-based position, counting non-organic cards that were skipped.
    pub position: u32,

    /// Target URL, with infected-site redirects unwrapped.
    pub url: String,

    /// Whether the entry is a maps-service card.
    pub is_map: bool,

    /// Heading link text, when requested.
    pub title: Option<String>,

    /// Snippet text, when requested. Empty when the entry has no text block.
    pub body: Option<String>,

    /// Whether the link went through the infected-site interstitial.
    pub is_infected: bool,

    /// Link to the cached copy of the page.
    pub saved_copy_url: Option<String>,
}

/// Wire layout of a snippet. `d` and `domain` always carry the same value.
#[derive(serde::Serialize)]
struct SnippetRecord<'a> {
    d: &'a str,
    domain: &'a str,
    p: u32,
    u: &'a str,
    m: bool,
    t: Option<&'a str>,
    s: Option<&'a str>,
    i: bool,
    #[serde(rename = "savedCopy")]
    saved_copy: Option<&'a str>,
}

impl Serialize for Snippet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SnippetRecord {
            d: &self.domain,
            domain: &self.domain,
            p: self.position,
            u: &self.url,
            m: self.is_map,
            t: self.title.as_deref(),
            s: self.body.as_deref(),
            i: self.is_infected,
            saved_copy: self.saved_copy_url.as_deref(),
        }
        .serialize(serializer)
    }
}

/// Page count plus the ordered snippets of one results page.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct SerpResult {
    /// Total results reported by the page; `None` when it could not be read.
    #[serde(rename = "pc")]
    pub page_count: Option<u64>,

    /// Extracted entries in page order.
    #[serde(rename = "sn")]
    pub snippets: Vec<Snippet>,
}

impl SerpResult {
    /// The record of a page that legitimately found nothing.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            page_count: Some(0),
            snippets: Vec::new(),
        }
    }
}

/// Data an external solver needs to answer a CAPTCHA checkpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct CaptchaChallenge {
    /// Challenge image.
    #[serde(rename = "url")]
    pub image_url: String,

    /// Submit target of the challenge form, as written in the markup.
    pub form_action: String,

    /// Form fields to resubmit, hidden ones included. Last value wins.
    pub form_data: BTreeMap<String, String>,
}
