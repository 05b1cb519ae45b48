//! Snippet extraction from the result list.
//!
//! Position numbering is asymmetric on purpose: advertisements are dropped
//! without consuming a position, while non-organic rich cards (images,
//! video, ...) consume one but emit nothing.

use tracing::{debug, warn};

use crate::dom::DomAdapter;
use crate::error::{Error, Result};
use crate::options::{Options, SnippetField};
use crate::patterns::{
    AD_CLASS, BODY_SELECTORS, PLAIN_CLASS, SAVED_COPY_SELECTOR, SERP_ITEM_SELECTOR, TITLE_CLASS,
    WHITESPACE_NORMALIZE,
};
use crate::result::Snippet;
use crate::url_utils::{decode_infected_redirect, domain_without_scheme, is_maps_url};

/// What to do with one result item.
enum ItemKind<'a, D: DomAdapter + 'a> {
    /// Advertisement: no position, no snippet.
    Ad,
    /// Rich card that is not a map: consumes a position only.
    RichCard,
    /// Emitted as a snippet.
    Organic {
        link: D::Node<'a>,
        url: String,
        is_map: bool,
    },
}

/// Extract snippets from every `.serp-item` under `.serp-list`.
///
/// Fails fast: the first malformed item aborts the whole extraction.
///
/// # Errors
/// `Error::ParseError` for an item without a proper title heading or link,
/// `Error::EncodingError` when a URL cannot be decoded or normalized.
pub fn extract_snippets<D: DomAdapter>(dom: &D, options: &Options) -> Result<Vec<Snippet>> {
    let root = dom.root();
    let items = dom.query_all(&root, SERP_ITEM_SELECTOR);
    debug!(items = items.len(), "scanning result items");

    let mut snippets = Vec::with_capacity(items.len());
    let mut position: u32 = 0;

    for (index, item) in items.iter().enumerate() {
        match classify_item(dom, item, index)? {
            ItemKind::Ad => {
                debug!(index, "skipping advertisement");
            }
            ItemKind::RichCard => {
                position += 1;
                debug!(index, position, "skipping rich card");
            }
            ItemKind::Organic { link, url, is_map } => {
                position += 1;
                snippets.push(build_snippet(dom, item, &link, url, is_map, position, options)?);
            }
        }
    }

    Ok(snippets)
}

fn classify_item<'a, D: DomAdapter>(
    dom: &'a D,
    item: &D::Node<'a>,
    index: usize,
) -> Result<ItemKind<'a, D>> {
    if dom.class_contains(item, AD_CLASS) {
        return Ok(ItemKind::Ad);
    }

    let Some(heading) = dom.query_first(item, "h2") else {
        warn!(index, "result item without heading");
        return Err(Error::ParseError(format!("result item {index} has no h2 heading")));
    };
    if !dom.class_contains(&heading, TITLE_CLASS) {
        warn!(index, "result heading without title class");
        return Err(Error::ParseError(format!(
            "result item {index} heading lacks the {TITLE_CLASS} class"
        )));
    }

    let link = dom
        .first_child_tag(&heading, "a")
        .ok_or_else(|| Error::ParseError(format!("result item {index} heading has no link")))?;
    let url = dom
        .attribute(&link, "href")
        .ok_or_else(|| Error::ParseError(format!("result item {index} link has no href")))?;

    let is_map = if dom.class_contains(item, PLAIN_CLASS) {
        false
    } else if is_maps_url(&url) {
        true
    } else {
        return Ok(ItemKind::RichCard);
    };

    Ok(ItemKind::Organic { link, url, is_map })
}

fn build_snippet<'a, D: DomAdapter>(
    dom: &'a D,
    item: &D::Node<'a>,
    link: &D::Node<'a>,
    url: String,
    is_map: bool,
    position: u32,
    options: &Options,
) -> Result<Snippet> {
    let (url, is_infected) = match decode_infected_redirect(&url)? {
        Some(target) => (target, true),
        None => (url, false),
    };
    let domain = domain_without_scheme(&url)?;

    let title = options
        .wants(SnippetField::Title)
        .then(|| normalized_text(dom, link));

    let body = options.wants(SnippetField::Body).then(|| {
        BODY_SELECTORS
            .iter()
            .find_map(|selector| dom.query_first(item, selector))
            .map(|container| normalized_text(dom, &container))
            .unwrap_or_default()
    });

    let saved_copy_url = dom
        .query_first(item, SAVED_COPY_SELECTOR)
        .and_then(|popup| dom.query_first(&popup, "a"))
        .and_then(|anchor| dom.attribute(&anchor, "href"));

    Ok(Snippet {
        domain,
        position,
        url,
        is_map,
        title,
        body,
        is_infected,
        saved_copy_url,
    })
}

/// Rendered text with whitespace runs collapsed and ends trimmed.
fn normalized_text<'a, D: DomAdapter>(dom: &'a D, node: &D::Node<'a>) -> String {
    WHITESPACE_NORMALIZE
        .replace_all(&dom.text_content(node), " ")
        .trim()
        .to_string()
}
