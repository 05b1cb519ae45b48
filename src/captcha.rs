//! CAPTCHA checkpoint extraction.
//!
//! Collects what an external solver needs to answer the challenge: the
//! image URL plus the form's action and fields, so the answer can be
//! resubmitted exactly as a browser would.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::classify::is_captcha;
use crate::dom::DomAdapter;
use crate::error::{Error, Result};
use crate::patterns::CAPTCHA_IMAGE;
use crate::result::CaptchaChallenge;

/// Input types a browser never submits as form values.
const NON_SUBMITTED_INPUT_TYPES: &[&str] = &["submit", "image", "reset", "file"];

/// Challenge image URL, the first one in the markup.
#[must_use]
pub fn captcha_image_url(html: &str) -> Option<&str> {
    CAPTCHA_IMAGE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Extract the challenge, or `None` when the page is not a checkpoint.
///
/// # Errors
/// `Error::CaptchaImageNotFound` when the checkpoint marker is present but
/// the image pattern does not match; `Error::ParseError` when the page has
/// no form.
pub fn extract_captcha<D: DomAdapter>(html: &str, dom: &D) -> Result<Option<CaptchaChallenge>> {
    if !is_captcha(html) {
        return Ok(None);
    }

    let Some(image_url) = captcha_image_url(html) else {
        warn!("checkpoint page with an unrecognized image layout");
        return Err(Error::CaptchaImageNotFound);
    };

    let root = dom.root();
    let form = dom
        .query_first(&root, "form")
        .ok_or_else(|| Error::ParseError("checkpoint page has no form".to_string()))?;

    let form_action = dom.attribute(&form, "action").unwrap_or_default();
    let form_data = form_values(dom, &form).into_iter().collect::<BTreeMap<_, _>>();
    debug!(fields = form_data.len(), action = %form_action, "captcha form collected");

    Ok(Some(CaptchaChallenge {
        image_url: image_url.to_string(),
        form_action,
        form_data,
    }))
}

/// Name/value pairs a browser would submit for `form`, in document order.
pub fn form_values<'a, D: DomAdapter>(dom: &'a D, form: &D::Node<'a>) -> Vec<(String, String)> {
    let mut values = Vec::new();

    for control in dom.query_all(form, "input, select, textarea") {
        let Some(name) = dom.attribute(&control, "name").filter(|n| !n.is_empty()) else {
            continue;
        };
        if dom.attribute(&control, "disabled").is_some() {
            continue;
        }

        match dom.tag_name(&control).as_deref() {
            Some("textarea") => values.push((name, dom.text_content(&control))),
            Some("select") => {
                for value in selected_options(dom, &control) {
                    values.push((name.clone(), value));
                }
            }
            _ => {
                if let Some(value) = input_value(dom, &control) {
                    values.push((name, value));
                }
            }
        }
    }

    values
}

fn input_value<'a, D: DomAdapter>(dom: &'a D, input: &D::Node<'a>) -> Option<String> {
    let kind = dom
        .attribute(input, "type")
        .map(|t| t.to_ascii_lowercase())
        .unwrap_or_default();

    if NON_SUBMITTED_INPUT_TYPES.contains(&kind.as_str()) {
        return None;
    }
    if kind == "checkbox" || kind == "radio" {
        dom.attribute(input, "checked")?;
        return Some(dom.attribute(input, "value").unwrap_or_else(|| "on".to_string()));
    }

    dom.attribute(input, "value")
}

/// Values of the selected options. A single-choice select with nothing
/// selected submits its first enabled option, or `""` when it has none.
fn selected_options<'a, D: DomAdapter>(dom: &'a D, select: &D::Node<'a>) -> Vec<String> {
    let options = dom.query_all(select, "option");
    let option_value = |option: &D::Node<'a>| {
        dom.attribute(option, "value")
            .unwrap_or_else(|| dom.text_content(option).trim().to_string())
    };

    let selected: Vec<String> = options
        .iter()
        .filter(|option| dom.attribute(option, "selected").is_some())
        .map(option_value)
        .collect();

    if dom.attribute(select, "multiple").is_some() {
        return selected;
    }
    let value = selected.into_iter().last().unwrap_or_else(|| {
        options
            .iter()
            .find(|option| dom.attribute(option, "disabled").is_none())
            .map(option_value)
            .unwrap_or_default()
    });
    vec![value]
}
