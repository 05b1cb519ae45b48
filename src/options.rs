//! Configuration options for snippet extraction.
//!
//! `Options` selects which snippet fields are populated. Domain, URL,
//! position and the flags are always filled in; only title and body
//! extraction is skipped when not requested, since those walk the DOM.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A snippet field a caller may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SnippetField {
    Title,
    Body,
    Url,
    Domain,
    Position,
    MapFlag,
    InfectedFlag,
    SavedCopy,
}

impl SnippetField {
    /// Every recognized field.
    pub const ALL: [Self; 8] = [
        Self::Title,
        Self::Body,
        Self::Url,
        Self::Domain,
        Self::Position,
        Self::MapFlag,
        Self::InfectedFlag,
        Self::SavedCopy,
    ];

    /// Short key used in the serialized snippet record.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Title => "t",
            Self::Body => "s",
            Self::Url => "u",
            Self::Domain => "d",
            Self::Position => "p",
            Self::MapFlag => "m",
            Self::InfectedFlag => "i",
            Self::SavedCopy => "savedCopy",
        }
    }
}

impl fmt::Display for SnippetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SnippetField {
    type Err = Error;

    /// Accepts both the short record keys (`t`, `s`, ...) and long names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "t" | "title" => Ok(Self::Title),
            "s" | "body" => Ok(Self::Body),
            "u" | "url" => Ok(Self::Url),
            "d" | "domain" => Ok(Self::Domain),
            "p" | "position" => Ok(Self::Position),
            "m" | "map" | "map-flag" => Ok(Self::MapFlag),
            "i" | "infected" | "infected-flag" => Ok(Self::InfectedFlag),
            "savedCopy" | "saved-copy" => Ok(Self::SavedCopy),
            other => Err(Error::ParseError(format!("unknown snippet field: {other:?}"))),
        }
    }
}

/// Configuration options for SERP extraction.
///
/// # Example
///
/// ```rust
/// use yandex_serp::{Options, SnippetField};
///
/// // Skip title and body extraction entirely
/// let options = Options {
///     snippet_fields: [SnippetField::Url, SnippetField::Position].into(),
/// };
/// assert!(!options.wants(SnippetField::Title));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Fields to populate on each snippet.
    ///
    /// Default: domain, position, url, title, body and map flag.
    pub snippet_fields: BTreeSet<SnippetField>,
}

impl Options {
    /// Build options from a comma-separated field list such as `"d,p,u,t"`.
    ///
    /// An empty list requests no optional fields.
    pub fn from_field_list(list: &str) -> Result<Self, Error> {
        let snippet_fields = list
            .split(',')
            .filter(|tag| !tag.trim().is_empty())
            .map(SnippetField::from_str)
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self { snippet_fields })
    }

    /// Options requesting every field.
    #[must_use]
    pub fn all_fields() -> Self {
        Self {
            snippet_fields: SnippetField::ALL.into(),
        }
    }

    /// Options requesting no optional fields.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            snippet_fields: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn wants(&self, field: SnippetField) -> bool {
        self.snippet_fields.contains(&field)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            snippet_fields: [
                SnippetField::Domain,
                SnippetField::Position,
                SnippetField::Url,
                SnippetField::Title,
                SnippetField::Body,
                SnippetField::MapFlag,
            ]
            .into(),
        }
    }
}
