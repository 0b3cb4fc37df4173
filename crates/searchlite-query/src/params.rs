//! Wire vocabulary for the enumerated search parameters.
//!
//! Each closed enum maps one-to-one onto the service's string tags; an
//! unknown tag decodes to absence, never to an error, so newer service
//! values degrade gracefully in older clients.

use searchlite_core::codec::{decode_bool, decode_string_list, decode_uint, encode_bool};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the words of the full-text query are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryType {
    /// Every word matches as a prefix.
    PrefixAll,
    /// Only the last word matches as a prefix (service default).
    PrefixLast,
    /// No prefix matching at all.
    PrefixNone,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::PrefixAll => "prefixAll",
            QueryType::PrefixLast => "prefixLast",
            QueryType::PrefixNone => "prefixNone",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "prefixAll" => Some(Self::PrefixAll),
            "prefixLast" => Some(Self::PrefixLast),
            "prefixNone" => Some(Self::PrefixNone),
            _ => None,
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typo-tolerance behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypoTolerance {
    #[serde(rename = "true")]
    Enabled,
    #[serde(rename = "false")]
    Disabled,
    /// Keep only hits with the minimum typo count found.
    #[serde(rename = "min")]
    Min,
    /// Hits with typos are excluded whenever exact matches exist.
    #[serde(rename = "strict")]
    Strict,
}

impl TypoTolerance {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypoTolerance::Enabled => "true",
            TypoTolerance::Disabled => "false",
            TypoTolerance::Min => "min",
            TypoTolerance::Strict => "strict",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "true" => Some(Self::Enabled),
            "false" => Some(Self::Disabled),
            "min" => Some(Self::Min),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

impl fmt::Display for TypoTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which query words are dropped when a search returns nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RemoveWordsIfNoResults {
    None,
    LastWords,
    FirstWords,
    AllOptional,
}

impl RemoveWordsIfNoResults {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoveWordsIfNoResults::None => "none",
            RemoveWordsIfNoResults::LastWords => "lastWords",
            RemoveWordsIfNoResults::FirstWords => "firstWords",
            RemoveWordsIfNoResults::AllOptional => "allOptional",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "lastWords" => Some(Self::LastWords),
            "firstWords" => Some(Self::FirstWords),
            "allOptional" => Some(Self::AllOptional),
            _ => None,
        }
    }
}

impl fmt::Display for RemoveWordsIfNoResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact-match ranking behavior for single-word queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExactOnSingleWordQuery {
    None,
    Word,
    Attribute,
}

impl ExactOnSingleWordQuery {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExactOnSingleWordQuery::None => "none",
            ExactOnSingleWordQuery::Word => "word",
            ExactOnSingleWordQuery::Attribute => "attribute",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "word" => Some(Self::Word),
            "attribute" => Some(Self::Attribute),
            _ => None,
        }
    }
}

impl fmt::Display for ExactOnSingleWordQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Word forms counted as exact matches by the `exact` ranking criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlternativesAsExact {
    IgnorePlurals,
    SingleWordSynonym,
    MultiWordsSynonym,
}

impl AlternativesAsExact {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlternativesAsExact::IgnorePlurals => "ignorePlurals",
            AlternativesAsExact::SingleWordSynonym => "singleWordSynonym",
            AlternativesAsExact::MultiWordsSynonym => "multiWordsSynonym",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ignorePlurals" => Some(Self::IgnorePlurals),
            "singleWordSynonym" => Some(Self::SingleWordSynonym),
            "multiWordsSynonym" => Some(Self::MultiWordsSynonym),
            _ => None,
        }
    }
}

impl fmt::Display for AlternativesAsExact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stop-word removal: a blanket toggle or an explicit language list.
///
/// The wire form is ambiguous — `"true"` could be a one-element language
/// list — so decoding tries the boolean shape first and the language list
/// second. That order is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveStopWords {
    /// Apply (or don't) stop-word removal for all supported languages.
    All(bool),
    /// Apply it for an explicit list of ISO language codes.
    Selected(Vec<String>),
}

impl RemoveStopWords {
    pub(crate) fn to_wire(&self) -> String {
        match self {
            RemoveStopWords::All(enabled) => encode_bool(*enabled),
            RemoveStopWords::Selected(languages) => languages.join(","),
        }
    }

    pub(crate) fn from_wire(raw: &str) -> Self {
        match decode_bool(raw) {
            Some(enabled) => RemoveStopWords::All(enabled),
            None => RemoveStopWords::Selected(decode_string_list(raw)),
        }
    }
}

/// Search radius for around queries: an explicit distance or no radius
/// filtering at all.
///
/// `"all"` is matched before the unsigned parse when decoding, and the
/// explicit variant always encodes its decimal digits, so the sentinel
/// can only ever come from [`AroundRadius::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AroundRadius {
    /// Radius in meters.
    Explicit(u64),
    /// Disable radius filtering (sort by distance only).
    All,
}

impl AroundRadius {
    pub(crate) fn to_wire(&self) -> String {
        match self {
            AroundRadius::Explicit(meters) => meters.to_string(),
            AroundRadius::All => "all".to_string(),
        }
    }

    pub(crate) fn from_wire(raw: &str) -> Option<Self> {
        if raw == "all" {
            return Some(AroundRadius::All);
        }
        decode_uint(raw).map(AroundRadius::Explicit)
    }
}
