//! The untyped parameter store and its wire form.
//!
//! The store is the single source of truth: a name-to-string mapping with
//! no duplicate names. Absence of a key means "use the service default",
//! never an explicit empty value. Everything typed is layered on top.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An unordered mapping from parameter name to string value.
///
/// Backed by a `BTreeMap` so that [`build`](Self::build) walks the entries
/// in byte order for free — the wire form must be deterministic because
/// collaborators cache and sign it. Any string is a legal parameter name;
/// names the typed façade does not model pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterStore {
    params: BTreeMap<String, String>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Insert or overwrite `name`; `None` removes it. Idempotent.
    pub fn set(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match value {
            Some(value) => {
                self.params.insert(name, value);
            }
            None => {
                self.params.remove(&name);
            }
        }
    }

    /// Remove `name`, returning the previous value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.params.remove(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate entries in the serialization order (sorted by name).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize into the canonical query string.
    ///
    /// Entries sorted by name, each side percent-encoded, joined as
    /// `name=value` pairs with `&`. Two equal stores always produce the
    /// same string regardless of insertion history.
    pub fn build(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.params {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(&urlencoding::encode(name));
            out.push('=');
            out.push_str(&urlencoding::encode(value));
        }
        out
    }

    /// Parse a raw query string into this store, merging with what is
    /// already there.
    ///
    /// Per component: `name=value` inserts (last write wins, left to
    /// right; an empty decoded value stores the empty string), a bare
    /// `name` with no `=` removes that key, and anything else — several
    /// `=` signs, an empty component, undecodable percent escapes — is
    /// skipped without failing the rest of the string. The bare-name
    /// removal is deliberately asymmetric with `build`, which always
    /// emits `name=value`.
    pub fn parse_into(&mut self, query_string: &str) {
        for component in query_string.split('&') {
            if component.is_empty() {
                continue;
            }
            let fields: Vec<&str> = component.split('=').collect();
            match fields.as_slice() {
                [name] => match urlencoding::decode(name) {
                    Ok(name) => {
                        self.params.remove(name.as_ref());
                    }
                    Err(_) => {
                        tracing::debug!(component = %component, "skipping undecodable query component");
                    }
                },
                [name, value] => match (urlencoding::decode(name), urlencoding::decode(value)) {
                    (Ok(name), Ok(value)) => {
                        self.params.insert(name.into_owned(), value.into_owned());
                    }
                    _ => {
                        tracing::debug!(component = %component, "skipping undecodable query component");
                    }
                },
                _ => {
                    tracing::debug!(component = %component, "skipping malformed query component");
                }
            }
        }
    }

    /// Parse a raw query string into a fresh store.
    pub fn parse(query_string: &str) -> Self {
        let mut store = Self::new();
        store.parse_into(query_string);
        store
    }
}

impl From<BTreeMap<String, String>> for ParameterStore {
    fn from(params: BTreeMap<String, String>) -> Self {
        Self { params }
    }
}

impl FromIterator<(String, String)> for ParameterStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}
