use std::collections::BTreeSet;
use std::convert::Infallible;
use std::str::FromStr;

use crate::types::FetchKey;

/// Normalized set of requested field names.
///
/// Built from the comma-separated `fields` query parameter: entries are
/// trimmed, empties dropped, duplicates collapsed. Unknown names are kept
/// verbatim; they simply never enable a fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet(BTreeSet<String>);

impl FieldSet {
    /// An empty field set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Parse a comma-separated list such as `"details, comments,,transcript"`.
    #[must_use]
    pub fn parse(csv: &str) -> Self {
        csv.split(',').collect()
    }

    /// Add a field name, returning the updated set.
    #[must_use]
    pub fn with(mut self, name: &str) -> Self {
        let name = name.trim();
        if !name.is_empty() {
            self.0.insert(name.to_string());
        }
        self
    }

    /// True if the named field was requested.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// True if the field enabling `key` was requested.
    #[must_use]
    pub fn requests(&self, key: FetchKey) -> bool {
        key.field_name().is_some_and(|name| self.contains(name))
    }

    /// True if no field names were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate field names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromStr for FieldSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<'a> FromIterator<&'a str> for FieldSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}
