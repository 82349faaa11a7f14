//! Result merger: outcomes keyed back to the planned request shape.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use vidscope_core::{FetchKey, Outcome, VidscopeError};

use crate::executor::FetchedValue;
use crate::planner::FetchTask;

/// Ordered mapping of output key to outcome, in planning order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    entries: Vec<(FetchKey, Outcome<FetchedValue>)>,
}

impl AggregateResult {
    /// Merge executor outcomes against the task list.
    ///
    /// Outcomes are matched to tasks by key; the task list alone decides
    /// entry order. A task without an outcome is recorded as a failure.
    #[must_use]
    pub fn merge(tasks: &[FetchTask], outcomes: Vec<(FetchKey, Outcome<FetchedValue>)>) -> Self {
        let mut by_key: BTreeMap<FetchKey, Outcome<FetchedValue>> = outcomes.into_iter().collect();
        let entries = tasks
            .iter()
            .map(|t| {
                let outcome = by_key.remove(&t.key()).unwrap_or_else(|| {
                    Outcome::Failure(VidscopeError::Other(format!(
                        "no outcome recorded for {}",
                        t.key()
                    )))
                });
                (t.key(), outcome)
            })
            .collect();
        Self { entries }
    }

    /// Entries in planning order.
    pub fn iter(&self) -> impl Iterator<Item = &(FetchKey, Outcome<FetchedValue>)> {
        self.entries.iter()
    }

    /// Output keys in planning order.
    pub fn keys(&self) -> impl Iterator<Item = FetchKey> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Outcome for a key, if it was planned.
    #[must_use]
    pub fn get(&self, key: FetchKey) -> Option<&Outcome<FetchedValue>> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, o)| o)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was planned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First failure in planning order.
    #[must_use]
    pub fn first_failure(&self) -> Option<(FetchKey, &VidscopeError)> {
        self.entries
            .iter()
            .find_map(|(k, o)| o.failure().map(|e| (*k, e)))
    }

    /// Unwrap every outcome into the JSON response body.
    ///
    /// # Errors
    /// Returns the first failure in planning order if any fetch failed.
    pub fn into_body(self) -> Result<AggregateBody, VidscopeError> {
        self.entries
            .into_iter()
            .map(|(k, o)| o.into_result().map(|v| (k, v)))
            .collect::<Result<Vec<_>, _>>()
            .map(AggregateBody)
    }
}

/// Successful aggregate response: a JSON object whose key order is the
/// planning order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateBody(Vec<(FetchKey, FetchedValue)>);

impl AggregateBody {
    /// Value for a key, if present.
    #[must_use]
    pub fn get(&self, key: FetchKey) -> Option<&FetchedValue> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Output keys in response order.
    pub fn keys(&self) -> impl Iterator<Item = FetchKey> + '_ {
        self.0.iter().map(|(k, _)| *k)
    }
}

impl Serialize for AggregateBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k.as_str(), v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::FetchOp;
    use serde_json::json;

    fn tasks() -> Vec<FetchTask> {
        vec![
            FetchTask::new(FetchOp::Search("q".into())),
            FetchTask::new(FetchOp::Details("v".into())),
            FetchTask::new(FetchOp::Channel("c".into())),
        ]
    }

    #[test]
    fn merge_orders_by_plan_not_by_outcome_arrival() {
        let outcomes = vec![
            (
                FetchKey::Channel,
                Outcome::Success(FetchedValue::SearchResults(json!("c"))),
            ),
            (
                FetchKey::SearchResults,
                Outcome::Success(FetchedValue::SearchResults(json!("s"))),
            ),
            (
                FetchKey::Details,
                Outcome::Success(FetchedValue::SearchResults(json!("d"))),
            ),
        ];
        let merged = AggregateResult::merge(&tasks(), outcomes);
        assert_eq!(
            merged.keys().collect::<Vec<_>>(),
            vec![FetchKey::SearchResults, FetchKey::Details, FetchKey::Channel]
        );
        let body = serde_json::to_string(&merged.into_body().unwrap()).unwrap();
        assert_eq!(body, r#"{"searchResults":"s","details":"d","channel":"c"}"#);
    }

    #[test]
    fn any_failure_surfaces_the_first_in_plan_order() {
        let outcomes = vec![
            (
                FetchKey::Channel,
                Outcome::Failure(VidscopeError::connector("mock", "channel down")),
            ),
            (
                FetchKey::SearchResults,
                Outcome::Success(FetchedValue::SearchResults(json!([]))),
            ),
            (
                FetchKey::Details,
                Outcome::Failure(VidscopeError::not_found("video v")),
            ),
        ];
        let merged = AggregateResult::merge(&tasks(), outcomes);
        assert_eq!(
            merged.first_failure().map(|(k, _)| k),
            Some(FetchKey::Details)
        );
        assert_eq!(
            merged.into_body(),
            Err(VidscopeError::not_found("video v"))
        );
    }

    #[test]
    fn missing_outcome_becomes_failure() {
        let merged = AggregateResult::merge(&tasks(), vec![]);
        assert_eq!(merged.len(), 3);
        assert!(merged.iter().all(|(_, o)| !o.is_success()));
    }
}
