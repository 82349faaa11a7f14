use vidscope_core::VidscopeError;

use crate::Vidscope;
use crate::merge::AggregateResult;
use crate::planner::{FetchRequest, plan};

impl Vidscope {
    /// Plan, fetch concurrently, and merge a composite request.
    ///
    /// Behavior:
    /// - Only the fetches implied by the identifiers and requested fields run.
    /// - Every planned fetch completes before this returns, failed or not.
    /// - Per-fetch failures are kept in the result; call
    ///   [`AggregateResult::into_body`] to apply the all-or-nothing JSON rule.
    ///
    /// # Errors
    /// `MissingIdentifier` or `NoTasksPlanned` when the request is malformed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "vidscope::aggregate", skip(self, req), err)
    )]
    pub async fn aggregate(&self, req: &FetchRequest) -> Result<AggregateResult, VidscopeError> {
        let tasks = plan(req)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(planned = ?tasks.iter().map(|t| t.key().as_str()).collect::<Vec<_>>(), "fetch plan");
        let outcomes = self.execute(&tasks).await;
        Ok(AggregateResult::merge(&tasks, outcomes))
    }
}
