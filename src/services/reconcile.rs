use std::collections::BTreeSet;
use std::sync::Arc;

use crate::judge::JudgeApi;
use crate::store::operations::solved_sets::SolvedSet;
use crate::store::UserRecords;

/// Produces a user's solved set from the local cache, falling back to the
/// judge's submission history when the cache is empty.
///
/// A non-empty cached set is returned as-is and never refreshed, so problems
/// solved after the first fill are not picked up.
#[derive(Clone)]
pub struct Reconciler {
    store: Arc<dyn UserRecords>,
    judge: Arc<dyn JudgeApi>,
}

impl Reconciler {
    pub fn new(store: Arc<dyn UserRecords>, judge: Arc<dyn JudgeApi>) -> Self {
        Self { store, judge }
    }

    /// Never fails: store read errors count as an empty cache and judge errors
    /// yield an empty set. Writing the result back is up to the caller.
    pub async fn reconcile(&self, user_id: &str, handle: &str) -> SolvedSet {
        let cached = match self.store.get_solved_set(user_id) {
            Ok(cached) => cached,
            Err(e) => {
                tracing::warn!(user_id, error = %e, "Failed to read cached solved set");
                None
            }
        };

        if let Some(cached) = cached {
            if !cached.is_empty() {
                tracing::debug!(user_id, count = cached.len(), "Using cached solved set");
                return cached;
            }
        }

        let submissions = match self.judge.fetch_submissions(handle).await {
            Ok(submissions) => submissions,
            Err(e) => {
                tracing::warn!(user_id, handle, error = %e, "Failed to fetch solved problems");
                return SolvedSet::empty(user_id);
            }
        };

        let problem_ids: BTreeSet<String> = submissions
            .iter()
            .filter(|submission| submission.is_accepted())
            .map(|submission| submission.problem_token())
            .collect();

        tracing::info!(user_id, handle, count = problem_ids.len(), "Solved set rebuilt from history");
        SolvedSet::new(user_id, problem_ids)
    }
}
