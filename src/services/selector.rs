use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::judge::{JudgeApi, JudgeError, Problem};
use crate::store::operations::solved_sets::SolvedSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendedProblem {
    pub problem: Problem,
    pub rating: i64,
    pub url: String,
}

/// Problems with a rating inside `min..=max` whose token is not in `solved`.
/// Unrated problems never qualify.
pub fn filter_candidates<'a>(
    problems: &'a [Problem],
    min_difficulty: i64,
    max_difficulty: i64,
    solved: &SolvedSet,
) -> Vec<&'a Problem> {
    problems
        .iter()
        .filter(|problem| match problem.rating {
            Some(rating) => min_difficulty <= rating && rating <= max_difficulty,
            None => false,
        })
        .filter(|problem| !solved.contains(&problem.token()))
        .collect()
}

/// Uniform choice over `candidates`, independent of their order.
pub fn pick_uniform<'a, R: Rng + ?Sized>(
    candidates: &[&'a Problem],
    rng: &mut R,
) -> Option<&'a Problem> {
    candidates.choose(rng).copied()
}

#[derive(Clone)]
pub struct ProblemSelector {
    judge: Arc<dyn JudgeApi>,
}

impl ProblemSelector {
    pub fn new(judge: Arc<dyn JudgeApi>) -> Self {
        Self { judge }
    }

    /// Picks one unsolved problem in the difficulty band.
    ///
    /// `Ok(None)` means the catalog was fetched but nothing matched, which is
    /// distinct from a fetch failure.
    pub async fn select(
        &self,
        min_difficulty: i64,
        max_difficulty: i64,
        solved: &SolvedSet,
    ) -> Result<Option<RecommendedProblem>, JudgeError> {
        let problems = self.judge.fetch_problemset().await?;
        let candidates = filter_candidates(&problems, min_difficulty, max_difficulty, solved);

        tracing::debug!(
            min_difficulty,
            max_difficulty,
            candidates = candidates.len(),
            "Filtered problem catalog"
        );

        let picked = pick_uniform(&candidates, &mut rand::thread_rng());
        Ok(picked.and_then(|problem| {
            problem.rating.map(|rating| RecommendedProblem {
                problem: problem.clone(),
                rating,
                url: self.judge.problem_url(problem),
            })
        }))
    }
}
