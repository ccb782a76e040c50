use std::collections::BTreeSet;

use cf_companion::judge::{Problem, Submission};
use cf_companion::store::operations::solved_sets::SolvedSet;

pub fn problem(contest_id: i64, index: &str, rating: Option<i64>) -> Problem {
    Problem {
        contest_id,
        index: index.to_string(),
        name: format!("Problem {contest_id}{index}"),
        rating,
    }
}

pub fn submission(contest_id: i64, index: &str, verdict: &str) -> Submission {
    Submission {
        verdict: Some(verdict.to_string()),
        contest_id,
        index: index.to_string(),
    }
}

pub fn solved_set(user_id: &str, tokens: &[&str]) -> SolvedSet {
    let ids: BTreeSet<String> = tokens.iter().map(|s| s.to_string()).collect();
    SolvedSet::new(user_id, ids)
}

/// A small catalog spanning several bands, including an unrated problem.
pub fn sample_catalog() -> Vec<Problem> {
    vec![
        problem(1, "A", Some(800)),
        problem(1, "B", Some(1000)),
        problem(2, "A", Some(1200)),
        problem(2, "B", None),
        problem(3, "C", Some(1600)),
        problem(4, "D", Some(2400)),
    ]
}
