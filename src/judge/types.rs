//! Wire records returned by the judge API and the validated records the rest
//! of the crate works with.

use serde::Deserialize;

use crate::constants::ACCEPTED_VERDICT;

/// Response envelope shared by every judge endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub result: Option<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProblemsetResult {
    pub problems: Vec<RawProblem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProblem {
    #[serde(default)]
    pub contest_id: Option<i64>,
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSubmission {
    #[serde(default)]
    pub verdict: Option<String>,
    pub problem: RawProblemRef,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProblemRef {
    #[serde(default)]
    pub contest_id: Option<i64>,
    pub index: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawUserInfo {
    #[serde(default)]
    pub rating: Option<i64>,
}

/// Concatenation of contest id and problem index, e.g. `1500A`.
pub fn problem_token(contest_id: i64, index: &str) -> String {
    format!("{contest_id}{index}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub contest_id: i64,
    pub index: String,
    pub name: String,
    pub rating: Option<i64>,
}

impl Problem {
    pub fn token(&self) -> String {
        problem_token(self.contest_id, &self.index)
    }
}

impl TryFrom<RawProblem> for Problem {
    type Error = RawProblem;

    fn try_from(raw: RawProblem) -> Result<Self, Self::Error> {
        match raw.contest_id {
            Some(contest_id) => Ok(Self {
                contest_id,
                index: raw.index,
                name: raw.name,
                rating: raw.rating,
            }),
            None => Err(raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub verdict: Option<String>,
    pub contest_id: i64,
    pub index: String,
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        self.verdict.as_deref() == Some(ACCEPTED_VERDICT)
    }

    pub fn problem_token(&self) -> String {
        problem_token(self.contest_id, &self.index)
    }
}

impl TryFrom<RawSubmission> for Submission {
    type Error = RawSubmission;

    fn try_from(raw: RawSubmission) -> Result<Self, Self::Error> {
        match raw.problem.contest_id {
            Some(contest_id) => Ok(Self {
                verdict: raw.verdict,
                contest_id,
                index: raw.problem.index,
            }),
            None => Err(raw),
        }
    }
}
