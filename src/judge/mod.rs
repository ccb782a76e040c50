pub mod client;
pub mod types;

use async_trait::async_trait;

pub use client::CodeforcesClient;
pub use types::{problem_token, Problem, Submission};

#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    #[error("judge network error: {0}")]
    Network(String),
    #[error("judge returned http status {status}")]
    HttpStatus { status: u16 },
    #[error("judge api status {status}: {}", .comment.as_deref().unwrap_or("no comment"))]
    ApiStatus {
        status: String,
        comment: Option<String>,
    },
    #[error("judge payload could not be decoded: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for JudgeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            JudgeError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            JudgeError::HttpStatus {
                status: status.as_u16(),
            }
        } else {
            JudgeError::Network(e.to_string())
        }
    }
}

/// Read-only access to the judge: problem catalog, submission history and
/// rating lookup.
#[async_trait]
pub trait JudgeApi: Send + Sync {
    async fn fetch_problemset(&self) -> Result<Vec<Problem>, JudgeError>;

    /// Full submission history of `handle`, newest first.
    async fn fetch_submissions(&self, handle: &str) -> Result<Vec<Submission>, JudgeError>;

    /// Current rating, `None` for accounts that never competed.
    async fn fetch_rating(&self, handle: &str) -> Result<Option<i64>, JudgeError>;

    /// Browsing URL of a problem.
    fn problem_url(&self, problem: &Problem) -> String;
}

pub fn problem_url(base_url: &str, contest_id: i64, index: &str) -> String {
    format!(
        "{}/problemset/problem/{}/{}",
        base_url.trim_end_matches('/'),
        contest_id,
        index
    )
}
