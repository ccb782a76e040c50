use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::JudgeConfig;
use crate::constants::API_STATUS_OK;
use crate::judge::types::{
    ApiEnvelope, Problem, ProblemsetResult, RawSubmission, RawUserInfo, Submission,
};
use crate::judge::{problem_url, JudgeApi, JudgeError};

/// HTTP client for the Codeforces public API.
#[derive(Debug, Clone)]
pub struct CodeforcesClient {
    base_url: String,
    client: reqwest::Client,
}

impl CodeforcesClient {
    pub fn new(config: &JudgeConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("cf-companion/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_result<T: DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, &str)],
    ) -> Result<T, JudgeError> {
        let url = format!("{}/api/{}", self.base_url, method);
        let response = self.client.get(&url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(JudgeError::HttpStatus {
                status: response.status().as_u16(),
            });
        }

        let envelope: ApiEnvelope<T> = response.json().await?;
        if envelope.status != API_STATUS_OK {
            return Err(JudgeError::ApiStatus {
                status: envelope.status,
                comment: envelope.comment,
            });
        }

        envelope
            .result
            .ok_or_else(|| JudgeError::Decode(format!("{method}: OK response without result")))
    }
}

#[async_trait]
impl JudgeApi for CodeforcesClient {
    async fn fetch_problemset(&self) -> Result<Vec<Problem>, JudgeError> {
        let result: ProblemsetResult = self.get_result("problemset.problems", &[]).await?;
        let total = result.problems.len();
        let problems: Vec<Problem> = result
            .problems
            .into_iter()
            .filter_map(|raw| match Problem::try_from(raw) {
                Ok(problem) => Some(problem),
                Err(raw) => {
                    tracing::debug!(index = %raw.index, name = %raw.name, "Skipping problem without contest id");
                    None
                }
            })
            .collect();

        tracing::info!(total, kept = problems.len(), "Problem catalog retrieved");
        Ok(problems)
    }

    async fn fetch_submissions(&self, handle: &str) -> Result<Vec<Submission>, JudgeError> {
        let raw: Vec<RawSubmission> = self
            .get_result("user.status", &[("handle", handle), ("from", "1")])
            .await?;

        let submissions: Vec<Submission> = raw
            .into_iter()
            .filter_map(|raw| Submission::try_from(raw).ok())
            .collect();

        tracing::info!(handle, count = submissions.len(), "Submission history retrieved");
        Ok(submissions)
    }

    async fn fetch_rating(&self, handle: &str) -> Result<Option<i64>, JudgeError> {
        let users: Vec<RawUserInfo> = self.get_result("user.info", &[("handles", handle)]).await?;
        let user = users
            .into_iter()
            .next()
            .ok_or_else(|| JudgeError::Decode("user.info: empty result".to_string()))?;
        Ok(user.rating)
    }

    fn problem_url(&self, problem: &Problem) -> String {
        problem_url(&self.base_url, problem.contest_id, &problem.index)
    }
}
