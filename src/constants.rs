/// Verdict the judge reports for an accepted submission
pub const ACCEPTED_VERDICT: &str = "OK";

/// Envelope status the judge API returns on success
pub const API_STATUS_OK: &str = "OK";

/// Default judge origin, used for both the API and problem links
pub const DEFAULT_JUDGE_BASE_URL: &str = "https://codeforces.com";

/// Default per-request timeout for judge calls (seconds)
pub const DEFAULT_JUDGE_TIMEOUT_SECS: u64 = 30;

/// Lowest rating covered by the badge tiers
pub const MIN_SUPPORTED_RATING: i64 = 0;

/// Highest rating covered by the badge tiers
pub const MAX_SUPPORTED_RATING: i64 = 9999;

pub const IDENTIFY_COMMAND: &str = "!identify";
pub const PROBLEM_COMMAND: &str = "!problem";
pub const RATING_COMMAND: &str = "!rating";
