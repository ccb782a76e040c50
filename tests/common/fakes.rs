use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use cf_companion::judge::{problem_url, JudgeApi, JudgeError, Problem, Submission};
use cf_companion::services::badge::{PlatformError, RoleRef, RoleRegistry};
use cf_companion::store::operations::identities::UserIdentity;
use cf_companion::store::operations::solved_sets::SolvedSet;
use cf_companion::store::{Store, StoreError, UserRecords};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Network,
    ApiStatus,
}

impl Failure {
    fn to_error(self) -> JudgeError {
        match self {
            Failure::Network => JudgeError::HttpStatus { status: 503 },
            Failure::ApiStatus => JudgeError::ApiStatus {
                status: "FAILED".to_string(),
                comment: Some("Call limit exceeded".to_string()),
            },
        }
    }
}

/// Canned judge responses with call counters.
#[derive(Default)]
pub struct FakeJudge {
    pub problems: Vec<Problem>,
    pub submissions: Vec<Submission>,
    pub rating: Option<i64>,
    pub catalog_failure: Option<Failure>,
    pub history_failure: Option<Failure>,
    pub rating_failure: Option<Failure>,
    pub catalog_calls: AtomicUsize,
    pub history_calls: AtomicUsize,
    pub rating_calls: AtomicUsize,
}

impl FakeJudge {
    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }

    pub fn catalog_calls(&self) -> usize {
        self.catalog_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JudgeApi for FakeJudge {
    async fn fetch_problemset(&self) -> Result<Vec<Problem>, JudgeError> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        match self.catalog_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(self.problems.clone()),
        }
    }

    async fn fetch_submissions(&self, _handle: &str) -> Result<Vec<Submission>, JudgeError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        match self.history_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(self.submissions.clone()),
        }
    }

    async fn fetch_rating(&self, _handle: &str) -> Result<Option<i64>, JudgeError> {
        self.rating_calls.fetch_add(1, Ordering::SeqCst);
        match self.rating_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(self.rating),
        }
    }

    fn problem_url(&self, problem: &Problem) -> String {
        problem_url("https://codeforces.com", problem.contest_id, &problem.index)
    }
}

/// In-memory server roles for a single member.
#[derive(Default)]
pub struct FakeRoles {
    pub outside_guild: bool,
    pub roles: Mutex<Vec<RoleRef>>,
    pub colors: Mutex<HashMap<u64, u32>>,
    pub granted: Mutex<Vec<u64>>,
    pub created: AtomicUsize,
    next_id: AtomicU64,
}

impl FakeRoles {
    pub fn outside_guild() -> Self {
        Self {
            outside_guild: true,
            ..Default::default()
        }
    }

    pub fn with_role(self, id: u64, name: &str, color: u32) -> Self {
        self.roles.lock().unwrap().push(RoleRef {
            id,
            name: name.to_string(),
        });
        self.colors.lock().unwrap().insert(id, color);
        self
    }

    pub fn role_named(&self, name: &str) -> Option<RoleRef> {
        self.roles
            .lock()
            .unwrap()
            .iter()
            .find(|role| role.name == name)
            .cloned()
    }

    pub fn color_of(&self, id: u64) -> Option<u32> {
        self.colors.lock().unwrap().get(&id).copied()
    }

    pub fn granted(&self) -> Vec<u64> {
        self.granted.lock().unwrap().clone()
    }

    fn check_guild(&self) -> Result<(), PlatformError> {
        if self.outside_guild {
            Err(PlatformError::NoGuild)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RoleRegistry for FakeRoles {
    async fn find_role(&self, name: &str) -> Result<Option<RoleRef>, PlatformError> {
        self.check_guild()?;
        Ok(self.role_named(name))
    }

    async fn create_role(&self, name: &str, color: u32) -> Result<RoleRef, PlatformError> {
        self.check_guild()?;
        let id = 1_000 + self.next_id.fetch_add(1, Ordering::SeqCst);
        let role = RoleRef {
            id,
            name: name.to_string(),
        };
        self.roles.lock().unwrap().push(role.clone());
        self.colors.lock().unwrap().insert(id, color);
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(role)
    }

    async fn recolor_role(&self, role: &RoleRef, color: u32) -> Result<(), PlatformError> {
        self.check_guild()?;
        self.colors.lock().unwrap().insert(role.id, color);
        Ok(())
    }

    async fn grant_role(&self, role: &RoleRef) -> Result<(), PlatformError> {
        self.check_guild()?;
        self.granted.lock().unwrap().push(role.id);
        Ok(())
    }
}

/// Which writes `FailingWrites` rejects.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteFailures {
    pub identity: bool,
    pub solved_set: bool,
}

pub const WRITE_FAILURE_REASON: &str = "disk quota exceeded";

/// Real store for reads, rejected writes where configured.
pub struct FailingWrites {
    pub inner: Arc<Store>,
    pub failures: WriteFailures,
}

fn write_error() -> StoreError {
    StoreError::Sled(sled::Error::Unsupported(WRITE_FAILURE_REASON.to_string()))
}

impl UserRecords for FailingWrites {
    fn put_identity(&self, identity: &UserIdentity) -> Result<(), StoreError> {
        if self.failures.identity {
            return Err(write_error());
        }
        self.inner.put_identity(identity)
    }

    fn get_identity(&self, user_id: &str) -> Result<Option<UserIdentity>, StoreError> {
        self.inner.get_identity(user_id)
    }

    fn put_solved_set(&self, solved: &SolvedSet) -> Result<(), StoreError> {
        if self.failures.solved_set {
            return Err(write_error());
        }
        self.inner.put_solved_set(solved)
    }

    fn get_solved_set(&self, user_id: &str) -> Result<Option<SolvedSet>, StoreError> {
        self.inner.get_solved_set(user_id)
    }
}
