use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::keys;
use crate::store::{Store, StoreError};

/// Identity tokens of every problem a user is known to have solved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolvedSet {
    pub user_id: String,
    pub problem_ids: BTreeSet<String>,
    pub updated_at: DateTime<Utc>,
}

impl SolvedSet {
    pub fn new(user_id: &str, problem_ids: BTreeSet<String>) -> Self {
        Self {
            user_id: user_id.to_string(),
            problem_ids,
            updated_at: Utc::now(),
        }
    }

    pub fn empty(user_id: &str) -> Self {
        Self::new(user_id, BTreeSet::new())
    }

    pub fn len(&self) -> usize {
        self.problem_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problem_ids.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.problem_ids.contains(token)
    }
}

impl Store {
    /// Replaces the stored set wholesale.
    pub fn put_solved_set(&self, solved: &SolvedSet) -> Result<(), StoreError> {
        let key = keys::solved_set_key(&solved.user_id);
        self.solved_problems
            .insert(key.as_bytes(), Self::serialize(solved)?)?;
        Ok(())
    }

    pub fn get_solved_set(&self, user_id: &str) -> Result<Option<SolvedSet>, StoreError> {
        let key = keys::solved_set_key(user_id);
        match self.solved_problems.get(key.as_bytes())? {
            Some(raw) => Ok(Some(Self::deserialize(&raw)?)),
            None => Ok(None),
        }
    }
}
