pub mod keys;
pub mod operations;
pub mod trees;

use serde::de::DeserializeOwned;
use serde::Serialize;
use sled::Db;
use thiserror::Error;

use crate::store::operations::identities::UserIdentity;
use crate::store::operations::solved_sets::SolvedSet;

/// Embedded key-value store backing the Identity Store and the Solved-Set
/// Store. Every record is keyed by the chat platform user id.
#[derive(Debug)]
pub struct Store {
    db: Db,
    pub identities: sled::Tree,
    pub solved_problems: sled::Tree,
}

/// Record access used by the command path.
pub trait UserRecords: Send + Sync {
    fn put_identity(&self, identity: &UserIdentity) -> Result<(), StoreError>;

    fn get_identity(&self, user_id: &str) -> Result<Option<UserIdentity>, StoreError>;

    fn put_solved_set(&self, solved: &SolvedSet) -> Result<(), StoreError>;

    fn get_solved_set(&self, user_id: &str) -> Result<Option<SolvedSet>, StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sled error: {0}")]
    Sled(#[from] sled::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Store {
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let identities = db.open_tree(trees::IDENTITIES)?;
        let solved_problems = db.open_tree(trees::SOLVED_PROBLEMS)?;

        Ok(Self {
            db,
            identities,
            solved_problems,
        })
    }

    pub fn flush(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        Ok(())
    }

    pub(crate) fn serialize<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
        Ok(serde_json::to_vec(value)?)
    }

    pub(crate) fn deserialize<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl UserRecords for Store {
    fn put_identity(&self, identity: &UserIdentity) -> Result<(), StoreError> {
        Store::put_identity(self, identity)
    }

    fn get_identity(&self, user_id: &str) -> Result<Option<UserIdentity>, StoreError> {
        Store::get_identity(self, user_id)
    }

    fn put_solved_set(&self, solved: &SolvedSet) -> Result<(), StoreError> {
        Store::put_solved_set(self, solved)
    }

    fn get_solved_set(&self, user_id: &str) -> Result<Option<SolvedSet>, StoreError> {
        Store::get_solved_set(self, user_id)
    }
}
