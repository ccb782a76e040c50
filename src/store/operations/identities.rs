use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::keys;
use crate::store::{Store, StoreError};

/// Judge handle bound to a chat platform user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub user_id: String,
    pub handle: String,
    pub updated_at: DateTime<Utc>,
}

impl UserIdentity {
    pub fn new(user_id: &str, handle: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            handle: handle.to_string(),
            updated_at: Utc::now(),
        }
    }
}

impl Store {
    /// Creates or overwrites the identity of `identity.user_id`.
    pub fn put_identity(&self, identity: &UserIdentity) -> Result<(), StoreError> {
        let key = keys::identity_key(&identity.user_id);
        self.identities
            .insert(key.as_bytes(), Self::serialize(identity)?)?;
        Ok(())
    }

    pub fn get_identity(&self, user_id: &str) -> Result<Option<UserIdentity>, StoreError> {
        let key = keys::identity_key(user_id);
        match self.identities.get(key.as_bytes())? {
            Some(raw) => Ok(Some(Self::deserialize(&raw)?)),
            None => Ok(None),
        }
    }
}
