use std::sync::Arc;

use async_trait::async_trait;

use crate::tiers::TierTable;

pub const UNKNOWN_TIER: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("roles can only be assigned inside a server")]
    NoGuild,
    #[error("chat platform error: {0}")]
    Api(String),
}

/// Role management on the chat platform, scoped to the server and member the
/// current command came from.
#[async_trait]
pub trait RoleRegistry: Send + Sync {
    async fn find_role(&self, name: &str) -> Result<Option<RoleRef>, PlatformError>;

    async fn create_role(&self, name: &str, color: u32) -> Result<RoleRef, PlatformError>;

    async fn recolor_role(&self, role: &RoleRef, color: u32) -> Result<(), PlatformError>;

    /// Attaches `role` to the member who sent the command.
    async fn grant_role(&self, role: &RoleRef) -> Result<(), PlatformError>;
}

#[derive(Clone)]
pub struct BadgeAssigner {
    tiers: Arc<TierTable>,
}

impl BadgeAssigner {
    pub fn new(tiers: Arc<TierTable>) -> Self {
        Self { tiers }
    }

    /// Gives the member the role of the tier containing `rating`, creating the
    /// role on first use and refreshing its color otherwise. Returns the tier
    /// name, or `"Unknown"` when no tier contains the rating.
    pub async fn assign_badge(
        &self,
        roles: &dyn RoleRegistry,
        rating: i64,
    ) -> Result<String, PlatformError> {
        let Some(tier) = self.tiers.tier_for(rating) else {
            tracing::warn!(rating, "Rating outside every tier");
            return Ok(UNKNOWN_TIER.to_string());
        };

        let role_name = tier.role_name();
        let role = match roles.find_role(&role_name).await? {
            Some(role) => {
                roles.recolor_role(&role, tier.color).await?;
                role
            }
            None => {
                tracing::info!(role = %role_name, color = tier.color, "Creating tier role");
                roles.create_role(&role_name, tier.color).await?
            }
        };

        roles.grant_role(&role).await?;
        Ok(tier.name.clone())
    }
}
