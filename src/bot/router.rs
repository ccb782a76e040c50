use std::sync::Arc;

use crate::bot::commands::{parse_difficulty_range, Command};
use crate::judge::{JudgeApi, JudgeError};
use crate::services::badge::{BadgeAssigner, RoleRegistry};
use crate::services::reconcile::Reconciler;
use crate::services::selector::ProblemSelector;
use crate::store::operations::identities::UserIdentity;
use crate::store::operations::solved_sets::SolvedSet;
use crate::store::UserRecords;
use crate::tiers::TierTable;

pub const IDENTIFY_PROMPT: &str =
    "You have not identified your Codeforces handle yet. Use 'identify [username]' to set it.";
pub const PROBLEM_IDENTIFY_PROMPT: &str =
    "Please identify yourself first with your Codeforces username using the command: identify [username]";
pub const PROBLEM_USAGE: &str =
    "Please provide valid difficulty levels in the format: problem [min_difficulty] [max_difficulty]";
pub const RATING_USAGE: &str =
    "Please provide a Codeforces handle in the format: rating [username], or identify yourself first.";
pub const NO_PROBLEM_FOUND: &str = "No unsolved problems found in the specified difficulty range.";
pub const RATING_FAILED: &str = "Could not retrieve Codeforces rating.";

/// A chat message as seen by the router, independent of the transport.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub author_id: String,
    pub author_name: String,
    pub content: String,
    /// Sent by the bot itself.
    pub from_self: bool,
}

/// Dispatches chat commands to the services and renders the replies.
#[derive(Clone)]
pub struct CommandRouter {
    store: Arc<dyn UserRecords>,
    judge: Arc<dyn JudgeApi>,
    reconciler: Reconciler,
    selector: ProblemSelector,
    badges: BadgeAssigner,
}

impl CommandRouter {
    pub fn new(
        store: Arc<dyn UserRecords>,
        judge: Arc<dyn JudgeApi>,
        tiers: Arc<TierTable>,
    ) -> Self {
        Self {
            reconciler: Reconciler::new(store.clone(), judge.clone()),
            selector: ProblemSelector::new(judge.clone()),
            badges: BadgeAssigner::new(tiers),
            store,
            judge,
        }
    }

    /// Handles one message and returns the replies in send order. Messages
    /// that are not commands, or that the bot sent itself, get no reply.
    pub async fn handle(&self, message: &InboundMessage, roles: &dyn RoleRegistry) -> Vec<String> {
        if message.from_self {
            return Vec::new();
        }

        tracing::info!(
            author = %message.author_name,
            author_id = %message.author_id,
            content = %message.content,
            "Message received"
        );

        let Some(command) = Command::parse(&message.content) else {
            return Vec::new();
        };

        match command {
            Command::Identify { handle: Some(handle) } => self.identify(message, &handle).await,
            Command::Identify { handle: None } => self.refresh(message).await,
            Command::Problem { args } => self.problem(message, &args).await,
            Command::Rating { handle } => self.rating(message, handle, roles).await,
        }
    }

    async fn identify(&self, message: &InboundMessage, handle: &str) -> Vec<String> {
        let identity = UserIdentity::new(&message.author_id, handle);
        if let Err(e) = self.store.put_identity(&identity) {
            tracing::error!(user_id = %message.author_id, error = %e, "Failed to store identity");
            return vec![format!("An error occurred: {e}")];
        }

        let mut replies = Vec::new();
        let solved = self.reconciler.reconcile(&message.author_id, handle).await;
        self.save_solved(&solved, &mut replies);

        replies.push(format!(
            "Codeforces username for {} set to {}.",
            message.author_name, handle
        ));
        replies
    }

    async fn refresh(&self, message: &InboundMessage) -> Vec<String> {
        let Some(identity) = self.lookup_identity(&message.author_id) else {
            return vec![IDENTIFY_PROMPT.to_string()];
        };

        let mut replies = Vec::new();
        let solved = self
            .reconciler
            .reconcile(&message.author_id, &identity.handle)
            .await;
        self.save_solved(&solved, &mut replies);

        replies.push(format!(
            "Fetched {} solved problems for {}.",
            solved.len(),
            identity.handle
        ));
        replies
    }

    async fn problem(&self, message: &InboundMessage, args: &[String]) -> Vec<String> {
        let Some(identity) = self.lookup_identity(&message.author_id) else {
            return vec![PROBLEM_IDENTIFY_PROMPT.to_string()];
        };

        let (min_difficulty, max_difficulty) = match parse_difficulty_range(args) {
            Ok(range) => range,
            Err(e) => {
                tracing::debug!(user_id = %message.author_id, reason = %e, "Rejected problem arguments");
                return vec![PROBLEM_USAGE.to_string()];
            }
        };

        let solved = self
            .reconciler
            .reconcile(&message.author_id, &identity.handle)
            .await;

        let reply = match self
            .selector
            .select(min_difficulty, max_difficulty, &solved)
            .await
        {
            Ok(Some(picked)) => format!(
                "Problem: {} (Rating: {})\nURL: {}",
                picked.problem.name, picked.rating, picked.url
            ),
            Ok(None) => NO_PROBLEM_FOUND.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "Problem catalog fetch failed");
                catalog_failure_reply(&e)
            }
        };
        vec![reply]
    }

    async fn rating(
        &self,
        message: &InboundMessage,
        handle: Option<String>,
        roles: &dyn RoleRegistry,
    ) -> Vec<String> {
        let handle = match handle {
            Some(handle) => handle,
            None => match self.lookup_identity(&message.author_id) {
                Some(identity) => identity.handle,
                None => return vec![RATING_USAGE.to_string()],
            },
        };

        let rating = match self.judge.fetch_rating(&handle).await {
            Ok(Some(rating)) => rating,
            Ok(None) => return vec![format!("{handle} is unrated, no color assigned.")],
            Err(e) => {
                tracing::warn!(handle = %handle, error = %e, "Rating lookup failed");
                return vec![RATING_FAILED.to_string()];
            }
        };

        let reply = match self.badges.assign_badge(roles, rating).await {
            Ok(tier) => format!("{handle} has rating {rating}, color is set to {tier}"),
            Err(e) => {
                tracing::warn!(handle = %handle, rating, error = %e, "Badge assignment failed");
                format!("{handle} has rating {rating}, but the color role could not be assigned: {e}")
            }
        };
        vec![reply]
    }

    /// Read failures count as "not identified".
    fn lookup_identity(&self, user_id: &str) -> Option<UserIdentity> {
        match self.store.get_identity(user_id) {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(user_id, error = %e, "Failed to read identity");
                None
            }
        }
    }

    /// Write-through of a reconciled set; a failure becomes an extra reply
    /// but does not stop the command.
    fn save_solved(&self, solved: &SolvedSet, replies: &mut Vec<String>) {
        if let Err(e) = self.store.put_solved_set(solved) {
            tracing::error!(user_id = %solved.user_id, error = %e, "Failed to store solved problems");
            replies.push(format!("An error occurred: {e}"));
        }
    }
}

fn catalog_failure_reply(error: &JudgeError) -> String {
    match error {
        JudgeError::Network(_) | JudgeError::HttpStatus { .. } => {
            "An error occurred: Failed to retrieve problems from Codeforces.".to_string()
        }
        JudgeError::ApiStatus { .. } | JudgeError::Decode(_) => {
            "An error occurred: Error retrieving problems from Codeforces.".to_string()
        }
    }
}
