//! Discord transport: receives messages over the gateway, hands them to the
//! command router one at a time and posts the replies back to the channel.

use std::future::Future;
use std::sync::Arc;

use serenity::all::{
    Client, Context, EditRole, EventHandler, GatewayIntents, GuildId, Http, Message, Ready,
    RoleId, UserId,
};
use serenity::async_trait;

use crate::bot::dispatch::SerialDispatcher;
use crate::bot::router::{CommandRouter, InboundMessage};
use crate::services::badge::{PlatformError, RoleRef, RoleRegistry};

const ROLE_AUDIT_REASON: &str = "rating tier badge";

/// Role operations for the server and member of one message.
pub struct GuildRoles {
    http: Arc<Http>,
    guild_id: Option<GuildId>,
    user_id: UserId,
}

impl GuildRoles {
    pub fn new(http: Arc<Http>, guild_id: Option<GuildId>, user_id: UserId) -> Self {
        Self {
            http,
            guild_id,
            user_id,
        }
    }

    fn guild(&self) -> Result<GuildId, PlatformError> {
        self.guild_id.ok_or(PlatformError::NoGuild)
    }
}

fn api_error(e: serenity::Error) -> PlatformError {
    PlatformError::Api(e.to_string())
}

#[async_trait]
impl RoleRegistry for GuildRoles {
    async fn find_role(&self, name: &str) -> Result<Option<RoleRef>, PlatformError> {
        let guild = self.guild()?;
        let roles = guild.roles(self.http.as_ref()).await.map_err(api_error)?;
        Ok(roles
            .into_values()
            .find(|role| role.name == name)
            .map(|role| RoleRef {
                id: role.id.get(),
                name: role.name,
            }))
    }

    async fn create_role(&self, name: &str, color: u32) -> Result<RoleRef, PlatformError> {
        let guild = self.guild()?;
        let builder = EditRole::new()
            .name(name)
            .colour(color)
            .audit_log_reason(ROLE_AUDIT_REASON);
        let role = guild
            .create_role(self.http.as_ref(), builder)
            .await
            .map_err(api_error)?;
        Ok(RoleRef {
            id: role.id.get(),
            name: role.name,
        })
    }

    async fn recolor_role(&self, role: &RoleRef, color: u32) -> Result<(), PlatformError> {
        let guild = self.guild()?;
        let builder = EditRole::new()
            .colour(color)
            .audit_log_reason(ROLE_AUDIT_REASON);
        guild
            .edit_role(self.http.as_ref(), RoleId::new(role.id), builder)
            .await
            .map_err(api_error)?;
        Ok(())
    }

    async fn grant_role(&self, role: &RoleRef) -> Result<(), PlatformError> {
        let guild = self.guild()?;
        self.http
            .add_member_role(
                guild,
                self.user_id,
                RoleId::new(role.id),
                Some(ROLE_AUDIT_REASON),
            )
            .await
            .map_err(api_error)
    }
}

pub struct Handler {
    dispatcher: SerialDispatcher,
}

impl Handler {
    pub fn new(router: CommandRouter) -> Self {
        Self {
            dispatcher: SerialDispatcher::new(router),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!(user = %ready.user.name, guilds = ready.guilds.len(), "Logged in");
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let own_id = ctx.cache.current_user().id;
        let author_name = msg
            .member
            .as_ref()
            .and_then(|member| member.nick.clone())
            .unwrap_or_else(|| msg.author.display_name().to_string());

        let inbound = InboundMessage {
            author_id: msg.author.id.get().to_string(),
            author_name,
            content: msg.content.clone(),
            from_self: msg.author.id == own_id,
        };
        let roles = GuildRoles::new(ctx.http.clone(), msg.guild_id, msg.author.id);

        let channel = msg.channel_id;
        self.dispatcher
            .dispatch(&inbound, &roles, |reply| {
                let http = ctx.http.clone();
                async move {
                    if let Err(e) = channel.say(&http, reply).await {
                        tracing::warn!(channel = %channel, error = %e, "Failed to send reply");
                    }
                }
            })
            .await;
    }
}

/// Connects to the gateway and processes messages until `shutdown` resolves.
pub async fn run<F>(token: &str, router: CommandRouter, shutdown: F) -> Result<(), serenity::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(token, intents)
        .event_handler(Handler::new(router))
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        shutdown.await;
        tracing::info!("Stopping gateway shards");
        shard_manager.shutdown_all().await;
    });

    client.start().await
}
