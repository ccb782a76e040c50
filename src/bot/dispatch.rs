use std::future::Future;

use tokio::sync::Mutex;

use crate::bot::router::{CommandRouter, InboundMessage};
use crate::services::badge::RoleRegistry;

/// Runs commands one at a time across all channels. Every reply of a command
/// is sent before the next command is handled.
pub struct SerialDispatcher {
    router: CommandRouter,
    gate: Mutex<()>,
}

impl SerialDispatcher {
    pub fn new(router: CommandRouter) -> Self {
        Self {
            router,
            gate: Mutex::new(()),
        }
    }

    pub async fn dispatch<F, Fut>(
        &self,
        message: &InboundMessage,
        roles: &dyn RoleRegistry,
        mut send: F,
    ) where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = ()>,
    {
        let _serial = self.gate.lock().await;
        for reply in self.router.handle(message, roles).await {
            send(reply).await;
        }
    }
}
