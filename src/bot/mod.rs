pub mod commands;
pub mod dispatch;
pub mod discord;
pub mod router;

pub use dispatch::SerialDispatcher;
pub use router::{CommandRouter, InboundMessage};
