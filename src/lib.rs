pub mod bot;
pub mod config;
pub mod constants;
pub mod judge;
pub mod logging;
pub mod services;
pub mod store;
pub mod tiers;
