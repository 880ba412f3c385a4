// cgaled-api: Async Rust client for the Compal CGA gateway management API

pub mod auth;
pub mod challenge;
pub mod client;
pub mod device;
pub mod error;
pub mod models;

pub use client::{GatewayClient, GatewayConfig};
pub use device::LedOutcome;
pub use error::Error;
