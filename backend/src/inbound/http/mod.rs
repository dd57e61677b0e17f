//! HTTP inbound adapter exposing REST endpoints.

pub mod health;
pub mod response;
pub mod schools;
pub mod state;

pub use state::HttpState;
