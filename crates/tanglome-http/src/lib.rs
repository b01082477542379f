//! tanglome-http - HTTP-backed auth gateway.

mod client;
mod endpoints;
mod gateway;

pub use gateway::HttpGateway;
