//! tanglome-session - Process-wide session service.

mod sequence;
mod service;

pub use service::SessionService;
