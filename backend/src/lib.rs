//! Identity and access core of a single-tenant task tracker.
//!
//! Users register and sign in for session tokens, own to-do lists, and
//! manage tasks inside their lists. All state lives in memory.

pub mod domain;
pub mod outbound;
pub mod settings;
pub mod telemetry;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod wiring;
