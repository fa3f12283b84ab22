//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local stores guarded by a lock per store. State is
//!   lost on restart.
//!
//! Adapters are thin translators that hold data for the domain. They contain
//! no business logic.

pub mod memory;
