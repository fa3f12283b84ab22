//! Domain ports and supporting types for the hexagonal boundary.
//!
//! `EntityStore` is driven (adapters implement it for the domain);
//! `Authenticator` and `AccessGuard` are driving ports the operation façade
//! calls into.

mod access_guard;
mod authenticator;
mod entity_store;

#[cfg(test)]
pub use access_guard::MockAccessGuard;
pub use access_guard::{AccessGuard, AccessTarget};
#[cfg(test)]
pub use authenticator::MockAuthenticator;
pub use authenticator::Authenticator;
pub use entity_store::{EntityStore, StoreError};
