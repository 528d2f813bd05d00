//! Outbound adapters implementing domain ports.
//!
//! - **memory**: the in-memory mock database backing books and users
//! - **credentials**: bcrypt-backed credential verifier
//!
//! Adapters are thin translators and contain no business logic.

pub mod credentials;
pub mod memory;
