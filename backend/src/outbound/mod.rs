//! Outbound adapters implementing the domain repository ports.
//!
//! - **persistence**: MongoDB-backed repositories.
//! - **memory**: a process-local store with the same contract, used for
//!   development runs without a database and by the HTTP tests.
//!
//! Adapters translate between domain types and storage representations
//! and contain no business logic.

pub mod memory;
pub mod persistence;
