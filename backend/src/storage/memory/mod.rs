//! In-memory storage backend seeded with fixture data.
//!
//! Stands behind the storage traits exactly where a file or database
//! backend would go, so presentation code never touches the fixture arrays
//! directly.

pub mod connection;
pub mod fixtures;
pub mod payment_repository;
pub mod property_repository;
pub mod settings_repository;

pub use connection::MemoryConnection;
