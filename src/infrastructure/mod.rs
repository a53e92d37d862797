//! Infrastructure layer for external integrations.
//!
//! - [`database`] - Connection pool construction and schema migrations
//! - [`persistence`] - PostgreSQL repository implementations

pub mod database;
pub mod persistence;
