//! Core domain entities.
//!
//! - [`Link`] - A stored short code mapping
//! - [`NewLink`] - Input for creating a mapping

pub mod link;

pub use link::{Link, NewLink};
