//! Utility functions for code generation, URL validation, and database error inspection.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - Syntactic long URL validation
//! - [`db_error`] - Classification of database errors
//! - [`location`] - Encoding of redirect targets

pub mod code_generator;
pub mod db_error;
pub mod location;
pub mod url_validator;
