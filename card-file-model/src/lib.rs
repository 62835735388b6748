//! Record data model and validation rules.
//!
//! This crate defines the persistent data model for managed records without
//! any database dependencies. Consumers can use these types directly for
//! display or pass them to `card-file-db` for persistence.

pub mod types;
pub mod validate;

pub use types::{Record, RecordStatus, StatusParseError};
pub use validate::{validate_description, validate_name, ValidationError};
