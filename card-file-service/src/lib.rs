//! Application-facing record service.
//!
//! This crate sits between a frontend and the database crate: it validates
//! input before anything touches the store, translates page numbers into
//! query windows, and maps missing rows to typed errors. Frontends hold a
//! [`RecordService`] and never touch SQL directly.

pub mod service;
pub mod settings;

pub use service::{RecordPage, RecordService, ServiceError};
pub use settings::{default_database_path, resolve_database_path, save_database_path, settings_path};
