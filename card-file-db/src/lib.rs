//! SQLite persistence layer for the record store.
//!
//! Provides schema creation, CRUD operations, and listing/counting queries
//! backed by SQLite (via rusqlite with the bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    delete_record, find_record_by_id, insert_record, seed_demo_records, update_record,
    OperationError,
};
pub use queries::{
    count_records, list_records, store_stats, RecordFilter, SortKey, StoreStats,
};
pub use schema::{open_database, open_memory};
