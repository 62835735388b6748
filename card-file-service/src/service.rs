//! Validating facade over the record store.
//!
//! Every write runs the field validators before touching the database, so
//! a frontend can surface [`ServiceError::Validation`] next to the offending
//! input instead of reacting to a store constraint failure after the fact.

use card_file_db::operations::{self, OperationError};
use card_file_db::queries::{self, RecordFilter, SortKey, StoreStats};
use card_file_db::schema::{self, SchemaError};
use card_file_model::types::{Record, RecordStatus};
use card_file_model::validate::{validate_description, validate_name, ValidationError};
use rusqlite::Connection;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Record not found: {0}")]
    NotFound(Uuid),
    #[error("Invalid page request: page {page}, size {page_size}")]
    InvalidPage { page: u32, page_size: u32 },
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("Database error: {0}")]
    Store(#[from] OperationError),
}

/// One page of a filtered listing, with totals for pager controls.
#[derive(Debug, Clone)]
pub struct RecordPage {
    pub records: Vec<Record>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
}

impl RecordPage {
    /// Number of pages the full result set spans. Never less than one, so
    /// an empty listing still renders as "page 1 of 1".
    pub fn total_pages(&self) -> u32 {
        ((self.total as u64).div_ceil(self.page_size as u64) as u32).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

/// All record operations over one open database connection.
///
/// The service owns the connection. A frontend that needs access from more
/// than one thread puts the whole service behind its own actor or mutex
/// rather than sharing the connection.
pub struct RecordService {
    conn: Connection,
}

impl RecordService {
    /// Wrap an already-opened connection. The schema must exist.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open (or create) the database file at `path`.
    pub fn open(path: &std::path::Path) -> Result<Self, ServiceError> {
        Ok(Self::new(schema::open_database(path)?))
    }

    /// In-memory store, for tests and demos.
    pub fn open_memory() -> Result<Self, ServiceError> {
        Ok(Self::new(schema::open_memory()?))
    }

    /// Validate and insert a new record. Returns the stored record with its
    /// generated id and timestamps.
    pub fn create(&self, name: &str, description: Option<&str>) -> Result<Record, ServiceError> {
        validate_name(name)?;
        validate_description(description)?;

        let record = Record::new(name, description.map(str::to_string));
        operations::insert_record(&self.conn, &record)?;
        Ok(record)
    }

    /// Fetch a single record, or `None` if the id is unknown.
    pub fn get(&self, id: Uuid) -> Result<Option<Record>, ServiceError> {
        Ok(operations::find_record_by_id(&self.conn, id)?)
    }

    /// List one page of records matching `filter`, in `sort` order.
    ///
    /// Pages are one-based. A zero page or page size is a caller bug and is
    /// reported as [`ServiceError::InvalidPage`] instead of being clamped.
    pub fn list(
        &self,
        filter: &RecordFilter<'_>,
        sort: SortKey,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Record>, ServiceError> {
        if page == 0 || page_size == 0 {
            return Err(ServiceError::InvalidPage { page, page_size });
        }
        let offset = (page - 1).saturating_mul(page_size);
        Ok(queries::list_records(&self.conn, filter, sort, offset, page_size)?)
    }

    /// Count all records matching `filter`, ignoring pagination.
    pub fn count(&self, filter: &RecordFilter<'_>) -> Result<i64, ServiceError> {
        Ok(queries::count_records(&self.conn, filter)?)
    }

    /// List one page together with the unwindowed total.
    pub fn list_page(
        &self,
        filter: &RecordFilter<'_>,
        sort: SortKey,
        page: u32,
        page_size: u32,
    ) -> Result<RecordPage, ServiceError> {
        let records = self.list(filter, sort, page, page_size)?;
        let total = self.count(filter)?;
        Ok(RecordPage {
            records,
            total,
            page,
            page_size,
        })
    }

    /// Validate and overwrite an existing record's editable fields.
    ///
    /// The stored row keeps its id and creation time; `updated_at` is bumped
    /// as part of the write. Returns the record as stored.
    pub fn update(
        &self,
        id: Uuid,
        name: &str,
        description: Option<&str>,
        status: RecordStatus,
    ) -> Result<Record, ServiceError> {
        validate_name(name)?;
        validate_description(description)?;

        let mut record = operations::find_record_by_id(&self.conn, id)?
            .ok_or(ServiceError::NotFound(id))?;
        record.name = name.to_string();
        record.description = description.map(str::to_string);
        record.status = status;
        operations::update_record(&self.conn, &mut record)?;
        Ok(record)
    }

    /// Delete a record if present. Deleting an unknown id is a no-op.
    pub fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let removed = operations::delete_record(&self.conn, id)?;
        if !removed {
            log::debug!("delete of missing record {id} was a no-op");
        }
        Ok(())
    }

    /// Insert demo rows into an empty store. Returns the number added,
    /// which is zero when the store already has records.
    pub fn seed_demo_records(&self) -> Result<usize, ServiceError> {
        let added = operations::seed_demo_records(&self.conn)?;
        if added > 0 {
            log::info!("seeded {added} demo records into empty store");
        }
        Ok(added)
    }

    /// Row counts by status, for a status bar or debug view.
    pub fn stats(&self) -> Result<StoreStats, ServiceError> {
        Ok(queries::store_stats(&self.conn)?)
    }
}
