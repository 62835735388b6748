//! Row-level CRUD operations for the entities table.

use card_file_model::types::{Record, RecordStatus};
use chrono::{DateTime, Duration, SubsecRound, Utc};
use rusqlite::{params, Connection};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

// ── Record Operations ───────────────────────────────────────────────────────

/// Insert a new record row.
///
/// Fails on a duplicate id or a CHECK constraint violation.
pub fn insert_record(conn: &Connection, record: &Record) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO entities (id, name, description, status, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            record.id.to_string(),
            record.name,
            record.description,
            record.status.as_str(),
            record.created_at.timestamp_millis(),
            record.updated_at.timestamp_millis(),
        ],
    )?;
    Ok(())
}

/// Find a record by id. Returns `None` when no row matches.
pub fn find_record_by_id(conn: &Connection, id: Uuid) -> Result<Option<Record>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, description, status, created_at, updated_at
         FROM entities WHERE id = ?1",
    )?;
    let result = stmt.query_row(params![id.to_string()], row_to_record);
    match result {
        Ok(r) => Ok(Some(r)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Overwrite a record's mutable fields, refreshing `updated_at` in place.
///
/// Returns `false` when no row with this id exists (the update silently
/// affects zero rows). `created_at` is never rewritten.
pub fn update_record(conn: &Connection, record: &mut Record) -> Result<bool, OperationError> {
    record.touch();
    let changed = conn.execute(
        "UPDATE entities SET name = ?2, description = ?3, status = ?4, updated_at = ?5
         WHERE id = ?1",
        params![
            record.id.to_string(),
            record.name,
            record.description,
            record.status.as_str(),
            record.updated_at.timestamp_millis(),
        ],
    )?;
    Ok(changed > 0)
}

/// Delete a record by id. Deleting an absent id is a no-op.
///
/// Returns `true` when a row was removed.
pub fn delete_record(conn: &Connection, id: Uuid) -> Result<bool, OperationError> {
    let removed = conn.execute(
        "DELETE FROM entities WHERE id = ?1",
        params![id.to_string()],
    )?;
    Ok(removed > 0)
}

// ── Seeding ─────────────────────────────────────────────────────────────────

/// Insert three sample records when the table is empty, so a fresh store
/// has something to show on first launch.
///
/// Returns the number of rows inserted; zero when the table already has
/// data.
pub fn seed_demo_records(conn: &Connection) -> Result<usize, OperationError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM entities", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(0);
    }

    let now = Utc::now().trunc_subsecs(3);
    let samples = [
        (
            "First sample task",
            "Walks through creating a record",
            RecordStatus::Active,
            Duration::days(1),
        ),
        (
            "Second sample task",
            "Shows the search and filter bar",
            RecordStatus::Active,
            Duration::hours(12),
        ),
        (
            "Third sample task",
            "An inactive record for status filters",
            RecordStatus::Inactive,
            Duration::hours(6),
        ),
    ];

    for (name, description, status, age) in samples {
        let created = now - age;
        let record = Record {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: Some(description.to_string()),
            status,
            created_at: created,
            updated_at: created,
        };
        insert_record(conn, &record)?;
    }

    Ok(samples.len())
}

// ── Row Mapping ─────────────────────────────────────────────────────────────

/// Map a `SELECT id, name, description, status, created_at, updated_at` row.
///
/// A malformed id, an unknown status, or an out-of-range timestamp is a
/// decode failure, not a silently defaulted value.
pub(crate) fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<Record> {
    let id_str: String = row.get(0)?;
    let id = Uuid::parse_str(&id_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let status_str: String = row.get(3)?;
    let status = status_str.parse::<RecordStatus>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Record {
        id,
        name: row.get(1)?,
        description: row.get(2)?,
        status,
        created_at: millis_to_datetime(row.get(4)?, 4)?,
        updated_at: millis_to_datetime(row.get(5)?, 5)?,
    })
}

fn millis_to_datetime(millis: i64, col: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(col, millis))
}
