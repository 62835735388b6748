//! Listing and counting queries for the entities table.
//!
//! Filter, sort, and windowing criteria compose into exactly one SELECT,
//! and the matching COUNT reuses the same predicate builder so pagination
//! math always agrees with the listing.

use card_file_model::types::{Record, RecordStatus};
use rusqlite::types::ToSql;
use rusqlite::{params, Connection};

use crate::operations::{row_to_record, OperationError};

// ── Filter & Sort ───────────────────────────────────────────────────────────

/// Optional predicates for listing and counting records.
///
/// `search` is ignored when blank after trimming; otherwise the untrimmed
/// text must appear in the name or the description. Matching uses SQLite's
/// `LIKE`, so ASCII letters compare case-insensitively and `%`/`_` keep
/// their wildcard meaning.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter<'a> {
    pub search: Option<&'a str>,
    pub status: Option<RecordStatus>,
}

/// Sort order for record listings.
///
/// Every ordering ends with `id`, so rows with equal sort keys paginate
/// deterministically across repeated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending name, in the store's byte order.
    Name,
    /// Oldest first.
    CreatedAt,
    /// Most recently updated first.
    UpdatedAt,
    /// Newest first.
    Latest,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::Latest
    }
}

impl SortKey {
    /// Map a UI sort name to a key. Unrecognized names fall back to `Latest`.
    pub fn from_str_loose(s: &str) -> Self {
        match s {
            "name" => Self::Name,
            "createdAt" => Self::CreatedAt,
            "updatedAt" => Self::UpdatedAt,
            _ => Self::Latest,
        }
    }

    fn order_clause(&self) -> &'static str {
        match self {
            Self::Name => " ORDER BY name, id",
            Self::CreatedAt => " ORDER BY created_at, id",
            Self::UpdatedAt => " ORDER BY updated_at DESC, id",
            Self::Latest => " ORDER BY created_at DESC, id",
        }
    }
}

/// Translate a filter into WHERE clause fragments and their bound values.
///
/// SQL text only ever comes from the fixed fragment set; every value is a
/// bound parameter.
fn filter_predicates(filter: &RecordFilter<'_>) -> (Vec<&'static str>, Vec<Box<dyn ToSql>>) {
    let mut clauses: Vec<&'static str> = Vec::new();
    let mut values: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(search) = filter.search {
        if !search.trim().is_empty() {
            let pattern = format!("%{search}%");
            clauses.push("(name LIKE ? OR description LIKE ?)");
            values.push(Box::new(pattern.clone()));
            values.push(Box::new(pattern));
        }
    }

    if let Some(status) = filter.status {
        clauses.push("status = ?");
        values.push(Box::new(status.as_str()));
    }

    (clauses, values)
}

fn where_sql(sql: &mut String, clauses: &[&'static str]) {
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
}

// ── Listing & Counting ──────────────────────────────────────────────────────

/// List records matching `filter`, ordered by `sort`, with the
/// `offset`/`limit` window applied after filtering and sorting.
///
/// Returns an ordered, possibly empty Vec.
pub fn list_records(
    conn: &Connection,
    filter: &RecordFilter<'_>,
    sort: SortKey,
    offset: u32,
    limit: u32,
) -> Result<Vec<Record>, OperationError> {
    let (clauses, mut values) = filter_predicates(filter);

    let mut sql = String::from(
        "SELECT id, name, description, status, created_at, updated_at FROM entities",
    );
    where_sql(&mut sql, &clauses);
    sql.push_str(sort.order_clause());
    sql.push_str(" LIMIT ? OFFSET ?");
    values.push(Box::new(limit));
    values.push(Box::new(offset));

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
    let rows = stmt.query_map(params.as_slice(), row_to_record)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Count records matching `filter`.
///
/// Applies the exact predicates of [`list_records`], with no sort and no
/// window.
pub fn count_records(conn: &Connection, filter: &RecordFilter<'_>) -> Result<i64, OperationError> {
    let (clauses, values) = filter_predicates(filter);

    let mut sql = String::from("SELECT COUNT(*) FROM entities");
    where_sql(&mut sql, &clauses);

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
    let count = stmt.query_row(params.as_slice(), |row| row.get(0))?;
    Ok(count)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get overall store statistics.
pub fn store_stats(conn: &Connection) -> Result<StoreStats, OperationError> {
    let total: i64 = conn.query_row("SELECT COUNT(*) FROM entities", [], |r| r.get(0))?;

    Ok(StoreStats {
        total,
        active: status_count(conn, RecordStatus::Active)?,
        inactive: status_count(conn, RecordStatus::Inactive)?,
        archived: status_count(conn, RecordStatus::Archived)?,
    })
}

fn status_count(conn: &Connection, status: RecordStatus) -> Result<i64, OperationError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM entities WHERE status = ?1",
        params![status.as_str()],
        |r| r.get(0),
    )?;
    Ok(count)
}

/// Summary counts for the record store.
#[derive(Debug)]
pub struct StoreStats {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
    pub archived: i64,
}
