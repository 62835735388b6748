//! Data model types for managed records.
//!
//! A `Record` mirrors one row of the `entities` table. Timestamps are kept
//! at millisecond precision because the store persists them as epoch-millis
//! integers; a stored row round-trips to an equal `Record`.

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

// ── Record ──────────────────────────────────────────────────────────────────

/// The single entity type this application manages.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// Build a fresh record with a random id, `Active` status, and both
    /// timestamps set to now (millisecond precision).
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        let now = Utc::now().trunc_subsecs(3);
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
            status: RecordStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump `updated_at` to now (millisecond precision).
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().trunc_subsecs(3);
    }
}

// ── Status ──────────────────────────────────────────────────────────────────

/// Lifecycle status of a record. Persisted in its `as_str` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    Active,
    Inactive,
    Archived,
}

impl Default for RecordStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl RecordStatus {
    /// All statuses, in display order.
    pub const ALL: [RecordStatus; 3] = [Self::Active, Self::Inactive, Self::Archived];

    /// The stored form of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Archived => "ARCHIVED",
        }
    }

    /// Human-readable label for list views and pickers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Archived => "Archived",
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string cannot be parsed into a `RecordStatus`.
#[derive(Debug, Clone)]
pub struct StatusParseError(pub String);

impl std::fmt::Display for StatusParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown status: '{}'", self.0)
    }
}

impl std::error::Error for StatusParseError {}

impl std::str::FromStr for RecordStatus {
    type Err = StatusParseError;

    /// Parse a status from its stored form (case-insensitive).
    ///
    /// Unknown strings are an error, not a default: a row carrying a status
    /// outside the closed set means the store is corrupt.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "ARCHIVED" => Ok(Self::Archived),
            _ => Err(StatusParseError(s.to_string())),
        }
    }
}
