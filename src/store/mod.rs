pub mod habits;
pub mod journal;
pub mod ledger;
pub mod status;
pub mod types;
pub mod users;

use chrono::NaiveDate;

/// Storage format for calendar dates. Zero-padded so that lexicographic
/// ordering of the TEXT column matches chronological ordering.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors surfaced by the store layer. The HTTP layer maps these to status
/// codes without string matching.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("invalid date {input:?}: expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: &str) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Parse a caller-supplied calendar date string.
///
/// The input is held to exactly `YYYY-MM-DD` before chrono sees it: `%Y` on
/// its own also admits sign-prefixed years such as `+10000-01-01`, which
/// would not collate chronologically in the TEXT date column.
pub fn parse_date(input: &str) -> Result<NaiveDate, StoreError> {
    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });
    if !well_formed {
        return Err(StoreError::InvalidDate {
            input: input.to_string(),
        });
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| StoreError::InvalidDate {
        input: input.to_string(),
    })
}

/// A UNIQUE or PRIMARY KEY violation. Used to detect when a concurrent write
/// already claimed a key this operation was about to insert.
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}
