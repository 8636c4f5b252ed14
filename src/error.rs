//! Error types for the SQL session store.

use sea_orm::DbErr;
use thiserror::Error;
use tower_sessions::session_store;

/// A `Result` alias where the `Err` case is [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by [`SqlSessionStore`](crate::SqlSessionStore) operations.
///
/// Connection establishment and connection teardown report
/// [`Error::Connection`]; everything the database reports while executing a
/// statement is surfaced verbatim as [`Error::Query`]. Serialization problems
/// are split by direction so callers can tell a bad write request apart from a
/// corrupt stored row.
#[derive(Debug, Error)]
pub enum Error {
    /// The database connection could not be established or torn down cleanly.
    #[error("database connection unavailable: {0}")]
    Connection(#[source] DbErr),

    /// The database reported a failure executing a statement.
    #[error("session query failed: {0}")]
    Query(#[from] DbErr),

    /// The session payload could not be serialized. No SQL was executed.
    #[error("failed to serialize session data: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A stored row holds data that is not valid serialized content. This is
    /// a data-integrity error, distinct from "session not found".
    #[error("failed to deserialize session data for session `{id}`")]
    Deserialization {
        /// The id of the offending session row.
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// The store configuration forbids the requested operation.
    #[error("{0}")]
    Configuration(String),
}

impl From<Error> for session_store::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Serialization(e) => session_store::Error::Encode(e.to_string()),
            e @ Error::Deserialization { .. } => session_store::Error::Decode(e.to_string()),
            e => session_store::Error::Backend(e.to_string()),
        }
    }
}
