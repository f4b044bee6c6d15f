use std::fmt;
use std::path::Path;

use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, OpenFlags};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ReportError, Result};

/// Core value types for SQLite result columns
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl From<SqlValue> for Value {
    fn from(value: SqlValue) -> Self {
        match value {
            SqlValue::Null => Value::Null,
            SqlValue::Integer(i) => Value::Integer(i),
            SqlValue::Real(f) => Value::Real(f),
            SqlValue::Text(s) => Value::Text(s),
            SqlValue::Blob(b) => Value::Blob(b),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Integer(i) => write!(f, "{i}"),
            // Debug keeps the fractional part on whole numbers (25.0, not 25).
            Value::Real(r) => write!(f, "{r:?}"),
            Value::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Value::Blob(bytes) => {
                f.write_str("x'")?;
                for byte in bytes {
                    write!(f, "{byte:02x}")?;
                }
                f.write_str("'")
            }
        }
    }
}

/// One result row, columns in select order
pub type Row = Vec<Value>;

/// All rows fetched by a single query, with their column names
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportTable {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

/// Read-only handle on the reports database.
///
/// The connection is released when the handle is dropped; use
/// [`ReportDatabase::close`] to observe a close failure.
#[derive(Debug)]
pub struct ReportDatabase {
    conn: Connection,
}

impl ReportDatabase {
    /// Open an existing database file read-only. Never creates the file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags).map_err(|source| ReportError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            path = %path.display(),
            sqlite_version = rusqlite::version(),
            "opened reports database"
        );
        Ok(Self { conn })
    }

    /// Wrap a connection that is already open.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Run a parameter-free statement and fetch every row.
    pub fn query(&self, sql: &str) -> rusqlite::Result<ReportTable> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let width = columns.len();

        let rows = stmt
            .query_map([], |row| {
                (0..width)
                    .map(|idx| row.get::<_, SqlValue>(idx).map(Value::from))
                    .collect::<rusqlite::Result<Row>>()
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!(columns = width, rows = rows.len(), "query fetched");
        Ok(ReportTable { columns, rows })
    }

    /// Close the connection, reporting any failure.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, source)| ReportError::Close(source))?;
        debug!("closed reports database");
        Ok(())
    }
}
