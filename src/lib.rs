//! Fixed analytical reports over the country club SQLite database.
//!
//! # Intention
//!
//! - Open one database file, run five fixed read-only queries, print the rows.
//! - Keep the connection scoped to the run and fail fast when it cannot open.
//!
//! # Architectural Boundaries
//!
//! - Only SQLite/reporting code belongs here.
//! - No writes, no schema management, no ad-hoc queries.

pub mod config;
pub mod error;
pub mod render;
pub mod reports;
pub mod sqlite;

pub use error::{ReportError, Result};
pub use render::OutputFormat;
pub use reports::{run_all, Report};
pub use sqlite::{ReportDatabase, ReportTable, Row, Value};
