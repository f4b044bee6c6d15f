use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while opening the database or producing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to open database at {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("report '{report}' failed")]
    Query {
        report: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to close database")]
    Close(#[source] rusqlite::Error),

    #[error("failed to write report output")]
    Output(#[from] std::io::Error),

    #[error("failed to encode report as json")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
