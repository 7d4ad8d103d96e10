//! Unified application error type.
//! All modules (dataset, report, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Source workbook
    // ---------------------------
    #[error("Failed to load spreadsheet: {0}")]
    Load(#[from] calamine::XlsxError),

    #[error("Invalid source workbook: {0}")]
    Source(String),

    // ---------------------------
    // Output workbook
    // ---------------------------
    #[error("Workbook write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
