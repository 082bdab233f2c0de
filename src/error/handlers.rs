//! Error handlers
//!
//! Reporting and exit codes for application errors.

use crate::error::types::AppError;
use log::error;

/// Log an application error
pub fn handle_error(err: &AppError) {
    error!("{}", err);
}

/// Convert error to a process exit code (sysexits)
pub fn exit_code(err: &AppError) -> u8 {
    match err {
        AppError::Config(_) => 78,
        AppError::Io(_) => 74,
    }
}
