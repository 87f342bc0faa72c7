use thiserror::Error;

use crate::prefs::PrefType;

#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Preference '{key}' holds {found}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: PrefType,
        found: PrefType,
    },
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Preference error: {0}")]
    Prefs(#[from] PrefsError),

    #[error("Dialog is already closed")]
    DialogClosed,

    #[error("Session restart failed: {0}")]
    Restart(String),
}
