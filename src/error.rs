use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotelError {
    #[error("{kind} file '{}' not found.", path.display())]
    DataFileNotFound { kind: DataKind, path: PathBuf },

    #[error("Invalid JSON in {} file - {source}", kind.as_lower())]
    InvalidJson {
        kind: DataKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),
}

pub type Result<T> = std::result::Result<T, HotelError>;

/// Which of the two inventory files an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Hotels,
    Bookings,
}

impl DataKind {
    fn as_lower(self) -> &'static str {
        match self {
            Self::Hotels => "hotels",
            Self::Bookings => "bookings",
        }
    }
}

impl std::fmt::Display for DataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hotels => write!(f, "Hotels"),
            Self::Bookings => write!(f, "Bookings"),
        }
    }
}

/// Rejections produced by the console before a query reaches the engine.
/// The messages are printed verbatim to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid Availability format.")]
    InvalidAvailability,

    #[error("Invalid Search format.")]
    InvalidSearch,

    #[error("Invalid command")]
    UnknownCommand,
}
