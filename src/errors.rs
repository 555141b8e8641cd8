use thiserror::Error;

/// Why a submitted contact was rejected.
///
/// These are surfaced to the caller as a field-level message and never abort
/// the program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Phone number must begin with +")]
    MissingPlusPrefix,

    #[error("Phone number must not contain letters")]
    ContainsLetters,

    #[error("Phone number must contain at least 11 digits, found {0}")]
    TooFewDigits(usize),

    #[error("Phone number is too long: at most 15 digits, found {0}")]
    TooManyDigits(usize),

    #[error("Enter at least one phone number")]
    EmptyPhoneList,

    #[error("{0} is required")]
    MissingRequiredField(&'static str),

    #[error("Unknown category {0:?}, expected one of work, family, friend, other")]
    UnknownCategory(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Search failed: {0}")]
    Search(String),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("No contact id left after {0}")]
    IdsExhausted(i64),

    #[error("Stored contacts could not be read: {0}")]
    PersistenceParse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    /// The validation kind, if this error is a rejected submission.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            AppError::Validation(kind) => Some(kind),
            _ => None,
        }
    }
}
