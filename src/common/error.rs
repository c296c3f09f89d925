use crate::domain::payment_method::MethodId;

/// Failures of a single ledger operation. None of them are fatal: the caller
/// can re-issue the intent with valid input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("payment method position {position} is out of range (ledger holds {len})")]
    IndexOutOfRange { position: usize, len: usize },
    #[error("payment method {0} does not exist")]
    MethodNotFound(MethodId),
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("store i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store encoding error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing intents csv path. usage: cash_ledger <intents.csv> [settings.json]")]
    MissingArg,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
