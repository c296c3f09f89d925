//! Runtime settings for the ledger binary.
//!
//! Settings come from an optional JSON file. Every field has a default, so an
//! empty object (or no file at all) is a valid configuration:
//!
//! ```json
//! {
//!   "store_path": "cash_ledger.json",
//!   "default_goal": 10000,
//!   "seed_methods": [{ "name": "QNB", "balance": 10000 }],
//!   "log_level": "info"
//! }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    common::{error::AppError, money::Money},
    io::store::{StoredMethod, StoredState},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the JSON ledger document lives.
    pub store_path: PathBuf,
    /// Goal used when the store has none.
    pub default_goal: Money,
    /// Methods a brand-new ledger starts with.
    pub seed_methods: Vec<SeedMethod>,
    /// Default log filter; `RUST_LOG` takes precedence.
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedMethod {
    pub name: String,
    #[serde(default)]
    pub balance: Money,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("cash_ledger.json"),
            default_goal: Money::units(10000),
            seed_methods: vec![
                SeedMethod::new("Vodafone Cash", Money::units(500)),
                SeedMethod::new("QNB", Money::units(10000)),
                SeedMethod::new("Cash", Money::units(-200)),
            ],
            log_level: "info".to_string(),
        }
    }
}

impl SeedMethod {
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("reading {}: {e}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("parsing {}: {e}", path.display())))
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// State a ledger starts from when nothing has been saved yet.
    pub fn initial_state(&self) -> StoredState {
        StoredState {
            payment_methods: self
                .seed_methods
                .iter()
                .map(|s| StoredMethod::new(s.name.clone(), s.balance))
                .collect(),
            snapshots: Vec::new(),
            goal: Some(self.default_goal),
        }
    }
}
