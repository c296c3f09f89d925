use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::money::Money;

/// Stable identity of a payment method, assigned by the owning ledger and
/// never reused by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodId(pub u32);

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethod {
    pub id: MethodId,
    /// Display label, not required to be unique.
    pub name: String,
    /// Negative for debt or overdraft.
    pub balance: Money,
}
