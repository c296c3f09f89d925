pub mod history;
pub mod ledger;
pub mod method_ledger;
pub mod payment_method;
pub mod snapshot;
