use chrono::NaiveDate;

use crate::{
    common::{error::LedgerError, event::Outcome},
    domain::ledger::Ledger,
};

pub fn handle(ledger: &mut Ledger, date: NaiveDate) -> Result<Outcome, LedgerError> {
    match ledger.history.delete_entry(date) {
        Some(_) => Ok(Outcome::Changed),
        None => Ok(Outcome::Unchanged),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::handle;
    use crate::{
        common::{event::Outcome, money::Money},
        domain::ledger::Ledger,
    };

    #[test]
    fn delete_by_date_is_a_noop_when_absent() {
        let mut ledger = Ledger::default();
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        ledger.history.log_snapshot(Money::units(1), Money::zero(), day);

        let other = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(handle(&mut ledger, other).unwrap(), Outcome::Unchanged);
        assert_eq!(handle(&mut ledger, day).unwrap(), Outcome::Changed);
        assert!(ledger.history.is_empty());
    }
}
