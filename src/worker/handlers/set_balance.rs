use crate::{
    common::{error::LedgerError, event::Outcome},
    domain::{ledger::Ledger, payment_method::MethodId},
};

pub fn handle(ledger: &mut Ledger, id: MethodId, raw: &str) -> Result<Outcome, LedgerError> {
    let position = super::position_of(ledger, id)?;
    let balance = ledger.methods.set_balance(position, raw)?;
    tracing::debug!(%id, %balance, "balance updated");
    Ok(Outcome::Changed)
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::{
        common::{error::LedgerError, money::Money},
        domain::{ledger::Ledger, payment_method::MethodId},
    };

    #[test]
    fn balance_edits_are_reflected_in_total() {
        let mut ledger = Ledger::default();
        let a = ledger.methods.add_method("A", "500").unwrap();
        let b = ledger.methods.add_method("B", "10000").unwrap();

        handle(&mut ledger, a, "-200").unwrap();
        handle(&mut ledger, b, "not a number").unwrap();

        assert_eq!(ledger.total(), Money::units(-200));
    }

    #[test]
    fn balance_for_removed_method_fails() {
        let mut ledger = Ledger::default();
        let a = ledger.methods.add_method("A", "500").unwrap();
        ledger.methods.remove_method(0).unwrap();

        assert_eq!(
            handle(&mut ledger, a, "1").unwrap_err(),
            LedgerError::MethodNotFound(a)
        );
        assert_eq!(ledger.total(), Money::zero());
    }

    #[test]
    fn unknown_id_never_touches_other_methods() {
        let mut ledger = Ledger::default();
        ledger.methods.add_method("A", "500").unwrap();

        assert!(handle(&mut ledger, MethodId(99), "1").is_err());
        assert_eq!(ledger.total(), Money::units(500));
    }
}
