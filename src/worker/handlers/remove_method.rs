use crate::{
    common::{error::LedgerError, event::Outcome},
    domain::{ledger::Ledger, payment_method::MethodId},
};

pub fn handle(ledger: &mut Ledger, id: MethodId) -> Result<Outcome, LedgerError> {
    let position = super::position_of(ledger, id)?;
    let removed = ledger.methods.remove_method(position)?;
    tracing::debug!(%id, name = %removed.name, "payment method removed");
    Ok(Outcome::Changed)
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::{
        common::{error::LedgerError, money::Money},
        domain::ledger::Ledger,
    };

    #[test]
    fn remove_deletes_only_the_addressed_method() {
        let mut ledger = Ledger::default();
        let a = ledger.methods.add_method("A", "1").unwrap();
        let b = ledger.methods.add_method("B", "2").unwrap();
        let c = ledger.methods.add_method("C", "4").unwrap();

        handle(&mut ledger, b).unwrap();

        let ids: Vec<_> = ledger.methods.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert_eq!(ledger.total(), Money::units(5));
    }

    #[test]
    fn removing_twice_fails_the_second_time() {
        let mut ledger = Ledger::default();
        let a = ledger.methods.add_method("A", "1").unwrap();

        handle(&mut ledger, a).unwrap();
        assert_eq!(handle(&mut ledger, a).unwrap_err(), LedgerError::MethodNotFound(a));
    }
}
