use std::collections::HashSet;

use crate::{
    common::{error::LedgerError, money::Money},
    domain::payment_method::{MethodId, PaymentMethod},
};

/// Ordered payment methods and the running total across them.
///
/// Position-based operations address the collection as it is right now;
/// removing an entry shifts every later position down by one. Callers that
/// hold on to an entry across mutations should keep its [`MethodId`] and
/// resolve it with [`PaymentMethodLedger::position_of`].
#[derive(Debug, Clone, Default)]
pub struct PaymentMethodLedger {
    methods: Vec<PaymentMethod>,
    next_id: u32,
}

impl PaymentMethodLedger {
    pub fn new() -> Self {
        Self {
            methods: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a ledger from stored entries, keeping their ids where present
    /// and unique and assigning fresh ones otherwise.
    pub fn restore<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Option<MethodId>, String, Money)>,
    {
        let entries: Vec<_> = entries.into_iter().collect();
        let max_id = entries
            .iter()
            .filter_map(|(id, _, _)| id.map(|i| i.0))
            .max()
            .unwrap_or(0);

        let mut ledger = Self {
            methods: Vec::with_capacity(entries.len()),
            next_id: max_id.saturating_add(1),
        };
        let mut seen = HashSet::new();
        for (id, name, balance) in entries {
            let id = match id {
                Some(id) if seen.insert(id) => id,
                _ => ledger.allocate_id(),
            };
            seen.insert(id);
            ledger.methods.push(PaymentMethod { id, name, balance });
        }
        ledger
    }

    /// Appends a method unless `name` is blank once trimmed, in which case
    /// nothing happens and `None` is returned. The balance is coerced, so a
    /// non-numeric value becomes zero.
    pub fn add_method(&mut self, name: &str, raw_balance: &str) -> Option<MethodId> {
        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("ignoring payment method with blank name");
            return None;
        }
        let id = self.allocate_id();
        self.methods.push(PaymentMethod {
            id,
            name: name.to_string(),
            balance: Money::coerce(raw_balance),
        });
        tracing::debug!(%id, name, "payment method added");
        Some(id)
    }

    pub fn rename_method(&mut self, position: usize, new_name: &str) -> Result<(), LedgerError> {
        let method = self.get_mut(position)?;
        method.name = new_name.trim().to_string();
        Ok(())
    }

    /// Returns the balance actually stored after coercion.
    pub fn set_balance(&mut self, position: usize, raw_value: &str) -> Result<Money, LedgerError> {
        let method = self.get_mut(position)?;
        method.balance = Money::coerce(raw_value);
        Ok(method.balance)
    }

    pub fn remove_method(&mut self, position: usize) -> Result<PaymentMethod, LedgerError> {
        self.check(position)?;
        Ok(self.methods.remove(position))
    }

    pub fn compute_total(&self) -> Money {
        self.methods.iter().map(|m| m.balance).sum()
    }

    pub fn position_of(&self, id: MethodId) -> Option<usize> {
        self.methods.iter().position(|m| m.id == id)
    }

    pub fn get(&self, position: usize) -> Option<&PaymentMethod> {
        self.methods.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaymentMethod> {
        self.methods.iter()
    }

    pub fn as_slice(&self) -> &[PaymentMethod] {
        &self.methods
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    fn allocate_id(&mut self) -> MethodId {
        let id = MethodId(self.next_id.max(1));
        self.next_id = id.0.saturating_add(1);
        id
    }

    fn check(&self, position: usize) -> Result<(), LedgerError> {
        if position < self.methods.len() {
            Ok(())
        } else {
            Err(LedgerError::IndexOutOfRange {
                position,
                len: self.methods.len(),
            })
        }
    }

    fn get_mut(&mut self, position: usize) -> Result<&mut PaymentMethod, LedgerError> {
        self.check(position)?;
        Ok(&mut self.methods[position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper: the three-method ledger used across tests.
    fn sample() -> PaymentMethodLedger {
        let mut ledger = PaymentMethodLedger::new();
        ledger.add_method("Wallet", "500");
        ledger.add_method("QNB", "10000");
        ledger.add_method("Card", "-200");
        ledger
    }

    #[test]
    fn total_sums_signed_balances() {
        assert_eq!(sample().compute_total(), Money::units(10300));
        assert_eq!(PaymentMethodLedger::new().compute_total(), Money::zero());
    }

    #[test]
    fn blank_name_is_rejected_silently() {
        let mut ledger = sample();
        assert_eq!(ledger.add_method("", "100"), None);
        assert_eq!(ledger.add_method("   ", "100"), None);
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.compute_total(), Money::units(10300));
    }

    #[test]
    fn add_trims_name_and_coerces_balance() {
        let mut ledger = PaymentMethodLedger::new();
        let id = ledger.add_method("  Savings ", "lots").unwrap();
        let method = ledger.get(0).unwrap();
        assert_eq!(method.id, id);
        assert_eq!(method.name, "Savings");
        assert_eq!(method.balance, Money::zero());
    }

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut ledger = sample();
        let ids: Vec<_> = ledger.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![MethodId(1), MethodId(2), MethodId(3)]);

        ledger.remove_method(2).unwrap();
        let id = ledger.add_method("New", "1").unwrap();
        assert_eq!(id, MethodId(4));
    }

    #[test]
    fn set_balance_updates_total() {
        let mut ledger = sample();
        assert_eq!(ledger.set_balance(0, "750.25").unwrap(), Money::coerce("750.25"));
        assert_eq!(ledger.set_balance(2, "oops").unwrap(), Money::zero());
        assert_eq!(ledger.compute_total(), Money::coerce("10750.25"));
    }

    #[test]
    fn rename_replaces_with_trimmed_name() {
        let mut ledger = sample();
        ledger.rename_method(1, "  Bank  ").unwrap();
        assert_eq!(ledger.get(1).unwrap().name, "Bank");
    }

    #[test]
    fn remove_shifts_later_positions() {
        let mut ledger = sample();
        let removed = ledger.remove_method(0).unwrap();
        assert_eq!(removed.name, "Wallet");
        assert_eq!(ledger.get(0).unwrap().name, "QNB");
        assert_eq!(ledger.position_of(MethodId(3)), Some(1));
        assert_eq!(ledger.position_of(MethodId(1)), None);
    }

    #[test]
    fn invalid_positions_are_reported() {
        let mut ledger = sample();
        let expected = LedgerError::IndexOutOfRange { position: 5, len: 3 };
        assert_eq!(ledger.remove_method(5).unwrap_err(), expected);
        assert_eq!(ledger.rename_method(5, "x").unwrap_err(), expected);
        assert_eq!(ledger.set_balance(5, "1").unwrap_err(), expected);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn restore_keeps_ids_and_fills_gaps() {
        let ledger = PaymentMethodLedger::restore(vec![
            (Some(MethodId(7)), "A".to_string(), Money::units(1)),
            (None, "B".to_string(), Money::units(2)),
            (Some(MethodId(7)), "C".to_string(), Money::units(3)),
        ]);
        let ids: Vec<_> = ledger.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![MethodId(7), MethodId(8), MethodId(9)]);
        assert_eq!(ledger.compute_total(), Money::units(6));
    }

    #[test]
    fn total_of_largest_balances_is_exact() {
        let mut ledger = PaymentMethodLedger::new();
        ledger.add_method("A", "1000000000000");
        ledger.add_method("B", "1000000000000");
        ledger.add_method("C", "900000000000000");

        // the third balance is beyond the accepted range and stored as zero
        assert_eq!(ledger.get(2).unwrap().balance, Money::zero());
        assert_eq!(ledger.compute_total(), Money::units(2_000_000_000_000));
    }
}
