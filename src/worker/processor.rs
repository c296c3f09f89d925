use crate::{
    common::{
        error::LedgerError,
        event::{LedgerIntent, Outcome},
    },
    domain::ledger::Ledger,
    worker::handlers::{
        add_method, delete_snapshot, log_snapshot, remove_method, rename_method, set_balance,
        set_goal,
    },
};

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(
        &mut self,
        ledger: &mut Ledger,
        intent: LedgerIntent,
    ) -> Result<Outcome, LedgerError> {
        match intent {
            LedgerIntent::AddMethod { name, balance } => {
                add_method::handle(ledger, &name, &balance)
            }
            LedgerIntent::RenameMethod { id, name } => rename_method::handle(ledger, id, &name),
            LedgerIntent::SetBalance { id, raw } => set_balance::handle(ledger, id, &raw),
            LedgerIntent::RemoveMethod { id } => remove_method::handle(ledger, id),
            LedgerIntent::SetGoal { raw } => set_goal::handle(ledger, &raw),
            LedgerIntent::LogSnapshot { today } => log_snapshot::handle(ledger, today),
            LedgerIntent::DeleteSnapshot { date } => delete_snapshot::handle(ledger, date),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{common::money::Money, domain::payment_method::MethodId};

    #[test]
    fn routes_each_intent_to_its_handler() {
        let mut ledger = Ledger::default();
        let mut processor = Processor::new();
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let intents = vec![
            LedgerIntent::AddMethod { name: "A".into(), balance: "100".into() },
            LedgerIntent::AddMethod { name: "B".into(), balance: "50".into() },
            LedgerIntent::RenameMethod { id: MethodId(1), name: "Main".into() },
            LedgerIntent::SetBalance { id: MethodId(2), raw: "70".into() },
            LedgerIntent::SetGoal { raw: "1000".into() },
            LedgerIntent::LogSnapshot { today: day },
            LedgerIntent::RemoveMethod { id: MethodId(2) },
        ];
        for intent in intents {
            assert_eq!(processor.process(&mut ledger, intent).unwrap(), Outcome::Changed);
        }

        assert_eq!(ledger.methods.len(), 1);
        assert_eq!(ledger.methods.get(0).unwrap().name, "Main");
        assert_eq!(ledger.total(), Money::units(100));
        assert_eq!(ledger.history.get(day).unwrap().total, Money::units(170));
        assert_eq!(ledger.history.get(day).unwrap().remainder, Money::units(-830));

        let outcome = processor
            .process(&mut ledger, LedgerIntent::DeleteSnapshot { date: day })
            .unwrap();
        assert_eq!(outcome, Outcome::Changed);
        assert!(ledger.history.is_empty());
    }

    #[test]
    fn failed_intent_leaves_state_intact() {
        let mut ledger = Ledger::default();
        let mut processor = Processor::new();
        processor
            .process(&mut ledger, LedgerIntent::AddMethod { name: "A".into(), balance: "5".into() })
            .unwrap();

        let err = processor
            .process(&mut ledger, LedgerIntent::RemoveMethod { id: MethodId(9) })
            .unwrap_err();

        assert_eq!(err, LedgerError::MethodNotFound(MethodId(9)));
        assert_eq!(ledger.total(), Money::units(5));
    }
}
