use crate::{common::event::LedgerIntent, domain::payment_method::MethodId};
use chrono::NaiveDate;
use std::io::Read;

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers. Only the
/// columns an action needs are read; the rest may stay blank.
struct CsvRow {
    action: String,
    target: Option<u32>,
    name: Option<String>,
    value: Option<String>,
    date: Option<String>,
}

/// Reads user intents from a CSV script.
///
/// Supported headers: `action,target,name,value,date`.
///
/// | action   | uses                  |
/// |----------|-----------------------|
/// | `add`    | `name`, `value`       |
/// | `rename` | `target`, `name`      |
/// | `balance`| `target`, `value`     |
/// | `remove` | `target`              |
/// | `goal`   | `value`               |
/// | `log`    | `date` (or `today`)   |
/// | `unlog`  | `date`                |
///
/// `target` is a payment method id. Amounts are passed through as text and
/// coerced later; dates must be `YYYY-MM-DD`. Errors include the row number.
///
/// # Examples
///
/// ```
/// use cash_ledger::io::reader::read_intents;
/// use cash_ledger::common::event::LedgerIntent;
/// use chrono::NaiveDate;
/// use csv::ReaderBuilder;
///
/// let data = "action,target,name,value,date\n\
/// add,,Wallet,250,\n\
/// log,,,,\n";
/// let today = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let intents: Vec<_> = read_intents(&mut rdr, today).collect();
///
/// assert!(matches!(intents[0], Ok(LedgerIntent::AddMethod { .. })));
/// assert_eq!(intents[1], Ok(LedgerIntent::LogSnapshot { today }));
/// ```
pub fn read_intents<R: Read>(
    rdr: &mut csv::Reader<R>,
    today: NaiveDate,
) -> impl Iterator<Item = Result<LedgerIntent, String>> + '_ {
    rdr.deserialize::<CsvRow>().enumerate().map(move |(i, res)| {
        // header is line 1
        let line = i + 2;
        let row = res.map_err(|e| e.to_string())?;
        let action = row.action.trim().to_ascii_lowercase();

        let target = |row: &CsvRow| {
            row.target
                .map(MethodId)
                .ok_or_else(|| format!("{action} missing target on line {line}"))
        };
        let date = |row: &CsvRow| -> Result<Option<NaiveDate>, String> {
            match row.date.as_deref().map(str::trim) {
                None | Some("") => Ok(None),
                Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map(Some)
                    .map_err(|e| format!("bad date {raw:?} on line {line}: {e}")),
            }
        };
        let text = |field: &Option<String>| field.clone().unwrap_or_default();

        match action.as_str() {
            "add" => Ok(LedgerIntent::AddMethod {
                name: text(&row.name),
                balance: text(&row.value),
            }),
            "rename" => Ok(LedgerIntent::RenameMethod {
                id: target(&row)?,
                name: text(&row.name),
            }),
            "balance" => Ok(LedgerIntent::SetBalance {
                id: target(&row)?,
                raw: text(&row.value),
            }),
            "remove" => Ok(LedgerIntent::RemoveMethod { id: target(&row)? }),
            "goal" => Ok(LedgerIntent::SetGoal {
                raw: text(&row.value),
            }),
            "log" => Ok(LedgerIntent::LogSnapshot {
                today: date(&row)?.unwrap_or(today),
            }),
            "unlog" => {
                let date = date(&row)?.ok_or_else(|| format!("unlog missing date on line {line}"))?;
                Ok(LedgerIntent::DeleteSnapshot { date })
            }
            other => Err(format!("unknown action: {other} on line {line}")),
        }
    })
}
