use std::io::Write;

use crate::{
    common::money::Money,
    domain::{
        payment_method::PaymentMethod,
        snapshot::{SnapshotEntry, Trend},
    },
};

#[derive(serde::Serialize)]
/// Internal CSV row for the payment-method report: `id,name,balance`.
struct MethodRow<'a> {
    id: String,
    name: &'a str,
    balance: String,
}

#[derive(serde::Serialize)]
/// Internal CSV row for the snapshot report:
/// `date,total,gain_loss,remainder,trend`.
struct SnapshotRow {
    date: String,
    total: String,
    gain_loss: String,
    remainder: String,
    trend: &'static str,
}

/// Writes payment methods in ledger order, followed by a `total` row carrying
/// the aggregate balance. Amounts use 4 decimal places.
///
/// # Examples
///
/// ```
/// use cash_ledger::domain::method_ledger::PaymentMethodLedger;
/// use cash_ledger::io::writer::write_methods;
///
/// let mut ledger = PaymentMethodLedger::new();
/// ledger.add_method("QNB", "10000");
///
/// let mut out = Vec::new();
/// write_methods(&mut out, ledger.as_slice(), ledger.compute_total()).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "id,name,balance\n1,QNB,10000.0000\ntotal,,10000.0000\n");
/// ```
pub fn write_methods<W: Write>(
    writer: W,
    methods: &[PaymentMethod],
    total: Money,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for method in methods {
        wtr.serialize(MethodRow {
            id: method.id.0.to_string(),
            name: &method.name,
            balance: method.balance.to_string_4dp(),
        })?;
    }
    wtr.serialize(MethodRow {
        id: "total".to_string(),
        name: "",
        balance: total.to_string_4dp(),
    })?;

    wtr.flush()?;
    Ok(())
}

/// Writes snapshots in the order given (callers pass them newest first). The
/// `trend` column classifies gain/loss as `gain`, `loss` or `flat`.
pub fn write_snapshots<'a, W, I>(writer: W, entries: I) -> Result<(), csv::Error>
where
    W: Write,
    I: IntoIterator<Item = &'a SnapshotEntry>,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written by hand so an empty history still gets a header.
    wtr.write_record(["date", "total", "gain_loss", "remainder", "trend"])?;
    for entry in entries {
        wtr.serialize(SnapshotRow {
            date: entry.date.format("%Y-%m-%d").to_string(),
            total: entry.total.to_string_4dp(),
            gain_loss: entry.gain_loss.to_string_4dp(),
            remainder: entry.remainder.to_string_4dp(),
            trend: Trend::of(entry.gain_loss).as_str(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
