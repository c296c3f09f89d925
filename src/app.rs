use std::{
    io::{BufWriter, Write, stdout},
    path::PathBuf,
};

use crate::{
    common::{config::Settings, error::AppError, event::Outcome},
    io::{json_store::JsonFileStore, reader, writer},
    service::LedgerService,
};

/// Settings named by `args[2]`, or the defaults when none is given.
pub fn settings_from_args(args: &[String]) -> Result<Settings, AppError> {
    Settings::load_or_default(args.get(2).map(PathBuf::from).as_deref())
}

/// Runs an intent script against the configured ledger file, then prints the
/// payment-method and snapshot reports to stdout.
///
/// `args[1]` is the intents CSV; `settings` come from [`settings_from_args`].
pub fn run(args: &[String], settings: &Settings) -> Result<(), AppError> {
    if args.len() < 2 {
        return Err(AppError::MissingArg);
    }
    let store = JsonFileStore::new(settings.store_path.clone());
    let service = LedgerService::open(store, settings)?;

    let file = std::fs::File::open(&args[1])?;
    let today = chrono::Utc::now().date_naive();
    let service = replay(service, file, today)?;

    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_reports(&mut out, &service)?;
    out.flush()?;
    Ok(())
}

/// Applies every intent in `input` in order. Parse errors abort the run; an
/// intent the ledger rejects is logged and skipped.
pub fn replay<S, R>(
    mut service: LedgerService<S>,
    input: R,
    today: chrono::NaiveDate,
) -> Result<LedgerService<S>, AppError>
where
    S: crate::io::store::LedgerStore,
    R: std::io::Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let mut applied = 0usize;
    for intent in reader::read_intents(&mut rdr, today) {
        let intent = intent.map_err(AppError::Parse)?;
        match service.apply(intent.clone()) {
            Ok(Outcome::Changed) => applied += 1,
            Ok(Outcome::Unchanged) => tracing::debug!(?intent, "intent left the ledger unchanged"),
            Err(e) => tracing::warn!(?intent, error = %e, "intent rejected"),
        }
    }
    tracing::info!(applied, "intent script replayed");
    Ok(service)
}

/// Payment methods first, a blank line, then snapshots newest first.
pub fn write_reports<W, S>(out: &mut W, service: &LedgerService<S>) -> Result<(), AppError>
where
    W: Write,
    S: crate::io::store::LedgerStore,
{
    writer::write_methods(&mut *out, service.methods(), service.total())?;
    writeln!(out)?;
    writer::write_snapshots(&mut *out, service.snapshots())?;
    Ok(())
}
