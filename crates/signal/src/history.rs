//! History log append rules.
//!
//! The log is an ordered sequence keyed by ascending date, at most one
//! entry per day, bounded to a fixed number of entries. Appending is the
//! only mutation; the retention trim is the only way an entry is ever
//! removed.

use maxpain_core::types::LogEntry;
use tracing::debug;

/// Appends `candidate` unless the log already ends with the same date
/// (first write of the day wins), then trims to the most recent
/// `retention` entries, oldest dropped first.
pub fn append_if_new_day(
    mut log: Vec<LogEntry>,
    candidate: LogEntry,
    retention: usize,
) -> Vec<LogEntry> {
    if log.last().map(|entry| entry.date) == Some(candidate.date) {
        debug!(date = %candidate.date, "log already has an entry for today, keeping first write");
        return log;
    }

    log.push(candidate);
    if log.len() > retention {
        let excess = log.len() - retention;
        log.drain(..excess);
    }
    log
}
