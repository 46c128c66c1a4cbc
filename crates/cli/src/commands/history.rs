//! Prints the persisted history log.

use std::path::PathBuf;

use anyhow::Result;
use maxpain_core::ConfigLoader;
use maxpain_data::HistoryStore;

pub fn run(config_path: &str) -> Result<()> {
    let config = ConfigLoader::load_from(config_path)?;
    let store = HistoryStore::new(PathBuf::from(&config.store.history_path));
    let log = store.load();

    if log.is_empty() {
        println!("History log is empty ({})", store.path().display());
        return Ok(());
    }

    println!("{:<12} {:>12} {:>12} {:>6}", "date", "spot", "pain", "score");
    for entry in &log {
        println!(
            "{:<12} {:>12} {:>12} {:>6}",
            entry.date,
            entry.spot,
            entry
                .primary_pain
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            entry
                .score
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
    }
    println!("{} entries", log.len());

    Ok(())
}
