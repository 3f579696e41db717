use crate::config::Config;
use crate::error::Result;
use crate::history::HistoryStore;
use colored::*;

/// 최근 작업 기록을 최신 순으로 출력
pub fn show_history(config: &Config) -> Result<()> {
    let store = HistoryStore::from_config(config);
    let records = store.load()?;

    if records.is_empty() {
        eprintln!("{} No history yet.", "[i]".cyan());
        return Ok(());
    }

    for record in &records {
        let marker = if record.success {
            "[OK]".green()
        } else {
            "[X]".red()
        };

        println!(
            "{} {} {:>7}  {}",
            marker,
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            record.operation,
            record.command
        );
    }

    Ok(())
}
