#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use financa_core::{Config, ConfigManager, NewTransaction, TransactionType};
use tempfile::TempDir;

/// Config manager whose ledger lives inside `temp`. Keep the guard alive for the test.
pub fn setup_test_env() -> (TempDir, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    let manager = ConfigManager::with_base_dir(base.clone()).expect("create config manager");
    let config = Config {
        data_dir: Some(base.join("data")),
        ..Config::default()
    };
    manager.save(&config).expect("seed config");
    (temp, manager)
}

pub fn draft(amount: f64, kind: TransactionType, category: &str, day: u32) -> NewTransaction {
    NewTransaction::new(
        amount,
        format!("{category} {day}"),
        kind,
        category,
        Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
    )
}
