mod common;

use std::{env, fs};

use common::draft;
use facil_config::model::HOME_ENV_VAR;
use financa_core::{Config, ConfigManager, FinanceApp, TransactionType};
use tempfile::TempDir;

// Kept in its own test binary: it points the data-directory override at a temp dir.
#[test]
fn corrupt_config_opens_with_defaults() {
    let temp = TempDir::new().expect("create temp dir");
    env::set_var(HOME_ENV_VAR, temp.path().join("data"));
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
    fs::write(manager.config_path(), "{ broken").unwrap();

    let mut app = FinanceApp::open(manager.clone());
    assert_eq!(app.config(), &Config::default());
    assert!(app.should_show_landing());

    app.add_transaction(draft(30.0, TransactionType::Income, "income", 5))
        .expect("add transaction");
    app.enter_app().expect("config rewritten");

    let reopened = FinanceApp::open(manager.clone());
    assert_eq!(reopened.transactions().len(), 1);
    assert!(manager.load().expect("config readable again").intro_seen);
    assert!(!reopened.should_show_landing());
}
