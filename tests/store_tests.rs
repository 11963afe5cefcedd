use chrono::NaiveDate;
use subtrack_core::config::{Config, ConfigManager};
use subtrack_core::core::services::ExpenseService;
use subtrack_core::core::store::{ExpensePatch, ExpenseStore, InMemoryStore};
use subtrack_core::domain::{
    BillingCycle, Expense, ExpenseBook, ExpenseCategory, ExpenseType,
};
use subtrack_core::storage::{export_expenses, JsonStorage, StorageBackend};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_expense() -> Expense {
    Expense::new(
        "Vercel",
        20.0,
        ExpenseCategory::Development,
        ExpenseType::Recurring,
        date(2024, 1, 15),
    )
    .with_description("Pro plan for hosting")
    .with_billing_cycle(BillingCycle::Monthly)
    .with_next_renewal(date(2025, 7, 15))
    .with_tags(["hosting"])
    .with_usefulness(9)
}

#[test]
fn store_crud_roundtrip() {
    let mut store = InMemoryStore::new(ExpenseBook::new("default"));
    let id = ExpenseService::add(&mut store, sample_expense()).unwrap();
    assert_eq!(store.list().len(), 1);

    ExpenseService::edit(
        &mut store,
        id,
        ExpensePatch {
            amount: Some(24.0),
            notes: Some("price bump".into()),
            ..Default::default()
        },
    )
    .unwrap();
    let edited = store.get(id).unwrap();
    assert_eq!(edited.amount, 24.0);
    assert_eq!(edited.notes.as_deref(), Some("price bump"));
    assert_eq!(edited.name, "Vercel");

    let removed = ExpenseService::remove(&mut store, id).unwrap();
    assert_eq!(removed.id, id);
    assert!(store.list().is_empty());
}

#[test]
fn book_persistence_roundtrips_through_json() {
    let dir = TempDir::new().unwrap();
    let storage = JsonStorage::with_books_dir(dir.path().join("books"));

    let mut book = ExpenseBook::new("default");
    book.add_expense(sample_expense());
    storage.save(&book, "default").unwrap();

    let loaded = storage.load("default").unwrap();
    assert_eq!(loaded.id, book.id);
    assert_eq!(loaded.expenses, book.expenses);
    assert_eq!(storage.list_books().unwrap(), ["default"]);
}

#[test]
fn saving_twice_overwrites_atomically() {
    let dir = TempDir::new().unwrap();
    let storage = JsonStorage::with_books_dir(dir.path().join("books"));

    let mut book = ExpenseBook::new("default");
    storage.save(&book, "default").unwrap();
    book.add_expense(sample_expense());
    storage.save(&book, "default").unwrap();

    let loaded = storage.load("default").unwrap();
    assert_eq!(loaded.expense_count(), 1);
    // no stray staging files left behind
    let leftovers: Vec<_> = std::fs::read_dir(dir.path().join("books"))
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn export_writes_the_dated_collection_document() {
    let dir = TempDir::new().unwrap();
    let expenses = vec![sample_expense()];
    let path = export_expenses(&expenses, dir.path(), date(2025, 7, 18)).unwrap();
    assert!(path.ends_with("expenses-2025-07-18.json"));

    let parsed: Vec<Expense> = serde_json::from_str(&std::fs::read_to_string(path).unwrap())
        .unwrap();
    assert_eq!(parsed, expenses);
}

#[test]
fn config_persists_settings_and_shell_state() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(dir.path().join("config.json"));

    let mut config = Config::default();
    config.settings.renewal_alert_days = 14;
    config.last_opened_book = Some("side-project".into());
    manager.save(&config).unwrap();

    let loaded = manager.load().unwrap();
    assert_eq!(loaded.settings.renewal_alert_days, 14);
    assert_eq!(loaded.last_opened_book.as_deref(), Some("side-project"));
}
