// Copyright (c) 2025 Cashbook Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashbook::ledger;
use cashbook::models::{TransactionDraft, TransactionKind};
use cashbook::store::{MemoryStore, SqliteStore, TransactionStore};
use rusqlite::Connection;

fn draft(kind: TransactionKind, amount: &str, description: &str, date: &str) -> TransactionDraft {
    TransactionDraft::new(
        kind,
        amount.parse().unwrap(),
        description,
        chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
    )
    .unwrap()
}

fn sqlite_store() -> SqliteStore {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE transactions(
            id TEXT PRIMARY KEY,
            kind TEXT NOT NULL,
            amount TEXT NOT NULL,
            description TEXT NOT NULL,
            date TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )
    .unwrap();
    SqliteStore::new(conn)
}

fn canonical_ledger(store: &mut dyn TransactionStore) -> Vec<String> {
    let rows = [
        (TransactionKind::CashIn, "1500", "Salary", "2024-05-01"),
        (TransactionKind::CashOut, "750", "Rent", "2024-05-01"),
        (TransactionKind::CashOut, "85.50", "Groceries", "2024-05-05"),
    ];
    rows.iter()
        .map(|(k, a, d, dt)| store.create(draft(*k, a, d, dt)).unwrap().id)
        .collect()
}

#[test]
fn memory_ids_are_sequential_strings() {
    let mut store = MemoryStore::new();
    let ids = canonical_ledger(&mut store);
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn memory_list_is_date_descending() {
    let mut store = MemoryStore::new();
    canonical_ledger(&mut store);
    let txs = store.list().unwrap();
    assert_eq!(txs[0].description, "Groceries");
    assert!(txs.windows(2).all(|w| w[0].date >= w[1].date));
}

#[test]
fn memory_update_is_full_replacement_and_kind_may_change() {
    let mut store = MemoryStore::new();
    let ids = canonical_ledger(&mut store);
    let updated = store
        .update(
            &ids[1],
            draft(TransactionKind::CashIn, "25", "Rent rebate", "2024-05-02"),
        )
        .unwrap();
    assert_eq!(updated.id, ids[1]);
    assert_eq!(updated.kind, TransactionKind::CashIn);
    let fetched = store.get(&ids[1]).unwrap().unwrap();
    assert_eq!(fetched.description, "Rent rebate");
    assert_eq!(fetched.amount, "25".parse().unwrap());
}

#[test]
fn memory_delete_then_resummarize() {
    let mut store = MemoryStore::new();
    let ids = canonical_ledger(&mut store);
    store.delete(&ids[1]).unwrap(); // Rent
    let totals = ledger::summarize(&store.list().unwrap());
    assert_eq!(totals.total_in, "1500".parse().unwrap());
    assert_eq!(totals.total_out, "85.50".parse().unwrap());
    assert_eq!(totals.net_balance, "1414.50".parse().unwrap());
}

#[test]
fn memory_unknown_id_errors_on_update_and_delete() {
    let mut store = MemoryStore::new();
    canonical_ledger(&mut store);
    assert!(store.get("nope").unwrap().is_none());
    assert!(store.delete("nope").is_err());
    assert!(
        store
            .update(
                "nope",
                draft(TransactionKind::CashIn, "1", "x", "2024-05-01")
            )
            .is_err()
    );
}

#[test]
fn memory_sample_data_seeds_the_demo_ledger() {
    let store = MemoryStore::with_sample_data().unwrap();
    let txs = store.list().unwrap();
    assert_eq!(txs.len(), 7);
    let months = ledger::available_months(&txs);
    assert_eq!(months.len(), 3); // sentinel + May + April
    let totals = ledger::summarize(&txs);
    assert_eq!(totals.net_balance, "2819.30".parse().unwrap());
}

#[test]
fn sqlite_create_assigns_unique_ids() {
    let mut store = sqlite_store();
    let ids = canonical_ledger(&mut store);
    assert_eq!(ids.len(), 3);
    assert!(ids[0] != ids[1] && ids[1] != ids[2]);
    assert!(store.get(&ids[0]).unwrap().is_some());
}

#[test]
fn sqlite_list_is_date_descending() {
    let mut store = sqlite_store();
    canonical_ledger(&mut store);
    let txs = store.list().unwrap();
    assert_eq!(txs[0].description, "Groceries");
    assert!(txs.windows(2).all(|w| w[0].date >= w[1].date));
}

#[test]
fn sqlite_roundtrips_decimal_amounts_exactly() {
    let mut store = sqlite_store();
    let created = store
        .create(draft(
            TransactionKind::CashOut,
            "85.50",
            "Groceries",
            "2024-05-05",
        ))
        .unwrap();
    let fetched = store.get(&created.id).unwrap().unwrap();
    assert_eq!(fetched.amount.to_string(), "85.50");
}

#[test]
fn sqlite_update_and_delete_by_id() {
    let mut store = sqlite_store();
    let ids = canonical_ledger(&mut store);
    store
        .update(
            &ids[0],
            draft(TransactionKind::CashIn, "1600", "Salary (raise)", "2024-05-01"),
        )
        .unwrap();
    let fetched = store.get(&ids[0]).unwrap().unwrap();
    assert_eq!(fetched.amount, "1600".parse().unwrap());

    store.delete(&ids[1]).unwrap();
    assert!(store.get(&ids[1]).unwrap().is_none());
    assert!(store.delete(&ids[1]).is_err());
}

#[test]
fn sqlite_delete_then_resummarize() {
    let mut store = sqlite_store();
    let ids = canonical_ledger(&mut store);
    store.delete(&ids[1]).unwrap(); // Rent
    let totals = ledger::summarize(&store.list().unwrap());
    assert_eq!(totals.total_in, "1500".parse().unwrap());
    assert_eq!(totals.total_out, "85.50".parse().unwrap());
    assert_eq!(totals.net_balance, "1414.50".parse().unwrap());
}
