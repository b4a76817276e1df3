// Copyright (c) 2025 Cashbook Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};
use uuid::Uuid;

use crate::models::{Transaction, TransactionDraft};
use crate::utils::parse_date;

/// Storage capability the ledger commands are written against. Backends
/// assign ids on create; update is full field replacement under a stable id.
pub trait TransactionStore {
    /// Date-descending snapshot of the whole ledger.
    fn list(&self) -> Result<Vec<Transaction>>;
    fn get(&self, id: &str) -> Result<Option<Transaction>>;
    fn create(&mut self, draft: TransactionDraft) -> Result<Transaction>;
    fn update(&mut self, id: &str, draft: TransactionDraft) -> Result<Transaction>;
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Insert a batch. Backends with real transactions override this to make
    /// the whole batch all-or-nothing.
    fn create_many(&mut self, drafts: Vec<TransactionDraft>) -> Result<Vec<Transaction>> {
        let mut out = Vec::with_capacity(drafts.len());
        for draft in drafts {
            out.push(self.create(draft)?);
        }
        Ok(out)
    }
}

/// In-memory backend with counter-derived ids.
#[derive(Debug)]
pub struct MemoryStore {
    items: Vec<Transaction>,
    next_id: u64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_sample_data() -> Result<Self> {
        let mut store = Self::new();
        for draft in sample_drafts()? {
            store.create(draft)?;
        }
        Ok(store)
    }
}

impl TransactionStore for MemoryStore {
    fn list(&self) -> Result<Vec<Transaction>> {
        // Stable sort over reversed insert order: ties within a date go to
        // the most recently created record, matching the SQLite backend.
        let mut out: Vec<Transaction> = self.items.iter().rev().cloned().collect();
        out.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(out)
    }

    fn get(&self, id: &str) -> Result<Option<Transaction>> {
        Ok(self.items.iter().find(|t| t.id == id).cloned())
    }

    fn create(&mut self, draft: TransactionDraft) -> Result<Transaction> {
        let tx = Transaction {
            id: self.next_id.to_string(),
            kind: draft.kind,
            amount: draft.amount,
            description: draft.description,
            date: draft.date,
        };
        self.next_id += 1;
        self.items.push(tx.clone());
        Ok(tx)
    }

    fn update(&mut self, id: &str, draft: TransactionDraft) -> Result<Transaction> {
        let slot = self
            .items
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| anyhow!("Transaction '{}' not found", id))?;
        slot.kind = draft.kind;
        slot.amount = draft.amount;
        slot.description = draft.description;
        slot.date = draft.date;
        Ok(slot.clone())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        if self.items.len() == before {
            return Err(anyhow!("Transaction '{}' not found", id));
        }
        Ok(())
    }
}

/// SQLite backend with random document-style ids.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

impl TransactionStore for SqliteStore {
    fn list(&self) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, kind, amount, description, date FROM transactions
             ORDER BY date DESC, created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok((
                r.get::<_, String>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, String>(4)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (id, kind, amount, description, date) = row?;
            out.push(row_to_transaction(id, kind, amount, description, date)?);
        }
        Ok(out)
    }

    fn get(&self, id: &str) -> Result<Option<Transaction>> {
        let row: Option<(String, String, String, String, String)> = self
            .conn
            .query_row(
                "SELECT id, kind, amount, description, date FROM transactions WHERE id=?1",
                params![id],
                |r| {
                    Ok((
                        r.get::<_, String>(0)?,
                        r.get::<_, String>(1)?,
                        r.get::<_, String>(2)?,
                        r.get::<_, String>(3)?,
                        r.get::<_, String>(4)?,
                    ))
                },
            )
            .optional()?;
        match row {
            Some((id, kind, amount, description, date)) => {
                Ok(Some(row_to_transaction(id, kind, amount, description, date)?))
            }
            None => Ok(None),
        }
    }

    fn create(&mut self, draft: TransactionDraft) -> Result<Transaction> {
        let id = Uuid::new_v4().to_string();
        self.conn.execute(
            "INSERT INTO transactions(id, kind, amount, description, date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                id,
                draft.kind.as_str(),
                draft.amount.to_string(),
                draft.description,
                draft.date.to_string()
            ],
        )?;
        Ok(Transaction {
            id,
            kind: draft.kind,
            amount: draft.amount,
            description: draft.description,
            date: draft.date,
        })
    }

    fn update(&mut self, id: &str, draft: TransactionDraft) -> Result<Transaction> {
        let changed = self.conn.execute(
            "UPDATE transactions SET kind=?1, amount=?2, description=?3, date=?4 WHERE id=?5",
            params![
                draft.kind.as_str(),
                draft.amount.to_string(),
                draft.description,
                draft.date.to_string(),
                id
            ],
        )?;
        if changed == 0 {
            return Err(anyhow!("Transaction '{}' not found", id));
        }
        Ok(Transaction {
            id: id.to_string(),
            kind: draft.kind,
            amount: draft.amount,
            description: draft.description,
            date: draft.date,
        })
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        if changed == 0 {
            return Err(anyhow!("Transaction '{}' not found", id));
        }
        Ok(())
    }

    fn create_many(&mut self, drafts: Vec<TransactionDraft>) -> Result<Vec<Transaction>> {
        let tx = self.conn.transaction()?;
        let mut out = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let id = Uuid::new_v4().to_string();
            tx.execute(
                "INSERT INTO transactions(id, kind, amount, description, date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    id,
                    draft.kind.as_str(),
                    draft.amount.to_string(),
                    draft.description,
                    draft.date.to_string()
                ],
            )?;
            out.push(Transaction {
                id,
                kind: draft.kind,
                amount: draft.amount,
                description: draft.description,
                date: draft.date,
            });
        }
        tx.commit()?;
        Ok(out)
    }
}

fn row_to_transaction(
    id: String,
    kind: String,
    amount: String,
    description: String,
    date: String,
) -> Result<Transaction> {
    let kind = kind
        .parse()
        .with_context(|| format!("Invalid kind '{}' for transaction {}", kind, id))?;
    let amount = amount
        .parse()
        .with_context(|| format!("Invalid amount '{}' for transaction {}", amount, id))?;
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}' for transaction {}", date, id))?;
    Ok(Transaction {
        id,
        kind,
        amount,
        description,
        date,
    })
}

/// The demo ledger shipped with the original cashbook.
pub fn sample_drafts() -> Result<Vec<TransactionDraft>> {
    let rows = [
        ("cash-in", "1500.00", "Monthly Salary", "2024-05-01"),
        ("cash-out", "750.00", "Apartment Rent", "2024-05-01"),
        ("cash-out", "85.50", "Groceries", "2024-05-05"),
        ("cash-out", "50.00", "Internet Bill", "2024-05-10"),
        ("cash-in", "250.00", "Freelance Project", "2024-05-15"),
        ("cash-out", "45.20", "Dinner with friends", "2024-04-18"),
        ("cash-in", "2000.00", "Monthly Salary", "2024-04-01"),
    ];
    rows.iter()
        .map(|(kind, amount, description, date)| {
            Ok(TransactionDraft::new(
                kind.parse()?,
                amount.parse::<rust_decimal::Decimal>()?,
                *description,
                parse_date(date)?,
            )?)
        })
        .collect()
}
