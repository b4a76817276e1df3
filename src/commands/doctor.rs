// Copyright (c) 2025 Cashbook Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::models::{MAX_DESCRIPTION_LEN, TransactionKind};
use crate::utils::pretty_table;

/// Scans raw rows for records that violate the ledger invariants. Rows can
/// only get into this state from outside the application (hand edits,
/// foreign tools), so the scan bypasses the store's parsing.
pub fn scan(conn: &Connection) -> Result<Vec<Vec<String>>> {
    let mut issues = Vec::new();

    let mut stmt =
        conn.prepare("SELECT id, kind, amount, description, date FROM transactions ORDER BY date")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: String = r.get(0)?;
        let kind: String = r.get(1)?;
        let amount: String = r.get(2)?;
        let description: String = r.get(3)?;
        let date: String = r.get(4)?;

        if kind.parse::<TransactionKind>().is_err() {
            issues.push(vec!["bad_kind".into(), format!("{} '{}'", id, kind)]);
        }
        match amount.parse::<Decimal>() {
            Ok(a) if a > Decimal::ZERO => {}
            Ok(a) => issues.push(vec!["non_positive_amount".into(), format!("{} {}", id, a)]),
            Err(_) => issues.push(vec!["bad_amount".into(), format!("{} '{}'", id, amount)]),
        }
        if description.trim().is_empty() {
            issues.push(vec!["empty_description".into(), id.clone()]);
        } else if description.chars().count() > MAX_DESCRIPTION_LEN {
            issues.push(vec![
                "description_too_long".into(),
                format!("{} ({} chars)", id, description.chars().count()),
            ]);
        }
        if chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            issues.push(vec!["bad_date".into(), format!("{} '{}'", id, date)]);
        }
    }
    Ok(issues)
}

pub fn handle(conn: &Connection) -> Result<()> {
    let issues = scan(conn)?;
    if issues.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], issues));
    }
    Ok(())
}
