// Copyright (c) 2025 Cashbook Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::models::TransactionDraft;
use crate::store::TransactionStore;
use crate::utils::{parse_date, parse_decimal, parse_kind};

pub fn handle(store: &mut dyn TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(store, sub),
        _ => Ok(()),
    }
}

fn import_transactions(store: &mut dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    // Whole file is validated before anything reaches the store; a single
    // bad row rejects the import.
    let mut drafts = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let line = i + 2; // 1-based, after the header row
        let rec = result?;
        let kind_raw = rec
            .get(0)
            .with_context(|| format!("kind missing on line {}", line))?
            .trim();
        let amount_raw = rec
            .get(1)
            .with_context(|| format!("amount missing on line {}", line))?
            .trim();
        let description = rec
            .get(2)
            .with_context(|| format!("description missing on line {}", line))?
            .trim();
        let date_raw = rec
            .get(3)
            .with_context(|| format!("date missing on line {}", line))?
            .trim();

        let kind =
            parse_kind(kind_raw).with_context(|| format!("Invalid kind on line {}", line))?;
        let amount = parse_decimal(amount_raw)
            .with_context(|| format!("Invalid amount on line {}", line))?;
        let date =
            parse_date(date_raw).with_context(|| format!("Invalid date on line {}", line))?;
        let draft = TransactionDraft::new(kind, amount, description, date)
            .with_context(|| format!("Invalid transaction on line {}", line))?;
        drafts.push(draft);
    }

    let created = store.create_many(drafts)?;
    println!("Imported {} transactions from {}", created.len(), path);
    Ok(())
}
