// Copyright (c) 2025 Cashbook Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::ledger::{self, KindFilter, MonthFilter};
use crate::models::TransactionDraft;
use crate::store::TransactionStore;
use crate::utils::{
    fmt_money, maybe_print_json, parse_date, parse_decimal, parse_kind, parse_kind_filter,
    parse_month_filter, pretty_table,
};

pub fn handle(store: &mut dyn TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(&*store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn draft_from_args(sub: &clap::ArgMatches) -> Result<TransactionDraft> {
    let kind = parse_kind(sub.get_one::<String>("kind").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap();
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    Ok(TransactionDraft::new(
        kind,
        amount,
        description.as_str(),
        date,
    )?)
}

fn add(store: &mut dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let tx = store.create(draft_from_args(sub)?)?;
    println!(
        "Recorded {} {} '{}' on {} (id: {})",
        tx.kind,
        fmt_money(&tx.amount),
        tx.description,
        tx.date,
        tx.id
    );
    Ok(())
}

fn list(store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Kind", "Amount", "Description"], rows)
        );
    }
    Ok(())
}

fn edit(store: &mut dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let tx = store.update(id, draft_from_args(sub)?)?;
    println!(
        "Updated {} -> {} {} '{}' on {}",
        tx.id,
        tx.kind,
        fmt_money(&tx.amount),
        tx.description,
        tx.date
    );
    Ok(())
}

fn rm(store: &mut dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store.delete(id)?;
    println!("Deleted transaction '{}'", id);
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub kind: String,
    pub amount: String,
    pub description: String,
}

pub fn query_rows(
    store: &dyn TransactionStore,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let month = match sub.get_one::<String>("month") {
        Some(s) => parse_month_filter(s)?,
        None => MonthFilter::All,
    };
    let kind = match sub.get_one::<String>("kind") {
        Some(s) => parse_kind_filter(s)?,
        None => KindFilter::All,
    };

    let snapshot = store.list()?;
    let mut filtered = ledger::filter_by_month_and_kind(&snapshot, month, kind);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        filtered.truncate(*limit);
    }

    Ok(filtered
        .iter()
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date.to_string(),
            kind: t.kind.as_str().to_string(),
            amount: fmt_money(&t.amount),
            description: t.description.clone(),
        })
        .collect())
}
