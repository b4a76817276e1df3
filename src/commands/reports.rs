// Copyright (c) 2025 Cashbook Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::ledger::{self, KindFilter, MonthFilter};
use crate::models::Summary;
use crate::store::TransactionStore;
use crate::utils::{fmt_money, maybe_print_json, parse_month_filter, pretty_table};

#[derive(Serialize)]
pub struct MonthRow {
    pub label: String,
    pub key: String,
}

pub fn month_rows(store: &dyn TransactionStore) -> Result<Vec<MonthRow>> {
    let snapshot = store.list()?;
    Ok(ledger::available_months(&snapshot)
        .iter()
        .map(|m| MonthRow {
            label: m.label(),
            key: m.key(),
        })
        .collect())
}

pub fn summary_totals(
    store: &dyn TransactionStore,
    sub: &clap::ArgMatches,
) -> Result<(MonthFilter, Summary)> {
    let month = match sub.get_one::<String>("month") {
        Some(s) => parse_month_filter(s)?,
        None => MonthFilter::All,
    };
    let snapshot = store.list()?;
    // Totals honor the month scope only; the kind filter never narrows them.
    let scoped = ledger::filter_by_month_and_kind(&snapshot, month, KindFilter::All);
    Ok((month, ledger::summarize(&scoped)))
}

pub fn months(store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let data = month_rows(store)?;

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data.into_iter().map(|r| vec![r.label, r.key]).collect();
        println!("{}", pretty_table(&["Month", "Key"], rows));
    }
    Ok(())
}

pub fn summary(store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let (month, totals) = summary_totals(store, sub)?;

    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let rows = vec![vec![
            month.label(),
            fmt_money(&totals.total_in),
            fmt_money(&totals.total_out),
            fmt_money(&totals.net_balance),
        ]];
        println!(
            "{}",
            pretty_table(&["Month", "Cash In", "Cash Out", "Net Balance"], rows)
        );
    }
    Ok(())
}
