// Copyright (c) 2025 Cashbook Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashbook::ledger::MonthFilter;
use cashbook::store::MemoryStore;
use cashbook::{cli, commands::reports};

fn summary_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args.iter().copied());
    if let Some(("summary", m)) = matches.subcommand() {
        return m.clone();
    }
    panic!("no summary subcommand");
}

#[test]
fn months_lists_sentinel_then_data_months() {
    let store = MemoryStore::with_sample_data().unwrap();
    let rows = reports::month_rows(&store).unwrap();
    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["All Months", "May 2024", "April 2024"]);
    let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["all", "2024-05", "2024-04"]);
}

#[test]
fn months_on_empty_ledger_is_just_the_sentinel() {
    let store = MemoryStore::new();
    let rows = reports::month_rows(&store).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, "All Months");
}

#[test]
fn summary_scopes_totals_to_the_requested_month() {
    let store = MemoryStore::with_sample_data().unwrap();
    let m = summary_matches(&["cashbook", "summary", "--month", "2024-05"]);
    let (month, totals) = reports::summary_totals(&store, &m).unwrap();
    assert_eq!(month.label(), "May 2024");
    assert_eq!(totals.total_in, "1750".parse().unwrap());
    assert_eq!(totals.total_out, "885.50".parse().unwrap());
    assert_eq!(totals.net_balance, "864.50".parse().unwrap());
}

#[test]
fn summary_defaults_to_all_months() {
    let store = MemoryStore::with_sample_data().unwrap();
    let m = summary_matches(&["cashbook", "summary"]);
    let (month, totals) = reports::summary_totals(&store, &m).unwrap();
    assert_eq!(month, MonthFilter::All);
    assert_eq!(totals.total_in, "3750".parse().unwrap());
    assert_eq!(totals.total_out, "930.70".parse().unwrap());
    assert_eq!(totals.net_balance, "2819.30".parse().unwrap());
}

#[test]
fn summary_always_counts_both_kinds() {
    // The kind filter that narrows listings has no summary counterpart:
    // a month's totals carry its cash-in and cash-out sides alike.
    let store = MemoryStore::with_sample_data().unwrap();
    let m = summary_matches(&["cashbook", "summary", "--month", "2024-04"]);
    let (_, totals) = reports::summary_totals(&store, &m).unwrap();
    assert_eq!(totals.total_in, "2000".parse().unwrap());
    assert_eq!(totals.total_out, "45.20".parse().unwrap());
    assert_eq!(totals.net_balance, "1954.80".parse().unwrap());
}

#[test]
fn summary_rejects_malformed_month() {
    let store = MemoryStore::with_sample_data().unwrap();
    let m = summary_matches(&["cashbook", "summary", "--month", "May 2024"]);
    assert!(reports::summary_totals(&store, &m).is_err());
}
