// Copyright (c) 2025 Cashbook Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Summary, Transaction, TransactionKind};

pub const ALL_MONTHS: &str = "All Months";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Locale-independent month bucket. Labels like "May 2024" are rendered
/// from this key only at the display edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn label(&self) -> String {
        match self.month {
            1..=12 => format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year),
            // Hand-built keys outside the calendar render as their canonical
            // form instead of panicking.
            _ => self.key(),
        }
    }

    /// Canonical YYYY-MM form, accepted back by the month filter.
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(MonthKey),
}

impl MonthFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(key) => MonthKey::of(tx.date) == *key,
        }
    }

    pub fn label(&self) -> String {
        match self {
            MonthFilter::All => ALL_MONTHS.to_string(),
            MonthFilter::Month(key) => key.label(),
        }
    }

    pub fn key(&self) -> String {
        match self {
            MonthFilter::All => "all".to_string(),
            MonthFilter::Month(key) => key.key(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    All,
    Only(TransactionKind),
}

impl KindFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(kind) => tx.kind == *kind,
        }
    }
}

/// Distinct months present in the data, most-recent-first, always preceded
/// by the "All Months" sentinel.
pub fn available_months(transactions: &[Transaction]) -> Vec<MonthFilter> {
    let keys: BTreeSet<MonthKey> = transactions.iter().map(|t| MonthKey::of(t.date)).collect();
    let mut months = Vec::with_capacity(keys.len() + 1);
    months.push(MonthFilter::All);
    months.extend(keys.into_iter().rev().map(MonthFilter::Month));
    months
}

/// Month bucket equality intersected with kind equality. Preserves input
/// order; stores hand out date-descending snapshots.
pub fn filter_by_month_and_kind(
    transactions: &[Transaction],
    month: MonthFilter,
    kind: KindFilter,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| month.matches(t) && kind.matches(t))
        .cloned()
        .collect()
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut total_in = Decimal::ZERO;
    let mut total_out = Decimal::ZERO;
    for tx in transactions {
        match tx.kind {
            TransactionKind::CashIn => total_in += tx.amount,
            TransactionKind::CashOut => total_out += tx.amount,
        }
    }
    Summary {
        total_in,
        total_out,
        net_balance: total_in - total_out,
    }
}
