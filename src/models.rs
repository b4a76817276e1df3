// Copyright (c) 2025 Cashbook Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_DESCRIPTION_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    CashIn,
    CashOut,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::CashIn => "cash-in",
            TransactionKind::CashOut => "cash-out",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash-in" => Ok(TransactionKind::CashIn),
            "cash-out" => Ok(TransactionKind::CashOut),
            other => Err(ValidationError::UnknownKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
}

/// Validated input for create and full-replacement edit. Ids are assigned
/// by the store that persists the record, never by the caller.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionKind,
        amount: Decimal,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(amount));
        }
        if description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        let len = description.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::DescriptionTooLong(len));
        }
        Ok(Self {
            kind,
            amount,
            description,
            date,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_in: Decimal,
    pub total_out: Decimal,
    pub net_balance: Decimal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("description is {0} characters, max {MAX_DESCRIPTION_LEN}")]
    DescriptionTooLong(usize),
    #[error("unknown transaction kind '{0}', expected cash-in or cash-out")]
    UnknownKind(String),
}
