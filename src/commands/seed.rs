// Copyright (c) 2025 Cashbook Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::{TransactionStore, sample_drafts};

pub fn handle(store: &mut dyn TransactionStore) -> Result<()> {
    let drafts = sample_drafts()?;
    let count = drafts.len();
    for draft in drafts {
        store.create(draft)?;
    }
    println!("Seeded {} sample transactions", count);
    Ok(())
}
