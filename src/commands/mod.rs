// Copyright (c) 2025 Cashbook Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod transactions;
pub mod reports;
pub mod seed;
pub mod importer;
pub mod exporter;
pub mod doctor;
