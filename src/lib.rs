// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod budget;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod insights;
pub mod ledger;
pub mod logging;
pub mod memos;
pub mod models;
pub mod session;
pub mod stats;
pub mod utils;
pub mod commands;
