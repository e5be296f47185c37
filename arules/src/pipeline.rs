// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! The end-to-end mining pipeline.
//!
//! Stages run in strict sequence (encode, mine, derive rules, rank)
//! because each consumes the complete output of the previous one. The
//! pipeline returns either a complete, internally consistent
//! [`Report`] or an [`Error`]; never a partial result.

use crate::apriori;
use crate::cancellation::{Cancellable, CancellationToken};
use crate::config::MiningConfig;
use crate::encoder;
use crate::error::Error;
use crate::report::{self, Report};
use crate::rules;

/// Runs the full pipeline over raw `(transaction key, item label)` pairs.
///
/// Equivalent to [`mine_cancellable`] with a token that never fires.
///
/// # Errors
///
/// See [`mine_cancellable`].
pub fn mine<I, K, L>(pairs: I, config: &MiningConfig) -> Result<Report, Error>
where
    I: IntoIterator<Item = (K, L)>,
    K: AsRef<str>,
    L: AsRef<str>,
{
    mine_cancellable(pairs, config, &CancellationToken::new())
}

/// Runs the full pipeline, honoring an externally supplied cancellation
/// signal between mining levels.
///
/// # Errors
///
/// [`ErrorKind::InvalidThreshold`](crate::error::ErrorKind::InvalidThreshold)
/// for out-of-range configuration (checked before any work);
/// [`ErrorKind::EmptyInput`](crate::error::ErrorKind::EmptyInput) when no
/// usable transactions or items survive encoding;
/// [`ErrorKind::Cancelled`](crate::error::ErrorKind::Cancelled) when
/// `token` fires.
pub fn mine_cancellable<I, K, L>(
    pairs: I,
    config: &MiningConfig,
    token: &dyn Cancellable,
) -> Result<Report, Error>
where
    I: IntoIterator<Item = (K, L)>,
    K: AsRef<str>,
    L: AsRef<str>,
{
    config.validate()?;

    let (transactions, vocabulary) = encoder::encode(pairs)?;

    let frequent = apriori::mine_frequent_itemsets(
        &transactions,
        vocabulary.len(),
        config.min_support,
        config.max_itemset_size,
        token,
    )?;

    let rules = rules::generate_rules(&frequent, config.min_confidence, config.min_lift)?;

    let report = report::assemble_report(
        &frequent,
        rules,
        &vocabulary,
        transactions.len(),
        config.include_single_item_rules,
    );

    tracing::info!(
        transactions = report.transaction_count,
        items = report.item_count,
        itemsets = report.itemset_count,
        rules = report.rule_count,
        "mining complete"
    );
    Ok(report)
}
