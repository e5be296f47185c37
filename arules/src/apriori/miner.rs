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

use std::collections::HashSet;

use rayon::prelude::*;

use crate::apriori::InvertedIndex;
use crate::cancellation::Cancellable;
use crate::encoder::TransactionSet;
use crate::error::Error;
use crate::itemset::{ItemId, ItemSet};

/// A frequent itemset with its exact support.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItemset {
    items: ItemSet,
    support_count: u64,
    support: f64,
}

impl FrequentItemset {
    /// The itemset in canonical form.
    pub fn items(&self) -> &ItemSet {
        &self.items
    }

    /// Number of transactions containing the itemset.
    pub fn support_count(&self) -> u64 {
        self.support_count
    }

    /// Fraction of transactions containing the itemset.
    pub fn support(&self) -> f64 {
        self.support
    }
}

/// Mines all itemsets whose support is at least `min_support`.
///
/// Level-wise search: level 1 is a census of single items, level `k + 1`
/// candidates are prefix-joins of frequent level-`k` itemsets with every
/// immediate subset verified frequent before counting. Candidate support
/// within a level is counted in parallel over the shared read-only
/// inverted index. The search stops when a level yields nothing frequent
/// or when `max_itemset_size` is reached.
///
/// Level-1 itemsets are retained in the result so single-item statistics
/// stay available downstream. An empty result is a valid outcome, not an
/// error.
///
/// # Errors
///
/// [`ErrorKind::InvalidThreshold`](crate::error::ErrorKind::InvalidThreshold)
/// if `min_support` is outside (0, 1];
/// [`ErrorKind::EmptyInput`](crate::error::ErrorKind::EmptyInput) if there
/// are no transactions;
/// [`ErrorKind::Cancelled`](crate::error::ErrorKind::Cancelled) if `token`
/// fires, checked between levels.
pub fn mine_frequent_itemsets(
    transactions: &TransactionSet,
    item_count: usize,
    min_support: f64,
    max_itemset_size: Option<usize>,
    token: &dyn Cancellable,
) -> Result<Vec<FrequentItemset>, Error> {
    if !(min_support > 0.0 && min_support <= 1.0) {
        return Err(Error::invalid_threshold(format!(
            "min_support must be in (0, 1], got {min_support}"
        )));
    }
    if transactions.is_empty() {
        return Err(Error::empty_input("cannot mine an empty transaction set"));
    }
    if token.is_cancelled() {
        return Err(Error::cancelled());
    }

    let index = InvertedIndex::build(transactions, item_count);
    let total = transactions.len() as f64;

    let mut frequent = Vec::new();
    let mut current: Vec<ItemSet> = Vec::new();

    for item in 0..item_count as ItemId {
        let count = index.item_count(item);
        let support = count as f64 / total;
        if support >= min_support {
            frequent.push(FrequentItemset {
                items: ItemSet::single(item),
                support_count: count as u64,
                support,
            });
            current.push(ItemSet::single(item));
        }
    }
    tracing::debug!(
        level = 1,
        candidates = item_count,
        frequent = current.len(),
        "level complete"
    );

    let mut level = 1usize;
    while !current.is_empty() {
        if max_itemset_size.is_some_and(|max| level >= max) {
            break;
        }
        if token.is_cancelled() {
            return Err(Error::cancelled());
        }
        level += 1;

        let candidates = generate_candidates(&current);
        if candidates.is_empty() {
            break;
        }

        // Candidates at one level are independent; counting fans out over
        // the immutable index.
        let counts: Vec<usize> = candidates
            .par_iter()
            .map(|candidate| index.count_containing(candidate.items()))
            .collect();

        let mut next = Vec::new();
        for (candidate, count) in candidates.iter().zip(&counts) {
            let support = *count as f64 / total;
            if support >= min_support {
                frequent.push(FrequentItemset {
                    items: candidate.clone(),
                    support_count: *count as u64,
                    support,
                });
                next.push(candidate.clone());
            }
        }
        tracing::debug!(
            level,
            candidates = candidates.len(),
            frequent = next.len(),
            "level complete"
        );
        current = next;
    }

    Ok(frequent)
}

/// Joins frequent level-`k` itemsets into level-`k + 1` candidates.
///
/// `prev` must be sorted in canonical (lexicographic) order, which holds
/// by construction: level 1 is emitted in ascending item order and every
/// join below preserves the order. Two itemsets join when they share all
/// but their last item; the candidate then has every immediate subset
/// checked against `prev` before it is admitted.
fn generate_candidates(prev: &[ItemSet]) -> Vec<ItemSet> {
    let prev_lookup: HashSet<&[ItemId]> = prev.iter().map(|set| set.items()).collect();
    let prefix_len = prev[0].len() - 1;

    let mut candidates = Vec::new();
    let mut group_start = 0;
    while group_start < prev.len() {
        let prefix = &prev[group_start].items()[..prefix_len];
        let mut group_end = group_start + 1;
        while group_end < prev.len() && &prev[group_end].items()[..prefix_len] == prefix {
            group_end += 1;
        }
        for i in group_start..group_end {
            for j in (i + 1)..group_end {
                let mut items = prev[i].items().to_vec();
                items.push(*prev[j].items().last().expect("itemsets are non-empty"));
                if all_immediate_subsets_frequent(&items, &prev_lookup) {
                    candidates.push(ItemSet::from_sorted(items));
                }
            }
        }
        group_start = group_end;
    }
    candidates
}

fn all_immediate_subsets_frequent(items: &[ItemId], prev: &HashSet<&[ItemId]>) -> bool {
    let mut subset = Vec::with_capacity(items.len() - 1);
    for skip in 0..items.len() {
        subset.clear();
        subset.extend(
            items
                .iter()
                .enumerate()
                .filter(|(position, _)| *position != skip)
                .map(|(_, &item)| item),
        );
        if !prev.contains(subset.as_slice()) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_candidates_from_singletons() {
        let prev = vec![ItemSet::single(0), ItemSet::single(1), ItemSet::single(3)];
        let candidates = generate_candidates(&prev);
        let expected = vec![
            ItemSet::new(vec![0, 1]),
            ItemSet::new(vec![0, 3]),
            ItemSet::new(vec![1, 3]),
        ];
        assert_eq!(candidates, expected);
    }

    #[test]
    fn join_requires_shared_prefix() {
        let prev = vec![
            ItemSet::new(vec![0, 1]),
            ItemSet::new(vec![0, 2]),
            ItemSet::new(vec![1, 2]),
        ];
        // {0,1} and {0,2} share prefix [0] and join to {0,1,2}; its third
        // subset {1,2} is frequent, so the candidate survives pruning.
        assert_eq!(generate_candidates(&prev), vec![ItemSet::new(vec![0, 1, 2])]);
    }

    #[test]
    fn pruning_rejects_candidates_with_infrequent_subsets() {
        let prev = vec![ItemSet::new(vec![0, 1]), ItemSet::new(vec![0, 2])];
        // {0,1,2} would need {1,2} frequent, which it is not.
        assert!(generate_candidates(&prev).is_empty());
    }

    #[test]
    fn candidates_come_out_in_canonical_order() {
        let prev = vec![
            ItemSet::new(vec![0, 1]),
            ItemSet::new(vec![0, 2]),
            ItemSet::new(vec![0, 3]),
            ItemSet::new(vec![1, 2]),
            ItemSet::new(vec![1, 3]),
            ItemSet::new(vec![2, 3]),
        ];
        let candidates = generate_candidates(&prev);
        let mut sorted = candidates.clone();
        sorted.sort();
        assert_eq!(candidates, sorted);
    }
}
