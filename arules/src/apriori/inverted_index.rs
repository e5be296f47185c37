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

use crate::encoder::TransactionSet;
use crate::itemset::ItemId;

/// Mapping from item id to the sorted transaction indices containing it.
///
/// Built once per mining run and read-only afterwards, so per-level
/// candidate counting can share it across worker threads without locking.
#[derive(Debug)]
pub struct InvertedIndex {
    postings: Vec<Vec<u32>>,
    transaction_count: usize,
}

impl InvertedIndex {
    /// Builds the index from encoded transactions.
    ///
    /// `item_count` is the vocabulary size; items that occur in no
    /// transaction get an empty posting list.
    pub fn build(transactions: &TransactionSet, item_count: usize) -> Self {
        let mut postings = vec![Vec::new(); item_count];
        for (tx, items) in transactions.transactions().iter().enumerate() {
            for &item in items {
                postings[item as usize].push(tx as u32);
            }
        }
        // Transactions are visited in index order, so each list is sorted.
        Self {
            postings,
            transaction_count: transactions.len(),
        }
    }

    /// Total number of transactions the index was built over.
    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    /// Number of transactions containing a single item.
    pub fn item_count(&self, item: ItemId) -> usize {
        self.postings[item as usize].len()
    }

    /// Number of transactions containing every item of `items`.
    ///
    /// Intersects the posting lists smallest-first and stops as soon as
    /// the running intersection is empty.
    pub fn count_containing(&self, items: &[ItemId]) -> usize {
        match items {
            [] => self.transaction_count,
            [item] => self.item_count(*item),
            _ => {
                let mut lists: Vec<&[u32]> =
                    items.iter().map(|&item| &self.postings[item as usize][..]).collect();
                lists.sort_unstable_by_key(|list| list.len());

                let mut current = lists[0].to_vec();
                for list in &lists[1..] {
                    current = intersect_sorted(&current, list);
                    if current.is_empty() {
                        break;
                    }
                }
                current.len()
            }
        }
    }
}

/// Intersection of two ascending id lists.
fn intersect_sorted(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder;

    fn sample_index() -> InvertedIndex {
        // t0: {a, b}, t1: {a, b}, t2: {a}, t3: {b, c}
        let (transactions, vocabulary) = encoder::encode([
            ("t0", "a"),
            ("t0", "b"),
            ("t1", "a"),
            ("t1", "b"),
            ("t2", "a"),
            ("t3", "b"),
            ("t3", "c"),
        ])
        .unwrap();
        InvertedIndex::build(&transactions, vocabulary.len())
    }

    #[test]
    fn single_item_counts_are_posting_lengths() {
        let index = sample_index();
        assert_eq!(index.transaction_count(), 4);
        assert_eq!(index.item_count(0), 3); // a
        assert_eq!(index.item_count(1), 3); // b
        assert_eq!(index.item_count(2), 1); // c
    }

    #[test]
    fn intersection_counts_supersets() {
        let index = sample_index();
        assert_eq!(index.count_containing(&[0, 1]), 2); // {a, b}
        assert_eq!(index.count_containing(&[1, 2]), 1); // {b, c}
        assert_eq!(index.count_containing(&[0, 2]), 0); // {a, c}
        assert_eq!(index.count_containing(&[0, 1, 2]), 0);
    }

    #[test]
    fn empty_query_matches_everything() {
        let index = sample_index();
        assert_eq!(index.count_containing(&[]), 4);
    }

    #[test]
    fn intersect_sorted_merges() {
        assert_eq!(intersect_sorted(&[1, 3, 5, 7], &[2, 3, 4, 7]), vec![3, 7]);
        assert_eq!(intersect_sorted(&[1, 2], &[3, 4]), Vec::<u32>::new());
    }
}
