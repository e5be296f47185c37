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

//! Canonical-form itemsets.
//!
//! An [`ItemSet`] stores item indices sorted ascending with duplicates
//! removed. The canonical form is the deduplication key for the whole
//! pipeline, and the derived `Ord` gives the lexical canonical-form order
//! used as a ranking tie-breaker.

/// Dense item index assigned by the encoder in first-seen order.
pub type ItemId = u32;

/// An immutable, unordered set of items in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemSet {
    items: Box<[ItemId]>,
}

impl ItemSet {
    /// Builds an itemset from arbitrary item ids, sorting and deduplicating.
    pub fn new(mut items: Vec<ItemId>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self {
            items: items.into_boxed_slice(),
        }
    }

    /// Builds a single-item set.
    pub fn single(item: ItemId) -> Self {
        Self {
            items: Box::new([item]),
        }
    }

    /// Builds an itemset from ids already sorted ascending and distinct.
    pub(crate) fn from_sorted(items: Vec<ItemId>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self {
            items: items.into_boxed_slice(),
        }
    }

    /// Number of items in the set.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the set holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in canonical (ascending) order.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Returns true if `item` is a member.
    pub fn contains(&self, item: ItemId) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    /// Set union, preserving canonical form.
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = Vec::with_capacity(self.len() + other.len());
        let (mut i, mut j) = (0, 0);
        while i < self.items.len() && j < other.items.len() {
            match self.items[i].cmp(&other.items[j]) {
                std::cmp::Ordering::Less => {
                    merged.push(self.items[i]);
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    merged.push(other.items[j]);
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    merged.push(self.items[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        merged.extend_from_slice(&self.items[i..]);
        merged.extend_from_slice(&other.items[j..]);
        Self::from_sorted(merged)
    }

    /// Items of `self` not present in `other`, preserving canonical form.
    pub fn difference(&self, other: &Self) -> Self {
        let kept = self
            .items
            .iter()
            .copied()
            .filter(|item| !other.contains(*item))
            .collect();
        Self::from_sorted(kept)
    }

    /// Returns true if every member of `self` is a member of `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        let mut candidates = other.items.iter();
        self.items
            .iter()
            .all(|item| candidates.any(|other_item| other_item == item))
    }
}

impl std::fmt::Display for ItemSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
