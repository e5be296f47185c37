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

use std::collections::HashMap;

use crate::encoder::Vocabulary;
use crate::error::Error;
use crate::itemset::ItemId;

/// An input row after validation, before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawRow<'a> {
    Valid { key: &'a str, label: &'a str },
    Invalid(RowDefect),
}

/// Why a row was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowDefect {
    BlankKey,
    BlankLabel,
}

fn classify<'a>(key: &'a str, label: &'a str) -> RawRow<'a> {
    let key = key.trim();
    let label = label.trim();
    if key.is_empty() {
        RawRow::Invalid(RowDefect::BlankKey)
    } else if label.is_empty() {
        RawRow::Invalid(RowDefect::BlankLabel)
    } else {
        RawRow::Valid { key, label }
    }
}

/// Indexed transactions: one sorted item-id set per distinct transaction
/// key, in first-seen key order.
///
/// Transactions that would be empty after filtering simply never
/// materialize, so every stored transaction holds at least one item and
/// `len()` is the transaction total that support fractions divide by.
#[derive(Debug, Clone)]
pub struct TransactionSet {
    transactions: Vec<Vec<ItemId>>,
    discarded_rows: u64,
}

impl TransactionSet {
    /// Number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns true if no transactions were encoded.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Item ids of each transaction, sorted ascending within a transaction.
    pub fn transactions(&self) -> &[Vec<ItemId>] {
        &self.transactions
    }

    /// Number of input rows discarded as malformed.
    pub fn discarded_rows(&self) -> u64 {
        self.discarded_rows
    }
}

/// Encodes raw `(transaction key, item label)` pairs.
///
/// Malformed rows (blank key or label after trimming) are filtered and
/// counted, never fatal. Fails with
/// [`ErrorKind::EmptyInput`](crate::error::ErrorKind::EmptyInput) when no
/// valid transaction survives filtering.
pub fn encode<I, K, L>(pairs: I) -> Result<(TransactionSet, Vocabulary), Error>
where
    I: IntoIterator<Item = (K, L)>,
    K: AsRef<str>,
    L: AsRef<str>,
{
    let mut vocabulary = Vocabulary::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut transactions: Vec<Vec<ItemId>> = Vec::new();
    let mut discarded_rows = 0u64;

    for (key, label) in pairs {
        match classify(key.as_ref(), label.as_ref()) {
            RawRow::Valid { key, label } => {
                let item = vocabulary.intern(label);
                let slot = match slots.get(key) {
                    Some(&slot) => slot,
                    None => {
                        let slot = transactions.len();
                        slots.insert(key.to_string(), slot);
                        transactions.push(Vec::new());
                        slot
                    }
                };
                transactions[slot].push(item);
            }
            RawRow::Invalid(defect) => {
                tracing::debug!(?defect, "discarding malformed input row");
                discarded_rows += 1;
            }
        }
    }

    for transaction in &mut transactions {
        transaction.sort_unstable();
        transaction.dedup();
    }

    if transactions.is_empty() || vocabulary.is_empty() {
        return Err(Error::empty_input(format!(
            "no usable transactions after filtering ({discarded_rows} rows discarded)"
        )));
    }

    tracing::debug!(
        transactions = transactions.len(),
        items = vocabulary.len(),
        discarded_rows,
        "encoded transaction set"
    );

    Ok((
        TransactionSet {
            transactions,
            discarded_rows,
        },
        vocabulary,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn pairs(rows: &[(&str, &str)]) -> Vec<(String, String)> {
        rows.iter()
            .map(|(k, l)| (k.to_string(), l.to_string()))
            .collect()
    }

    #[test]
    fn duplicates_within_a_transaction_collapse() {
        let (transactions, vocabulary) =
            encode(pairs(&[("t1", "milk"), ("t1", "milk"), ("t1", "bread")])).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions.transactions()[0], vec![0, 1]);
        assert_eq!(vocabulary.len(), 2);
    }

    #[test]
    fn malformed_rows_are_filtered_not_fatal() {
        let (transactions, _) = encode(pairs(&[
            ("t1", "milk"),
            ("", "bread"),
            ("   ", "bread"),
            ("t2", ""),
            ("t2", "  \t"),
            ("t2", "bread"),
        ]))
        .unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions.discarded_rows(), 4);
    }

    #[test]
    fn whitespace_is_trimmed_from_keys_and_labels() {
        let (transactions, vocabulary) =
            encode(pairs(&[(" t1 ", " milk "), ("t1", "milk")])).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(vocabulary.len(), 1);
        assert_eq!(vocabulary.label(0), "milk");
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = encode(pairs(&[])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);

        let err = encode(pairs(&[("", "milk"), ("t1", " ")])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
    }

    #[test]
    fn transaction_slots_follow_first_seen_order() {
        let (transactions, _) = encode(pairs(&[
            ("b", "x"),
            ("a", "y"),
            ("b", "z"),
        ]))
        .unwrap();
        // Slot 0 is "b" (seen first) with items x=0 and z=2.
        assert_eq!(transactions.transactions()[0], vec![0, 2]);
        assert_eq!(transactions.transactions()[1], vec![1]);
    }
}
