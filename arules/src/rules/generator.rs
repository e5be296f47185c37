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

use crate::apriori::FrequentItemset;
use crate::error::Error;
use crate::itemset::ItemSet;
use crate::rules::metrics::{self, Conviction};

/// A directional association rule with its metrics.
///
/// Antecedent and consequent are disjoint and their union is a frequent
/// itemset. The ordered pair is the rule's identity: swapping the two
/// sides gives a different rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    antecedent: ItemSet,
    consequent: ItemSet,
    support: f64,
    confidence: f64,
    lift: f64,
    conviction: Conviction,
}

impl Rule {
    /// The "if" side.
    pub fn antecedent(&self) -> &ItemSet {
        &self.antecedent
    }

    /// The "then" side.
    pub fn consequent(&self) -> &ItemSet {
        &self.consequent
    }

    /// Support of antecedent and consequent together.
    pub fn support(&self) -> f64 {
        self.support
    }

    /// Conditional frequency of the consequent given the antecedent.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Observed over expected co-occurrence.
    pub fn lift(&self) -> f64 {
        self.lift
    }

    /// Directional strength corrected for consequent frequency.
    pub fn conviction(&self) -> Conviction {
        self.conviction
    }
}

/// Derives rules from the mined frequent itemsets.
///
/// For each frequent itemset of size `n >= 2`, every non-empty proper
/// subset becomes an antecedent with the complement as consequent.
/// Antecedents are enumerated by size ascending and lexicographically
/// within a size. Supports are looked up from `frequent`; a missing or
/// zero antecedent support skips the split rather than dividing by zero
/// (it cannot occur for a frequent subset, but is guarded anyway).
///
/// A rule is emitted when its confidence reaches `min_confidence` and,
/// when `min_lift` is set, its lift reaches that bound too. The returned
/// pool is unordered; ranking imposes the final total order.
///
/// # Errors
///
/// [`ErrorKind::InvalidThreshold`](crate::error::ErrorKind::InvalidThreshold)
/// if `min_confidence` is outside [0, 1] or `min_lift` is negative.
pub fn generate_rules(
    frequent: &[FrequentItemset],
    min_confidence: f64,
    min_lift: Option<f64>,
) -> Result<Vec<Rule>, Error> {
    if !(min_confidence >= 0.0 && min_confidence <= 1.0) {
        return Err(Error::invalid_threshold(format!(
            "min_confidence must be in [0, 1], got {min_confidence}"
        )));
    }
    if let Some(bound) = min_lift {
        if !(bound >= 0.0) {
            return Err(Error::invalid_threshold(format!(
                "min_lift must be >= 0, got {bound}"
            )));
        }
    }

    let supports: HashMap<&ItemSet, f64> = frequent
        .iter()
        .map(|itemset| (itemset.items(), itemset.support()))
        .collect();

    let mut rules = Vec::new();
    for itemset in frequent.iter().filter(|itemset| itemset.items().len() >= 2) {
        let items = itemset.items().items();
        let union_support = itemset.support();

        for size in 1..items.len() {
            let mut indices: Vec<usize> = (0..size).collect();
            loop {
                let antecedent =
                    ItemSet::from_sorted(indices.iter().map(|&i| items[i]).collect());
                let consequent = itemset.items().difference(&antecedent);

                if let Some(rule) = score_split(
                    antecedent,
                    consequent,
                    union_support,
                    &supports,
                    min_confidence,
                    min_lift,
                ) {
                    rules.push(rule);
                }

                if !next_combination(&mut indices, items.len()) {
                    break;
                }
            }
        }
    }

    tracing::debug!(rules = rules.len(), "rule generation complete");
    Ok(rules)
}

fn score_split(
    antecedent: ItemSet,
    consequent: ItemSet,
    union_support: f64,
    supports: &HashMap<&ItemSet, f64>,
    min_confidence: f64,
    min_lift: Option<f64>,
) -> Option<Rule> {
    let antecedent_support = *supports.get(&antecedent)?;
    let consequent_support = *supports.get(&consequent)?;
    if antecedent_support <= 0.0 || consequent_support <= 0.0 {
        return None;
    }

    let confidence = metrics::confidence(union_support, antecedent_support);
    if confidence < min_confidence {
        return None;
    }
    let lift = metrics::lift(confidence, consequent_support);
    if min_lift.is_some_and(|bound| lift < bound) {
        return None;
    }

    Some(Rule {
        antecedent,
        consequent,
        support: union_support,
        confidence,
        lift,
        conviction: metrics::conviction(confidence, consequent_support),
    })
}

/// Advances `indices` to the next lexicographic `r`-combination of `0..n`.
///
/// Returns false when `indices` already holds the last combination.
fn next_combination(indices: &mut [usize], n: usize) -> bool {
    let size = indices.len();
    let mut i = size;
    while i > 0 {
        i -= 1;
        if indices[i] < n - size + i {
            indices[i] += 1;
            for j in (i + 1)..size {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinations_advance_lexicographically() {
        let mut indices = vec![0, 1];
        let mut seen = vec![indices.clone()];
        while next_combination(&mut indices, 4) {
            seen.push(indices.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn single_element_combinations() {
        let mut indices = vec![0];
        let mut seen = vec![indices.clone()];
        while next_combination(&mut indices, 3) {
            seen.push(indices.clone());
        }
        assert_eq!(seen, vec![vec![0], vec![1], vec![2]]);
    }
}
