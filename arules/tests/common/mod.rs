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

#![allow(dead_code)]

use arules::MiningConfig;

/// Owned pair rows from string literals.
pub fn pairs(rows: &[(&str, &str)]) -> Vec<(String, String)> {
    rows.iter()
        .map(|(key, label)| (key.to_string(), label.to_string()))
        .collect()
}

/// A config with the two main thresholds set and everything else default.
pub fn config(min_support: f64, min_confidence: f64) -> MiningConfig {
    MiningConfig {
        min_support,
        min_confidence,
        ..MiningConfig::default()
    }
}

/// The two-item co-occurrence data set: milk and bread twice together,
/// milk once alone.
pub fn market_pairs() -> Vec<(String, String)> {
    pairs(&[
        ("T1", "milk"),
        ("T1", "bread"),
        ("T2", "milk"),
        ("T2", "bread"),
        ("T3", "milk"),
    ])
}
