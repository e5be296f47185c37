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

//! Mining configuration.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default minimum support fraction.
pub const DEFAULT_MIN_SUPPORT: f64 = 0.001;

/// Default minimum rule confidence.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.3;

/// Configuration for one mining run.
///
/// Thresholds come from end users, so out-of-range values are reported as
/// [`ErrorKind::InvalidThreshold`](crate::error::ErrorKind::InvalidThreshold)
/// by [`MiningConfig::validate`] rather than panicking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum fraction of transactions an itemset must appear in to be
    /// kept. Must be in (0, 1]. Default: 0.001.
    pub min_support: f64,
    /// Minimum confidence for a rule to be emitted. Must be in [0, 1].
    /// Default: 0.3.
    pub min_confidence: f64,
    /// Optional minimum lift for a rule to be emitted. Must be >= 0 when
    /// present. Default: `None` (no lift filtering).
    pub min_lift: Option<f64>,
    /// Optional cap on itemset size, limiting search depth. Must be >= 1
    /// when present. Default: `None` (search until a level is empty).
    pub max_itemset_size: Option<usize>,
    /// Whether rules with a single-item antecedent are additionally
    /// surfaced as a separate view in the report. Default: false.
    pub include_single_item_rules: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            min_lift: None,
            max_itemset_size: None,
            include_single_item_rules: false,
        }
    }
}

impl MiningConfig {
    /// Validates every threshold, returning the first violation.
    ///
    /// NaN values fail the range checks and are rejected like any other
    /// out-of-range input.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(Error::invalid_threshold(format!(
                "min_support must be in (0, 1], got {}",
                self.min_support
            )));
        }
        if !(self.min_confidence >= 0.0 && self.min_confidence <= 1.0) {
            return Err(Error::invalid_threshold(format!(
                "min_confidence must be in [0, 1], got {}",
                self.min_confidence
            )));
        }
        if let Some(min_lift) = self.min_lift {
            if !(min_lift >= 0.0) {
                return Err(Error::invalid_threshold(format!(
                    "min_lift must be >= 0, got {min_lift}"
                )));
            }
        }
        if self.max_itemset_size == Some(0) {
            return Err(Error::invalid_threshold(
                "max_itemset_size must be at least 1",
            ));
        }
        Ok(())
    }
}
