// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// Running totals for a single run. Reset to zero when a run starts, and only ever go
/// up while it runs.
///
/// Counting conventions:
/// - `comparisons`: one per key comparison, including comparisons against a held value
///   (cycle sort) or a search target.
/// - `swaps`: one per two element swap, **and** one per single element placement (merge
///   write back, cycle sort writes, radix and bucket placements). This is not a literal
///   swap count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunStats {
    pub comparisons: u64,
    pub swaps: u64,
    pub elapsed_ms: u64,
}

/// An incremental stats update, as handed to [`crate::RunObserver::on_stats_change()`].
/// Only the fields that changed are [Some], and they hold the new **total**, not a
/// difference. Merge it into your copy with [`RunStats::apply()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartialStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparisons: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swaps: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<u64>,
}

impl PartialStats {
    #[must_use]
    pub fn comparisons(total: u64) -> Self {
        Self {
            comparisons: Some(total),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn swaps(total: u64) -> Self {
        Self {
            swaps: Some(total),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn elapsed_ms(total: u64) -> Self {
        Self {
            elapsed_ms: Some(total),
            ..Default::default()
        }
    }
}

impl RunStats {
    /// Merge an update into these totals. Fields that are [None] in the update are left
    /// alone.
    pub fn apply(&mut self, update: PartialStats) {
        if let Some(it) = update.comparisons {
            self.comparisons = it;
        }
        if let Some(it) = update.swaps {
            self.swaps = it;
        }
        if let Some(it) = update.elapsed_ms {
            self.elapsed_ms = it;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut stats = RunStats {
            comparisons: 3,
            swaps: 1,
            elapsed_ms: 20,
        };
        stats.apply(PartialStats::comparisons(4));
        stats.apply(PartialStats::swaps(2));
        assert_eq!(
            stats,
            RunStats {
                comparisons: 4,
                swaps: 2,
                elapsed_ms: 20,
            }
        );
    }

    #[test]
    fn test_partial_serializes_only_present_fields() {
        let json = serde_json::to_string(&PartialStats::swaps(9)).unwrap();
        assert_eq!(json, r#"{"swaps":9}"#);
    }
}
