// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::Display;

#[derive(Debug, Display)]
pub enum UIStrings {
    #[strum(serialize = "item {index} (`{item}`) is not a number")]
    NotANumber { index: usize, item: String },

    #[strum(serialize = "{algorithm} search needs a --target value")]
    SearchNeedsTarget { algorithm: String },

    #[strum(serialize = "  {family}: {names}.")]
    FamilyMembers { family: String, names: String },

    #[strum(serialize = "▶️ Running {algorithm} on {len} values. Press Ctrl+C to stop.")]
    Running { algorithm: String, len: usize },

    #[strum(serialize = "   (compare)  <swap>  |pivot|  [sorted]")]
    Legend,

    #[strum(serialize = "✅ Sorted {len} values.")]
    Sorted { len: usize },

    #[strum(serialize = "🎯 Found {target} at index {index}.")]
    Found { target: String, index: usize },

    #[strum(serialize = "🔍 {target} is not in the sequence.")]
    NotFound { target: String },

    #[strum(serialize = "⏹️ Stopped after {steps} steps.")]
    Stopped { steps: u64 },

    #[strum(serialize = "   comparisons: {comparisons}, swaps: {swaps}, elapsed: {elapsed_ms}ms")]
    StatsSummary {
        comparisons: u64,
        swaps: u64,
        elapsed_ms: u64,
    },

    #[strum(serialize = " Could not run algo due to the following problem.")]
    CouldNotRun,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fields_are_formatted() {
        assert_eq!(
            UIStrings::Found {
                target: "7".to_string(),
                index: 3
            }
            .to_string(),
            "🎯 Found 7 at index 3."
        );
        assert_eq!(
            UIStrings::StatsSummary {
                comparisons: 10,
                swaps: 4,
                elapsed_ms: 120
            }
            .to_string(),
            "   comparisons: 10, swaps: 4, elapsed: 120ms"
        );
    }
}
