// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_algo_runner::{Algorithm, AlgorithmFamily, Annotation, Completion, RunStats};

use crate::algo::{RunReport, UIStrings};

const STEP_COLUMN_WIDTH: usize = 5;

/// Every algorithm name, one line per [`AlgorithmFamily`]. This is the `--help` list.
#[must_use]
pub fn fmt_algorithm_families() -> String {
    AlgorithmFamily::all()
        .map(|family| {
            let names = family
                .members()
                .map(Algorithm::name)
                .collect::<Vec<_>>()
                .join(", ");
            UIStrings::FamilyMembers {
                family: family.to_string(),
                names,
            }
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap a value in the marker for its annotation. See [`UIStrings::Legend`].
#[must_use]
pub fn fmt_value(value: f64, annotation: Annotation) -> String {
    match annotation {
        Annotation::Default => format!(" {value} "),
        Annotation::Comparing => format!("({value})"),
        Annotation::Swapping => format!("<{value}>"),
        Annotation::Pivot => format!("|{value}|"),
        Annotation::Sorted => format!("[{value}]"),
    }
}

/// One line per step: the step number, every value with its marker, and the running
/// counters. Indices past the end of `annotations` are drawn as
/// [`Annotation::Default`].
#[must_use]
pub fn fmt_step_line(
    step: u64,
    values: &[f64],
    annotations: &[Annotation],
    stats: &RunStats,
) -> String {
    let cells = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            fmt_value(*value, annotations.get(index).copied().unwrap_or_default())
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{step:>STEP_COLUMN_WIDTH$} {cells}   cmp {} swp {} {}ms",
        stats.comparisons, stats.swaps, stats.elapsed_ms
    )
}

/// The closing lines, once the run has ended (or was stopped).
#[must_use]
pub fn fmt_report(report: &RunReport, maybe_target: Option<f64>) -> Vec<String> {
    let target = maybe_target.map(|it| it.to_string()).unwrap_or_default();
    let headline = match report.maybe_completion {
        Some(Completion::Sorted) => UIStrings::Sorted {
            len: report.sequence.len(),
        },
        Some(Completion::Found(index)) => UIStrings::Found { target, index },
        Some(Completion::NotFound) => UIStrings::NotFound { target },
        None => UIStrings::Stopped {
            steps: report.steps,
        },
    };
    let stats = UIStrings::StatsSummary {
        comparisons: report.stats.comparisons,
        swaps: report.stats.swaps,
        elapsed_ms: report.stats.elapsed_ms,
    };
    vec![headline.to_string(), stats.to_string()]
}
