// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Annotation, CancellationSignal, PartialStats, RunEvent, RunObserver, RunStats};

/// Observer that keeps every event, in the order it was published. Optionally sets a
/// [`CancellationSignal`] once it has seen a given number of sequence snapshots, which
/// is how tests cancel a run from "inside" a suspension.
#[derive(Debug, Clone)]
pub struct RecordingObserver<T> {
    pub events: Vec<RunEvent<T>>,
    maybe_cancel_after: Option<(usize, CancellationSignal)>,
}

impl<T> Default for RecordingObserver<T> {
    fn default() -> Self {
        Self {
            events: vec![],
            maybe_cancel_after: None,
        }
    }
}

impl<T: Clone> RecordingObserver<T> {
    /// Set `signal` right after the `count`th sequence snapshot is recorded.
    #[must_use]
    pub fn cancel_after_snapshots(count: usize, signal: CancellationSignal) -> Self {
        Self {
            events: vec![],
            maybe_cancel_after: Some((count, signal)),
        }
    }

    #[must_use]
    pub fn sequence_snapshots(&self) -> Vec<Vec<T>> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RunEvent::SequenceChanged(it) => Some(it.clone()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn annotation_snapshots(&self) -> Vec<Vec<Annotation>> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RunEvent::AnnotationsChanged(it) => Some(it.clone()),
                _ => None,
            })
            .collect()
    }

    /// Totals after each stats update, merged the way a UI would merge them.
    #[must_use]
    pub fn stats_history(&self) -> Vec<RunStats> {
        let mut acc = RunStats::default();
        self.events
            .iter()
            .filter_map(|event| match event {
                RunEvent::StatsChanged(update) => {
                    acc.apply(*update);
                    Some(acc)
                }
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn final_stats(&self) -> RunStats {
        self.stats_history().last().copied().unwrap_or_default()
    }
}

impl<T> RunObserver<T> for RecordingObserver<T> {
    fn on_sequence_change(&mut self, snapshot: Vec<T>) {
        self.events.push(RunEvent::SequenceChanged(snapshot));
        if let Some((count, signal)) = &self.maybe_cancel_after {
            let seen = self
                .events
                .iter()
                .filter(|it| matches!(it, RunEvent::SequenceChanged(_)))
                .count();
            if seen >= *count {
                signal.cancel();
            }
        }
    }

    fn on_annotation_change(&mut self, annotations: Vec<Annotation>) {
        self.events.push(RunEvent::AnnotationsChanged(annotations));
    }

    fn on_stats_change(&mut self, stats: PartialStats) {
        self.events.push(RunEvent::StatsChanged(stats));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cancels_after_count() {
        let signal = CancellationSignal::default();
        let mut observer = RecordingObserver::cancel_after_snapshots(2, signal.clone());

        observer.on_sequence_change(vec![1]);
        assert!(!signal.is_cancelled());
        observer.on_sequence_change(vec![2]);
        assert!(signal.is_cancelled());
        assert_eq!(observer.sequence_snapshots(), vec![vec![1], vec![2]]);
    }

    #[test]
    fn test_stats_history_merges_partials() {
        let mut observer = RecordingObserver::<i32>::default();
        observer.on_stats_change(PartialStats::comparisons(1));
        observer.on_stats_change(PartialStats::swaps(1));
        observer.on_stats_change(PartialStats::comparisons(2));

        assert_eq!(
            observer.final_stats(),
            RunStats {
                comparisons: 2,
                swaps: 1,
                elapsed_ms: 0,
            }
        );
        assert_eq!(observer.stats_history().len(), 3);
    }
}
