// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The one stepping engine that every algorithm is written against.
//!
//! An algorithm never touches the observer, the delay, or the cancellation signal
//! directly. It calls the step helpers on [`StepContext`], and each helper does exactly
//! one visible step:
//!
//! 1. Poll the cancellation signal.
//! 2. Do the work (compare, swap, place) and bump the stats.
//! 3. Publish whatever changed, in that order: sequence, annotations, stats.
//! 4. Suspend once for the current delay, and poll the signal again on the way out.
//!
//! Any [`RunError::Cancelled`] is returned with `?`, so it unwinds through partition,
//! heapify, and merge helpers up to the top of the run without being caught.

use std::{cmp::Ordering, ops::Range, time::Instant};

use crate::{Annotation, CancellationSignal, Delay, Element, Highlight, PartialStats,
            RunError, RunObserver, RunResult, RunStats, cmp_keys};

#[derive(Debug)]
pub struct StepContext<'a, T, O> {
    working: Vec<T>,
    finalized: Vec<bool>,
    observer: &'a mut O,
    delay: &'a Delay,
    signal: &'a CancellationSignal,
    stats: RunStats,
    suspensions: u64,
    started_at: Instant,
}

impl<'a, T, O> StepContext<'a, T, O>
where
    T: Element,
    O: RunObserver<T>,
{
    /// Make a private working copy of `sequence`. Stats start at zero.
    pub fn new(
        sequence: &[T],
        observer: &'a mut O,
        delay: &'a Delay,
        signal: &'a CancellationSignal,
    ) -> Self {
        Self {
            working: sequence.to_vec(),
            finalized: vec![false; sequence.len()],
            observer,
            delay,
            signal,
            stats: RunStats::default(),
            suspensions: 0,
            started_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.working.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.working.is_empty() }

    /// The comparable key of the element at `index`.
    #[must_use]
    pub fn key(&self, index: usize) -> f64 { self.working[index].sort_key() }

    #[must_use]
    pub fn get(&self, index: usize) -> &T { &self.working[index] }

    #[must_use]
    pub fn items(&self) -> &[T] { &self.working }

    #[must_use]
    pub fn stats(&self) -> RunStats { self.stats }

    /// How many times the run has yielded so far.
    #[must_use]
    pub fn suspensions(&self) -> u64 { self.suspensions }

    /// Give up the working copy along with the final stats and suspension count.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, RunStats, u64) {
        (self.working, self.stats, self.suspensions)
    }

    /// # Errors
    ///
    /// Returns [`RunError::Cancelled`] if the signal is set.
    pub fn check_cancelled(&self) -> RunResult<()> {
        if self.signal.is_cancelled() {
            Err(RunError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// The only place a run yields. The delay is read fresh every time, so the caller
    /// can change pacing mid run. A zero delay still yields to the runtime so that other
    /// tasks (eg: the one rendering snapshots) get to make progress.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Cancelled`] if the signal is set before or after yielding.
    pub async fn suspend(&mut self) -> RunResult<()> {
        self.check_cancelled()?;

        let duration = self.delay.get();
        if duration.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(duration).await;
        }
        self.suspensions += 1;
        self.refresh_elapsed();

        self.check_cancelled()
    }

    /// Publish `elapsed_ms`, only if it moved since the last publish.
    pub fn refresh_elapsed(&mut self) {
        let elapsed_ms = u64::try_from(self.started_at.elapsed().as_millis())
            .unwrap_or(u64::MAX)
            .max(self.stats.elapsed_ms);
        if elapsed_ms != self.stats.elapsed_ms {
            self.stats.elapsed_ms = elapsed_ms;
            self.observer
                .on_stats_change(PartialStats::elapsed_ms(elapsed_ms));
        }
    }

    pub fn publish_sequence(&mut self) {
        self.observer.on_sequence_change(self.working.clone());
    }

    /// Build a fresh annotation array: [`Annotation::Sorted`] for every finalized index,
    /// [`Annotation::Default`] everywhere else, then the `highlights` on top. Out of
    /// bounds highlights are ignored.
    pub fn publish_annotations(&mut self, highlights: &[Highlight]) {
        let mut annotations: Vec<Annotation> = self
            .finalized
            .iter()
            .map(|&is_final| {
                if is_final {
                    Annotation::Sorted
                } else {
                    Annotation::Default
                }
            })
            .collect();
        for &(index, annotation) in highlights {
            if let Some(slot) = annotations.get_mut(index) {
                *slot = annotation;
            }
        }
        self.observer.on_annotation_change(annotations);
    }

    pub fn record_comparison(&mut self) {
        self.stats.comparisons += 1;
        self.observer
            .on_stats_change(PartialStats::comparisons(self.stats.comparisons));
    }

    pub fn record_swap(&mut self) {
        self.stats.swaps += 1;
        self.observer
            .on_stats_change(PartialStats::swaps(self.stats.swaps));
    }

    /// Sorted marks are sticky, nothing unmarks an index.
    pub fn mark_sorted(&mut self, index: usize) {
        if let Some(it) = self.finalized.get_mut(index) {
            *it = true;
        }
    }

    pub fn mark_range_sorted(&mut self, range: Range<usize>) {
        for index in range {
            self.mark_sorted(index);
        }
    }

    pub fn mark_all_sorted(&mut self) { self.finalized.fill(true); }

    /// Compare the elements at `i` and `j`, highlighting both as
    /// [`Annotation::Comparing`].
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Cancelled`] if the signal is set.
    pub async fn compare(&mut self, i: usize, j: usize) -> RunResult<Ordering> {
        self.compare_highlighted(i, j, &[(i, Annotation::Comparing), (j, Annotation::Comparing)])
            .await
    }

    /// Compare the elements at `i` and `j`, with custom highlights (eg: a
    /// [`Annotation::Pivot`]).
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Cancelled`] if the signal is set.
    pub async fn compare_highlighted(
        &mut self,
        i: usize,
        j: usize,
        highlights: &[Highlight],
    ) -> RunResult<Ordering> {
        let (left, right) = (self.key(i), self.key(j));
        self.compare_keys(left, right, highlights).await
    }

    /// Compare the element at `index` against a key that isn't in the sequence (a held
    /// item, a search target).
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Cancelled`] if the signal is set.
    pub async fn compare_to_key(&mut self, index: usize, key: f64) -> RunResult<Ordering> {
        let left = self.key(index);
        self.compare_keys(left, key, &[(index, Annotation::Comparing)])
            .await
    }

    /// Compare two keys that may live outside the working copy (auxiliary merge
    /// buffers, buckets, strands). This is the step every other compare helper goes
    /// through.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Cancelled`] if the signal is set.
    pub async fn compare_keys(
        &mut self,
        left: f64,
        right: f64,
        highlights: &[Highlight],
    ) -> RunResult<Ordering> {
        self.check_cancelled()?;
        self.record_comparison();
        self.publish_annotations(highlights);
        self.suspend().await?;
        Ok(cmp_keys(left, right))
    }

    /// Swap the elements at `i` and `j`. Counts as one swap.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Cancelled`] if the signal is set.
    pub async fn swap(&mut self, i: usize, j: usize) -> RunResult<()> {
        self.check_cancelled()?;
        self.working.swap(i, j);
        self.record_swap();
        self.publish_sequence();
        self.publish_annotations(&[(i, Annotation::Swapping), (j, Annotation::Swapping)]);
        self.suspend().await
    }

    /// Write `value` at `index` and hand back what was there. Counts as one swap (the
    /// single element placement convention).
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Cancelled`] if the signal is set.
    pub async fn exchange(&mut self, index: usize, value: T) -> RunResult<T> {
        self.check_cancelled()?;
        let previous = std::mem::replace(&mut self.working[index], value);
        self.record_swap();
        self.publish_sequence();
        self.publish_annotations(&[(index, Annotation::Swapping)]);
        self.suspend().await?;
        Ok(previous)
    }

    /// Like [`Self::exchange()`], when the old value isn't needed.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Cancelled`] if the signal is set.
    pub async fn place(&mut self, index: usize, value: T) -> RunResult<()> {
        self.exchange(index, value).await.map(drop)
    }

    /// Silent write: no stats, no publish, no suspension. Follow a batch of these with
    /// one [`Self::publish_sequence()`].
    pub fn write(&mut self, index: usize, value: T) { self.working[index] = value; }

    /// Mark every index sorted and publish the final annotation array.
    pub fn publish_final(&mut self) {
        self.mark_all_sorted();
        self.publish_annotations(&[]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RecordingObserver, RunEvent};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_swap_publishes_sequence_then_annotations_then_suspends() {
        let mut observer = RecordingObserver::default();
        let delay = Delay::default();
        let signal = CancellationSignal::default();
        let mut ctx = StepContext::new(&[1, 2, 3], &mut observer, &delay, &signal);

        ctx.swap(0, 2).await.unwrap();

        assert_eq!(ctx.items(), &[3, 2, 1]);
        assert_eq!(ctx.stats().swaps, 1);
        assert_eq!(ctx.suspensions(), 1);
        drop(ctx);

        let events: Vec<_> = observer
            .events
            .into_iter()
            .filter(|it| !matches!(it, RunEvent::StatsChanged(s) if s.elapsed_ms.is_some()))
            .collect();
        assert_eq!(
            events,
            vec![
                RunEvent::StatsChanged(PartialStats::swaps(1)),
                RunEvent::SequenceChanged(vec![3, 2, 1]),
                RunEvent::AnnotationsChanged(vec![
                    Annotation::Swapping,
                    Annotation::Default,
                    Annotation::Swapping,
                ]),
            ]
        );
    }

    #[tokio::test]
    async fn test_sorted_marks_survive_highlights_elsewhere() {
        let mut observer = RecordingObserver::default();
        let delay = Delay::default();
        let signal = CancellationSignal::default();
        let mut ctx = StepContext::new(&[4, 5, 6], &mut observer, &delay, &signal);

        ctx.mark_sorted(2);
        let ordering = ctx.compare(0, 1).await.unwrap();
        assert_eq!(ordering, Ordering::Less);
        drop(ctx);

        assert_eq!(
            observer.annotation_snapshots().last().unwrap(),
            &vec![Annotation::Comparing, Annotation::Comparing, Annotation::Sorted]
        );
    }

    #[tokio::test]
    async fn test_cancelled_signal_stops_the_step_before_it_mutates() {
        let mut observer = RecordingObserver::default();
        let delay = Delay::default();
        let signal = CancellationSignal::default();
        signal.cancel();
        let mut ctx = StepContext::new(&[2, 1], &mut observer, &delay, &signal);

        assert_eq!(ctx.swap(0, 1).await, Err(RunError::Cancelled));
        assert_eq!(ctx.items(), &[2, 1]);
        assert_eq!(ctx.stats(), RunStats::default());
        drop(ctx);
        assert!(observer.events.is_empty());
    }

    #[tokio::test]
    async fn test_exchange_returns_previous_and_counts_a_swap() {
        let mut observer: () = ();
        let delay = Delay::default();
        let signal = CancellationSignal::default();
        let mut ctx = StepContext::new(&[7, 8], &mut observer, &delay, &signal);

        let previous = ctx.exchange(1, 9).await.unwrap();
        assert_eq!(previous, 8);
        assert_eq!(ctx.items(), &[7, 9]);
        assert_eq!(ctx.stats().swaps, 1);

        ctx.write(0, 1);
        assert_eq!(ctx.items(), &[1, 9]);
        assert_eq!(ctx.stats().swaps, 1);
    }

    #[tokio::test]
    async fn test_out_of_bounds_highlight_is_ignored() {
        let mut observer = RecordingObserver::default();
        let delay = Delay::default();
        let signal = CancellationSignal::default();
        let mut ctx = StepContext::new(&[1], &mut observer, &delay, &signal);
        ctx.publish_annotations(&[(5, Annotation::Pivot)]);
        drop(ctx);
        assert_eq!(observer.annotation_snapshots(), vec![vec![Annotation::Default]]);
    }
}
