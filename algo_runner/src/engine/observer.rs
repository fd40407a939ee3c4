// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use tokio::sync::mpsc::UnboundedSender;

use crate::{Annotation, PartialStats};

/// Receives everything a run publishes, in strict program order. Every method gets an
/// owned copy, so an observer can hold on to snapshots across renders without sharing
/// any mutable state with the runner.
///
/// All the methods default to doing nothing, so implement only the ones you need.
pub trait RunObserver<T> {
    /// The working sequence changed. The snapshot is a full copy of it.
    fn on_sequence_change(&mut self, _snapshot: Vec<T>) {}

    /// The visual state changed. There is one annotation per index.
    fn on_annotation_change(&mut self, _annotations: Vec<Annotation>) {}

    /// Some counters changed. Merge this into your totals with
    /// [`crate::RunStats::apply()`].
    fn on_stats_change(&mut self, _stats: PartialStats) {}
}

/// Ignore everything.
impl<T> RunObserver<T> for () {}

/// One published change, as a message. See the [`RunObserver`] implementation for
/// [`UnboundedSender`].
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent<T> {
    SequenceChanged(Vec<T>),
    AnnotationsChanged(Vec<Annotation>),
    StatsChanged(PartialStats),
}

/// Forward every change to another task (eg: the one that owns the UI state and
/// renders). Send errors are ignored, since a receiver that has gone away just means
/// nobody is watching anymore.
impl<T> RunObserver<T> for UnboundedSender<RunEvent<T>> {
    fn on_sequence_change(&mut self, snapshot: Vec<T>) {
        self.send(RunEvent::SequenceChanged(snapshot)).ok();
    }

    fn on_annotation_change(&mut self, annotations: Vec<Annotation>) {
        self.send(RunEvent::AnnotationsChanged(annotations)).ok();
    }

    fn on_stats_change(&mut self, stats: PartialStats) {
        self.send(RunEvent::StatsChanged(stats)).ok();
    }
}

type BoxedCallback<A> = Box<dyn FnMut(A) + Send>;

/// Callback style observer. Each callback is optional.
///
/// ```
/// # use r3bl_algo_runner::{ObserverFns, RunStats};
/// let mut totals = RunStats::default();
/// let mut observer = ObserverFns::<i32>::default()
///     .on_sequence(|snapshot| println!("{snapshot:?}"))
///     .on_stats(move |update| totals.apply(update));
/// # let _ = &mut observer;
/// ```
pub struct ObserverFns<T> {
    maybe_on_sequence: Option<BoxedCallback<Vec<T>>>,
    maybe_on_annotations: Option<BoxedCallback<Vec<Annotation>>>,
    maybe_on_stats: Option<BoxedCallback<PartialStats>>,
}

impl<T> Default for ObserverFns<T> {
    fn default() -> Self {
        Self {
            maybe_on_sequence: None,
            maybe_on_annotations: None,
            maybe_on_stats: None,
        }
    }
}

impl<T> Debug for ObserverFns<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverFns")
            .field("on_sequence", &self.maybe_on_sequence.is_some())
            .field("on_annotations", &self.maybe_on_annotations.is_some())
            .field("on_stats", &self.maybe_on_stats.is_some())
            .finish()
    }
}

impl<T> ObserverFns<T> {
    #[must_use]
    pub fn on_sequence(mut self, callback: impl FnMut(Vec<T>) + Send + 'static) -> Self {
        self.maybe_on_sequence = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_annotations(
        mut self,
        callback: impl FnMut(Vec<Annotation>) + Send + 'static,
    ) -> Self {
        self.maybe_on_annotations = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_stats(mut self, callback: impl FnMut(PartialStats) + Send + 'static) -> Self {
        self.maybe_on_stats = Some(Box::new(callback));
        self
    }
}

impl<T> RunObserver<T> for ObserverFns<T> {
    fn on_sequence_change(&mut self, snapshot: Vec<T>) {
        if let Some(callback) = self.maybe_on_sequence.as_mut() {
            callback(snapshot);
        }
    }

    fn on_annotation_change(&mut self, annotations: Vec<Annotation>) {
        if let Some(callback) = self.maybe_on_annotations.as_mut() {
            callback(annotations);
        }
    }

    fn on_stats_change(&mut self, stats: PartialStats) {
        if let Some(callback) = self.maybe_on_stats.as_mut() {
            callback(stats);
        }
    }
}
