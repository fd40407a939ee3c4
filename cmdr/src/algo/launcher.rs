// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use r3bl_algo_runner::{Algorithm, Annotation, CancellationSignal, Completion, Delay,
                       RunEvent, RunRequest, RunStats, run};
use serde::Serialize;

use crate::algo::{CLIArg, UIStrings, build_request, fmt_report, fmt_step_line,
                  resolve_values};

/// What the run ended with. This is what `--json` prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub input: Vec<f64>,
    /// [None] when the run was stopped.
    #[serde(rename = "completion")]
    pub maybe_completion: Option<Completion>,
    /// `0` for a sort, the index or `-1` for a search, [None] when stopped.
    #[serde(rename = "result")]
    pub maybe_result: Option<i64>,
    pub sequence: Vec<f64>,
    pub stats: RunStats,
    /// How many annotation changes were seen.
    pub steps: u64,
}

impl RunReport {
    #[must_use]
    pub fn is_stopped(&self) -> bool { self.maybe_completion.is_none() }
}

/// The UI side copy of the run state, rebuilt from the events the runner sends.
#[derive(Debug, Clone, Default)]
pub struct RunWatcher {
    sequence: Vec<f64>,
    stats: RunStats,
    steps: u64,
}

impl RunWatcher {
    #[must_use]
    pub fn new(sequence: Vec<f64>) -> Self {
        Self {
            sequence,
            ..Default::default()
        }
    }

    /// Fold in one event. The runner publishes annotations last for each step, so an
    /// annotation change is when a step is complete and gets a line.
    pub fn apply(&mut self, event: RunEvent<f64>) -> Option<String> {
        match event {
            RunEvent::SequenceChanged(snapshot) => {
                self.sequence = snapshot;
                None
            }
            RunEvent::StatsChanged(update) => {
                self.stats.apply(update);
                None
            }
            RunEvent::AnnotationsChanged(annotations) => {
                self.steps += 1;
                Some(self.fmt_step(&annotations))
            }
        }
    }

    fn fmt_step(&self, annotations: &[Annotation]) -> String {
        fmt_step_line(self.steps, &self.sequence, annotations, &self.stats)
    }

    #[must_use]
    pub fn steps(&self) -> u64 { self.steps }

    #[must_use]
    pub fn stats(&self) -> RunStats { self.stats }

    #[must_use]
    pub fn sequence(&self) -> &[f64] { &self.sequence }
}

/// Run `request` on its own task, and hand each step's line to `on_line` as it
/// happens. Setting `signal` stops the run, which is reported as a stopped
/// [`RunReport`], not as an error.
///
/// # Errors
///
/// Returns an error if the input is rejected, or if the run task panics.
pub async fn run_and_watch(
    request: RunRequest,
    values: Vec<f64>,
    delay: Delay,
    signal: CancellationSignal,
    mut on_line: impl FnMut(String),
) -> miette::Result<RunReport> {
    let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel::<RunEvent<f64>>();

    let run_task = tokio::spawn({
        let values = values.clone();
        async move {
            let mut observer = sender;
            run(request, &values, &mut observer, &delay, &signal).await
        }
    });

    // The channel closes when the run task drops its sender.
    let mut watcher = RunWatcher::new(values.clone());
    while let Some(event) = receiver.recv().await {
        if let Some(line) = watcher.apply(event) {
            on_line(line);
        }
    }

    let algorithm = request.algorithm();
    match run_task.await.into_diagnostic()? {
        Ok(outcome) => Ok(RunReport {
            algorithm,
            input: values,
            maybe_completion: Some(outcome.completion),
            maybe_result: Some(outcome.completion.result_code()),
            sequence: outcome.sequence,
            stats: outcome.stats,
            steps: watcher.steps(),
        }),
        Err(error) if error.is_cancelled() => {
            tracing::info!(message = "Run stopped", steps = watcher.steps());
            Ok(RunReport {
                algorithm,
                input: values,
                maybe_completion: None,
                maybe_result: None,
                sequence: watcher.sequence().to_vec(),
                stats: watcher.stats(),
                steps: watcher.steps(),
            })
        }
        Err(error) => Err(error.into()),
    }
}

/// Resolve the input, run with `Ctrl+C` wired to the cancellation signal, and print
/// either every step and a summary, or (with `--json`) just the [`RunReport`].
///
/// # Errors
///
/// Returns an error if the options are unusable, or if the runner rejects the input.
pub async fn launch_algo(cli_arg: CLIArg) -> miette::Result<()> {
    let algorithm = cli_arg.algorithm;
    let maybe_target = cli_arg.run_options.maybe_target;
    let json = cli_arg.run_options.json;

    let values = resolve_values(&cli_arg.input_options, algorithm)?;
    let request = build_request(algorithm, maybe_target)?;
    let delay = Delay::from_millis(cli_arg.run_options.delay_ms);
    let signal = CancellationSignal::new();

    let ctrl_c_task = tokio::spawn({
        let signal = signal.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::debug!(message = "Ctrl+C pressed");
                signal.cancel();
            }
        }
    });

    if !json {
        println!(
            "{}",
            UIStrings::Running {
                algorithm: algorithm.to_string(),
                len: values.len(),
            }
        );
        println!("{}", UIStrings::Legend);
    }

    let result = run_and_watch(request, values, delay, signal, |line| {
        if !json {
            println!("{line}");
        }
    })
    .await;
    ctrl_c_task.abort();

    let report = match result {
        Ok(it) => it,
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not run algo due to the following problem",
                error = ?error
            );
            return Err(error.wrap_err(UIStrings::CouldNotRun.to_string()));
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
    } else {
        for line in fmt_report(&report, maybe_target) {
            println!("{line}");
        }
    }

    Ok(())
}
