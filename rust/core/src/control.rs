// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cooperative cancellation and progress reporting for long enumerations.
//!
//! A worker thread owns the enumeration; the interactive side keeps a clone
//! of the [`CancellationToken`] and receives percentages through a
//! [`ProgressSink`] (a closure or an `mpsc` channel).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::config::EnumerationConfig;

/// Default number of loop iterations between progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100;

/// Shared flag used to ask a running enumeration to stop.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Receives progress percentages in `[0, 100]`.
pub trait ProgressSink {
    fn report(&mut self, percent: f64);
}

impl<F: FnMut(f64)> ProgressSink for F {
    fn report(&mut self, percent: f64) {
        self(percent)
    }
}

impl ProgressSink for Sender<f64> {
    fn report(&mut self, percent: f64) {
        // A dropped receiver just means nobody is watching any more.
        let _ = self.send(percent);
    }
}

/// Optional cancellation and progress hooks for an enumeration.
///
/// # Example
///
/// ```
/// use fintopo_core::{CancellationToken, EnumerationControl};
///
/// let token = CancellationToken::new();
/// let control = EnumerationControl::new()
///     .with_cancellation(token.clone())
///     .with_progress(|percent: f64| assert!((0.0..=100.0).contains(&percent)))
///     .with_progress_interval(50);
/// assert!(!control.is_cancelled());
/// ```
pub struct EnumerationControl {
    token: Option<CancellationToken>,
    progress: Option<Box<dyn ProgressSink + Send>>,
    interval: u64,
}

impl EnumerationControl {
    /// No cancellation, no progress reporting, built-in interval.
    pub fn new() -> Self {
        Self {
            token: None,
            progress: None,
            interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Takes the progress interval from `config`.
    pub fn from_config(config: &EnumerationConfig) -> Self {
        Self::new().with_progress_interval(config.progress_interval)
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = Some(token);
        self
    }

    pub fn with_progress<P: ProgressSink + Send + 'static>(mut self, sink: P) -> Self {
        self.progress = Some(Box::new(sink));
        self
    }

    /// Iterations between progress reports; clamped to at least 1.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.interval = interval.max(1);
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.as_ref().is_some_and(CancellationToken::is_cancelled)
    }

    pub(crate) fn interval(&self) -> u64 {
        self.interval
    }

    pub(crate) fn report(&mut self, percent: f64) {
        if let Some(sink) = self.progress.as_mut() {
            sink.report(percent.clamp(0.0, 100.0));
        }
    }
}

/// Reads the progress interval from the environment, like
/// [`EnumerationConfig::default`].
impl Default for EnumerationControl {
    fn default() -> Self {
        Self::from_config(&EnumerationConfig::from_env())
    }
}

impl std::fmt::Debug for EnumerationControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumerationControl")
            .field("token", &self.token)
            .field("progress", &self.progress.is_some())
            .field("interval", &self.interval)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::sync::Mutex;

    #[test]
    fn token_clones_share_state() {
        let token = CancellationToken::new();
        let observer = token.clone();
        assert!(!observer.is_cancelled());
        token.cancel();
        assert!(observer.is_cancelled());
    }

    #[test]
    fn closure_sink_receives_clamped_values() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut control =
            EnumerationControl::new().with_progress(move |p: f64| sink.lock().unwrap().push(p));

        control.report(50.0);
        control.report(150.0);

        assert_eq!(*seen.lock().unwrap(), vec![50.0, 100.0]);
    }

    #[test]
    fn channel_sink_survives_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        let mut control = EnumerationControl::new().with_progress(tx);
        control.report(10.0);
        assert_eq!(rx.recv().unwrap(), 10.0);

        drop(rx);
        control.report(20.0);
    }

    #[test]
    fn interval_is_at_least_one() {
        let control = EnumerationControl::new().with_progress_interval(0);
        assert_eq!(control.interval(), 1);
    }

    #[test]
    fn interval_comes_from_config() {
        let config = EnumerationConfig {
            progress_interval: 16,
            chunk_size: 64,
            worker_threads: 1,
        };
        assert_eq!(EnumerationControl::from_config(&config).interval(), 16);

        let zero = EnumerationConfig {
            progress_interval: 0,
            ..config
        };
        assert_eq!(EnumerationControl::from_config(&zero).interval(), 1);
    }

    #[test]
    fn default_follows_environment_config() {
        let expected = EnumerationConfig::from_env().progress_interval;
        assert_eq!(EnumerationControl::default().interval(), expected);
    }
}
