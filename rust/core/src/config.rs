// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enumeration tuning loaded from environment variables.

use crate::control::DEFAULT_PROGRESS_INTERVAL;

/// Default number of candidates per parallel work unit.
pub const DEFAULT_CHUNK_SIZE: u64 = 4096;

/// Enumeration configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationConfig {
    /// Iterations between progress reports.
    pub progress_interval: u64,
    /// Candidates scanned by one parallel work unit.
    pub chunk_size: u64,
    /// Threads used by the parallel enumerator.
    pub worker_threads: usize,
}

impl EnumerationConfig {
    /// Load configuration from environment variables.
    ///
    /// - `FINTOPO_PROGRESS_INTERVAL` (default 100)
    /// - `FINTOPO_CHUNK_SIZE` (default 4096)
    /// - `FINTOPO_WORKER_THREADS` (default: number of CPUs)
    ///
    /// Unparseable values fall back to the defaults; zero is raised to 1.
    pub fn from_env() -> Self {
        Self {
            progress_interval: env_or("FINTOPO_PROGRESS_INTERVAL", DEFAULT_PROGRESS_INTERVAL).max(1),
            chunk_size: env_or("FINTOPO_CHUNK_SIZE", DEFAULT_CHUNK_SIZE).max(1),
            worker_threads: env_or("FINTOPO_WORKER_THREADS", num_cpus::get()).max(1),
        }
    }
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or<V: std::str::FromStr>(key: &str, default: V) -> V {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}
