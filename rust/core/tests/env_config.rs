// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Environment-driven progress interval. Lives in its own test binary so the
//! variable never reaches other tests.

use std::sync::{Arc, Mutex};

use fintopo_core::{topologies_with, EnumerationConfig, EnumerationControl, Set};

#[test]
fn progress_interval_is_read_from_the_environment() {
    std::env::set_var("FINTOPO_PROGRESS_INTERVAL", "16");
    assert_eq!(EnumerationConfig::from_env().progress_interval, 16);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let control =
        EnumerationControl::default().with_progress(move |p: f64| sink.lock().unwrap().push(p));

    let set: Set<u8> = (0..3).collect();
    let count = topologies_with(&set, control)
        .unwrap()
        .filter(Result::is_ok)
        .count();

    assert_eq!(count, 29);
    assert_eq!(*seen.lock().unwrap(), vec![0.0, 25.0, 50.0, 75.0, 100.0, 0.0]);
}
