#![allow(dead_code)]

use hifitime::{Duration, Epoch};

use ramure::trajectories::Branch;

/// Reference epoch of the test trajectories.
pub fn t0() -> Epoch {
    Epoch::from_mjd_utc(59215.0)
}

/// `t0` shifted by `offset` seconds.
pub fn sec(offset: f64) -> Epoch {
    t0() + Duration::from_seconds(offset)
}

/// Every effective sample time of `branch`, in iteration order.
pub fn times<T: Copy + Ord, P: Clone>(branch: &Branch<T, P>) -> Vec<T> {
    branch.iter().map(|(time, _)| time).collect()
}

/// Effective sample times of `branch` from `time` (inclusive) onwards.
pub fn after<T: Copy + Ord, P>(branch: &Branch<T, P>, time: T) -> Vec<T> {
    let mut cursor = branch.find(time);
    let mut out = Vec::new();
    while let Some(sample_time) = cursor.time() {
        out.push(sample_time);
        if cursor.advance().is_err() {
            break;
        }
    }
    out
}

/// Time of the last effective sample of `branch`.
pub fn last_time<T: Copy + Ord, P>(branch: &Branch<T, P>) -> T {
    let mut cursor = branch.end();
    cursor.retreat().expect("the trajectory has no samples");
    cursor.time().expect("a non-end cursor designates a sample")
}
