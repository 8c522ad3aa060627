use thiserror::Error;

use crate::quantities::Dimensions;

#[derive(Error, Debug)]
pub enum RamureError {
    #[error("sample times must be strictly increasing along a timeline")]
    OutOfOrder,

    #[error("cannot fork on an end cursor")]
    EmptyFork,

    #[error("cannot fork a root trajectory on an end cursor")]
    RootFork,

    #[error("the trajectory is a root")]
    IsRoot,

    #[error("the trajectory is not a root")]
    NotRoot,

    #[error("a root trajectory has no fork point")]
    NotAFork,

    #[error("the trajectory is not a child of this trajectory")]
    NotAChild,

    #[error("cannot attach a trajectory with an empty timeline")]
    EmptyTimeline,

    #[error("time is before the fork time")]
    BeforeForkTime,

    #[error("no parent sample matches the first time of the attached trajectory")]
    ForkSampleNotFound,

    #[error("cannot check forks on a nonroot trajectory")]
    NonRoot,

    #[error("found {count} fork(s) before the given time")]
    ForkFound { count: usize },

    #[error("cannot advance a cursor past the end")]
    PastEnd,

    #[error("cannot retreat a cursor before the beginning")]
    BeforeBegin,

    #[error("dimension mismatch between [{left}] and [{right}]")]
    DimensionMismatch { left: Dimensions, right: Dimensions },
}
