pub mod constants;
pub mod quantities;
pub mod ramure_errors;
pub mod timeline;
pub mod trajectories;

pub use quantities::{Dimensions, Quantity};
pub use ramure_errors::RamureError;
pub use timeline::{Position, Timeline};
pub use trajectories::{Branch, Cursor, Samples, Trajectory};

/// Branching trajectory over the [`hifitime`] time axis, the instantiation
/// the integrator and the eclipse search work with.
pub type EpochTrajectory<P> = Trajectory<hifitime::Epoch, P>;
