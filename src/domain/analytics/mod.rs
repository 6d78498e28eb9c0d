// Shared numeric helpers
pub mod stats;

pub use stats::{Stats, ZERO_VARIANCE_EPSILON};
