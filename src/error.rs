use thiserror::Error;

use crate::api::units::{DataRate, TimeDelta};

/// Errors raised while setting up a flow. Everything past construction is
/// recoverable and reported through logging instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BweError {
    #[error("invalid bitrate bounds: min {min:?} exceeds max {max:?}")]
    InvalidBitrateBounds { min: DataRate, max: DataRate },

    #[error("start bitrate {start:?} outside of [{min:?}, {max:?}]")]
    StartBitrateOutOfBounds {
        start: DataRate,
        min: DataRate,
        max: DataRate,
    },

    #[error("estimator min bitrate {estimator_min:?} outside of [{min:?}, {max:?}]")]
    EstimatorMinBitrateOutOfBounds {
        estimator_min: DataRate,
        min: DataRate,
        max: DataRate,
    },

    #[error("send time history capacity must be non-zero")]
    ZeroCapacity,

    #[error("feedback interval must be positive, got {interval:?}")]
    NonPositiveFeedbackInterval { interval: TimeDelta },
}

pub type Result<T> = std::result::Result<T, BweError>;
