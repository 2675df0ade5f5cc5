use crate::{
    api::{
        remote_bitrate_estimator::RateControlType,
        units::{DataRate, TimeDelta},
    },
    BweError, Result,
};

/// Lower bound for any configured flow.
pub const MIN_BITRATE: DataRate = DataRate::from_kilobits_per_sec(50);
/// Upper bound for any configured flow.
pub const MAX_BITRATE: DataRate = DataRate::from_kilobits_per_sec(2500);
pub const DEFAULT_START_BITRATE: DataRate = DataRate::from_kilobits_per_sec(300);
/// Minimum spacing between two feedback reports of one flow.
pub const FEEDBACK_INTERVAL: TimeDelta = TimeDelta::from_millis(100);
pub const SEND_TIME_HISTORY_CAPACITY: usize = 10000;

/// Settings for the sending side of a flow.
#[derive(Clone, Debug)]
pub struct SendSideBweConfig {
    /// Source SSRC stamped on synthesized report blocks.
    pub ssrc: u32,

    /// Handed to the bitrate controller once at construction. Must lie within
    /// `[min_bitrate, max_bitrate]`, it is never clamped.
    pub start_bitrate: DataRate,
    pub min_bitrate: DataRate,
    pub max_bitrate: DataRate,

    /// Packets awaiting acknowledgment before the oldest are forgotten.
    pub send_time_history_capacity: usize,

    /// Feedback cadence advertised to the transport.
    pub feedback_interval: TimeDelta,

    // Remote bitrate estimator construction.
    pub rate_control_type: RateControlType,
    /// Floor for the remote bitrate estimator. Follows `min_bitrate` when
    /// unset, otherwise must lie within `[min_bitrate, max_bitrate]`.
    pub estimator_min_bitrate: Option<DataRate>,
}

impl Default for SendSideBweConfig {
    fn default() -> Self {
        Self {
            ssrc: 0,
            start_bitrate: DEFAULT_START_BITRATE,
            min_bitrate: MIN_BITRATE,
            max_bitrate: MAX_BITRATE,
            send_time_history_capacity: SEND_TIME_HISTORY_CAPACITY,
            feedback_interval: FEEDBACK_INTERVAL,
            rate_control_type: RateControlType::Aimd,
            estimator_min_bitrate: None,
        }
    }
}

impl SendSideBweConfig {
    pub fn with_start_bitrate(start_bitrate: DataRate) -> Self {
        Self {
            start_bitrate,
            ..Default::default()
        }
    }

    /// The floor handed to the remote bitrate estimator.
    pub fn estimator_min_bitrate(&self) -> DataRate {
        self.estimator_min_bitrate.unwrap_or(self.min_bitrate)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_bitrate > self.max_bitrate {
            return Err(BweError::InvalidBitrateBounds {
                min: self.min_bitrate,
                max: self.max_bitrate,
            });
        }
        if self.start_bitrate < self.min_bitrate || self.start_bitrate > self.max_bitrate {
            return Err(BweError::StartBitrateOutOfBounds {
                start: self.start_bitrate,
                min: self.min_bitrate,
                max: self.max_bitrate,
            });
        }
        if let Some(estimator_min_bitrate) = self.estimator_min_bitrate {
            if estimator_min_bitrate < self.min_bitrate
                || estimator_min_bitrate > self.max_bitrate
            {
                return Err(BweError::EstimatorMinBitrateOutOfBounds {
                    estimator_min: estimator_min_bitrate,
                    min: self.min_bitrate,
                    max: self.max_bitrate,
                });
            }
        }
        if self.send_time_history_capacity == 0 {
            return Err(BweError::ZeroCapacity);
        }
        if self.feedback_interval <= TimeDelta::zero() {
            return Err(BweError::NonPositiveFeedbackInterval {
                interval: self.feedback_interval,
            });
        }
        Ok(())
    }
}

/// Settings for the receiving side of a flow.
#[derive(Clone, Debug)]
pub struct ReceiverConfig {
    pub flow_id: u32,
    /// Hard lower bound on the spacing between emitted reports.
    pub feedback_interval: TimeDelta,
}

impl ReceiverConfig {
    pub fn new(flow_id: u32) -> Self {
        Self {
            flow_id,
            ..Default::default()
        }
    }
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            flow_id: 0,
            feedback_interval: FEEDBACK_INTERVAL,
        }
    }
}
