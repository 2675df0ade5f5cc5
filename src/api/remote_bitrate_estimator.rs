/*
 *  Copyright (c) 2012 The WebRTC project authors. All Rights Reserved.
 *
 *  Use of this source code is governed by a BSD-style license
 *  that can be found in the LICENSE file in the root of the source
 *  tree. An additional intellectual property rights grant can be found
 *  in the file PATENTS.  All contributing project authors may
 *  be found in the AUTHORS file in the root of the source tree.
 */

use super::{
    transport::PacketObservation,
    units::{DataRate, TimeDelta, Timestamp},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RateControlType {
    Mimd,
    #[default]
    Aimd,
}

/// A new bandwidth estimate from a [RemoteBitrateEstimator].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiveBitrateChanged {
    pub ssrcs: Vec<u32>,
    pub bitrate: DataRate,
}

/// Infers available bandwidth from send and arrival time deltas.
///
/// Estimate changes are returned rather than pushed to an observer; the owner
/// forwards them to its [BitrateController](super::bitrate_controller::BitrateController).
pub trait RemoteBitrateEstimator: Send {
    /// Called with one feedback batch at a time. Observations with an unknown
    /// send time are included so arrival deltas remain usable.
    fn incoming_packet_feedback_vector(
        &mut self,
        observations: &[PacketObservation],
    ) -> Option<ReceiveBitrateChanged>;

    fn process(&mut self, at_time: Timestamp) -> Option<ReceiveBitrateChanged>;

    fn time_until_next_process(&self, at_time: Timestamp) -> TimeDelta;
}

pub trait RemoteBitrateEstimatorFactory {
    fn create(
        &self,
        rate_control_type: RateControlType,
        min_bitrate: DataRate,
    ) -> Box<dyn RemoteBitrateEstimator>;
}

impl<F> RemoteBitrateEstimatorFactory for F
where
    F: Fn(RateControlType, DataRate) -> Box<dyn RemoteBitrateEstimator>,
{
    fn create(
        &self,
        rate_control_type: RateControlType,
        min_bitrate: DataRate,
    ) -> Box<dyn RemoteBitrateEstimator> {
        self(rate_control_type, min_bitrate)
    }
}
