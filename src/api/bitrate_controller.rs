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
    transport::ReportBlock,
    units::{DataRate, TimeDelta, Timestamp},
};

/// Network parameters decided by a [BitrateController].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetBitrate {
    pub at_time: Timestamp,
    pub target_rate: DataRate,
    /// Loss in 1/256 units, as reported by the most recent report block.
    pub fraction_loss: u8,
    pub round_trip_time: TimeDelta,
}

impl Default for TargetBitrate {
    fn default() -> Self {
        Self {
            at_time: Timestamp::plus_infinity(),
            target_rate: DataRate::zero(),
            fraction_loss: 0,
            round_trip_time: TimeDelta::plus_infinity(),
        }
    }
}

/// Adaptive controller that turns loss reports and remote estimates into a
/// target send rate.
///
/// Implementations are driven from a single flow and never concurrently.
/// Instead of calling an observer, [BitrateController::process] returns the new
/// target when it changed.
pub trait BitrateController: Send {
    fn set_start_bitrate(&mut self, start_bitrate: DataRate);

    fn set_min_max_bitrate(&mut self, min_bitrate: DataRate, max_bitrate: DataRate);

    // Called with RTCP style receiver reports.
    fn deliver_receiver_report(
        &mut self,
        report_blocks: &[ReportBlock],
        rtt: TimeDelta,
        at_time: Timestamp,
    );

    // Called when the remote side (or a local remote bitrate estimator) has an
    // estimate of the available bandwidth.
    fn deliver_estimated_bitrate(&mut self, bitrate: DataRate, at_time: Timestamp);

    fn process(&mut self, at_time: Timestamp) -> Option<TargetBitrate>;

    fn time_until_next_process(&self, at_time: Timestamp) -> TimeDelta;
}
