/*
 *  Copyright (c) 2015 The WebRTC project authors. All Rights Reserved.
 *
 *  Use of this source code is governed by a BSD-style license
 *  that can be found in the LICENSE file in the root of the source
 *  tree. An additional intellectual property rights grant can be found
 *  in the file PATENTS.  All contributing project authors may
 *  be found in the AUTHORS file in the root of the source tree.
 */

use crate::api::{
    bitrate_controller::TargetBitrate,
    transport::{FeedbackReport, MediaPacket, Packet},
    units::{TimeDelta, Timestamp},
};

/// Periodic work driven by the host loop.
pub trait Module {
    /// Time until [Module::process] should be called next. May be negative when
    /// processing is overdue.
    fn time_until_next_process(&self) -> TimeDelta;

    fn process(&mut self) -> Option<TargetBitrate>;
}

/// Sending half of a bandwidth estimator.
pub trait BweSender: Module {
    /// How often the receiver should send feedback.
    fn feedback_interval(&self) -> TimeDelta;

    fn give_feedback(&mut self, feedback: &FeedbackReport) -> Option<TargetBitrate>;

    fn on_packets_sent(&mut self, packets: &[Packet]);
}

/// Receiving half of a bandwidth estimator.
pub trait BweReceiver {
    fn receive_packet(&mut self, arrival_time: Timestamp, packet: &MediaPacket);

    fn get_feedback(&mut self, now: Timestamp) -> Option<FeedbackReport>;
}
