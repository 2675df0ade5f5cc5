/*
 *  Copyright (c) 2015 The WebRTC project authors. All Rights Reserved.
 *
 *  Use of this source code is governed by a BSD-style license
 *  that can be found in the LICENSE file in the root of the source
 *  tree. An additional intellectual property rights grant can be found
 *  in the file PATENTS.  All contributing project authors may
 *  be found in the AUTHORS file in the root of the source tree.
 */

use crate::{
    api::{
        transport::{AbsSendTime, FeedbackReport, MediaPacket, PacketObservation},
        units::{TimeDelta, Timestamp},
    },
    BweError, BweReceiver, ReceiverConfig, Result,
};

/// Collects arrivals and hands them back to the sender at most once per
/// feedback interval.
#[derive(Debug)]
pub struct SendSideBweReceiver {
    flow_id: u32,
    feedback_interval: TimeDelta,
    last_feedback: Timestamp,
    observations: Vec<PacketObservation>,
}

impl SendSideBweReceiver {
    pub fn new(config: ReceiverConfig) -> Result<Self> {
        if config.feedback_interval <= TimeDelta::zero() {
            return Err(BweError::NonPositiveFeedbackInterval {
                interval: config.feedback_interval,
            });
        }

        Ok(Self {
            flow_id: config.flow_id,
            feedback_interval: config.feedback_interval,
            last_feedback: Timestamp::zero(),
            observations: Vec::new(),
        })
    }

    pub fn flow_id(&self) -> u32 {
        self.flow_id
    }

    /// Observations buffered since the last report.
    pub fn pending_observations(&self) -> &[PacketObservation] {
        &self.observations
    }
}

impl BweReceiver for SendSideBweReceiver {
    fn receive_packet(&mut self, arrival_time: Timestamp, packet: &MediaPacket) {
        self.observations.push(PacketObservation {
            sequence_number: packet.sequence_number,
            send_time: Some(AbsSendTime::to_timestamp(packet.abs_send_time)),
            arrival_time,
            payload_size: packet.payload_size,
        });
    }

    // The interval is a hard limit, even an empty buffer waits for it.
    fn get_feedback(&mut self, now: Timestamp) -> Option<FeedbackReport> {
        if now - self.last_feedback < self.feedback_interval {
            return None;
        }
        self.last_feedback = now;

        tracing::trace!(
            "Sending feedback [flow: {}] [observations: {}]",
            self.flow_id,
            self.observations.len()
        );

        Some(FeedbackReport {
            flow_id: self.flow_id,
            generated_time: now,
            observations: std::mem::take(&mut self.observations),
        })
    }
}
