/*
 *  Copyright (c) 2015 The WebRTC project authors. All Rights Reserved.
 *
 *  Use of this source code is governed by a BSD-style license
 *  that can be found in the LICENSE file in the root of the source
 *  tree. An additional intellectual property rights grant can be found
 *  in the file PATENTS.  All contributing project authors may
 *  be found in the AUTHORS file in the root of the source tree.
 */

use crate::api::units::{DataSize, Timestamp};

/// Arrival of a single packet, as observed by the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketObservation {
    pub sequence_number: u16,
    /// None when the sender could not resolve the send time.
    pub send_time: Option<Timestamp>,
    pub arrival_time: Timestamp,
    pub payload_size: DataSize,
}

impl PacketObservation {
    pub const fn has_send_time(&self) -> bool {
        self.send_time.is_some()
    }
}

impl Default for PacketObservation {
    fn default() -> Self {
        Self {
            sequence_number: 0,
            send_time: None,
            arrival_time: Timestamp::plus_infinity(),
            payload_size: DataSize::zero(),
        }
    }
}

/// Receiver to sender summary of every arrival since the previous report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackReport {
    pub flow_id: u32,
    pub generated_time: Timestamp,
    /// In arrival order.
    pub observations: Vec<PacketObservation>,
}

impl FeedbackReport {
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The most recently arrived observation, which carries the high water
    /// mark for loss accounting.
    pub fn last_observation(&self) -> Option<&PacketObservation> {
        self.observations.last()
    }
}

impl Default for FeedbackReport {
    fn default() -> Self {
        Self {
            flow_id: 0,
            generated_time: Timestamp::plus_infinity(),
            observations: Vec::new(),
        }
    }
}
