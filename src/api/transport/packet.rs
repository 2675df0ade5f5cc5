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

use super::{AbsSendTime, FeedbackReport};

/// A media packet as seen by the bandwidth estimation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaPacket {
    pub flow_id: u32,
    /// RTP sequence number, wraps at 2^16.
    pub sequence_number: u16,
    /// Local send time on the sender's clock.
    pub send_time: Timestamp,
    /// 24 bit absolute send time header extension, 6.18 fixed point seconds.
    pub abs_send_time: u32,
    pub payload_size: DataSize,
}

impl MediaPacket {
    /// Builds a packet whose absolute send time header matches `send_time`.
    pub const fn new(
        flow_id: u32,
        sequence_number: u16,
        send_time: Timestamp,
        payload_size: DataSize,
    ) -> Self {
        Self {
            flow_id,
            sequence_number,
            send_time,
            abs_send_time: AbsSendTime::from_timestamp(send_time),
            payload_size,
        }
    }

    /// Send time as carried in the header extension, wrapping every 64s.
    pub const fn abs_send_timestamp(&self) -> Timestamp {
        AbsSendTime::to_timestamp(self.abs_send_time)
    }
}

impl Default for MediaPacket {
    fn default() -> Self {
        Self {
            flow_id: 0,
            sequence_number: 0,
            send_time: Timestamp::plus_infinity(),
            abs_send_time: 0,
            payload_size: DataSize::zero(),
        }
    }
}

/// Anything that can travel through the simulated transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    Media(MediaPacket),
    Feedback(FeedbackReport),
}

impl Packet {
    pub const fn flow_id(&self) -> u32 {
        match self {
            Packet::Media(packet) => packet.flow_id,
            Packet::Feedback(report) => report.flow_id,
        }
    }

    pub const fn as_media(&self) -> Option<&MediaPacket> {
        match self {
            Packet::Media(packet) => Some(packet),
            Packet::Feedback(_) => None,
        }
    }
}

impl From<MediaPacket> for Packet {
    fn from(packet: MediaPacket) -> Self {
        Packet::Media(packet)
    }
}

impl From<FeedbackReport> for Packet {
    fn from(report: FeedbackReport) -> Self {
        Packet::Feedback(report)
    }
}
