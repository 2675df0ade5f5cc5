/*
 *  Copyright (c) 2015 The WebRTC project authors. All Rights Reserved.
 *
 *  Use of this source code is governed by a BSD-style license
 *  that can be found in the LICENSE file in the root of the source
 *  tree. An additional intellectual property rights grant can be found
 *  in the file PATENTS.  All contributing project authors may
 *  be found in the AUTHORS file in the root of the source tree.
 */

/// RTCP style receiver report block synthesized by the sender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportBlock {
    pub source_ssrc: u32,
    /// Fraction of expected packets lost since the last block, in 1/256 units.
    pub fraction_lost: u8,
    /// Total packets lost over the flow. 24 bit signed on the wire, so it
    /// saturates at [ReportBlock::MAX_CUMULATIVE_LOST].
    pub cumulative_lost: i32,
    /// Highest sequence number seen, with the wrap count in the upper 16 bits.
    pub extended_high_seq_num: u32,
}

impl ReportBlock {
    pub const MAX_CUMULATIVE_LOST: i32 = 0x7F_FFFF;

    pub fn fraction_lost_float(&self) -> f64 {
        self.fraction_lost as f64 / 256.0
    }

    /// Wrap count of the extended high sequence number.
    pub const fn sequence_number_cycles(&self) -> u16 {
        (self.extended_high_seq_num >> 16) as u16
    }
}
