/*
 *  Copyright (c) 2015 The WebRTC project authors. All Rights Reserved.
 *
 *  Use of this source code is governed by a BSD-style license
 *  that can be found in the LICENSE file in the root of the source
 *  tree. An additional intellectual property rights grant can be found
 *  in the file PATENTS.  All contributing project authors may
 *  be found in the AUTHORS file in the root of the source tree.
 */

use crate::api::units::Timestamp;

/// Codec for the 24 bit absolute send time header extension.
///
/// The value is 6.18 fixed point seconds and wraps every 64 seconds.
pub struct AbsSendTime;

impl AbsSendTime {
    pub const FRACTION_BITS: u32 = 18;
    pub const MASK: u32 = 0x00FF_FFFF;
    /// Upshift applied before conversion so wraparound is handled as 32 bit.
    pub const INTER_ARRIVAL_UPSHIFT: u32 = 8;
    pub const INTER_ARRIVAL_SHIFT: u32 = Self::FRACTION_BITS + Self::INTER_ARRIVAL_UPSHIFT;

    const WRAP_PERIOD_US: i64 = 64_000_000;

    pub const fn from_timestamp(time: Timestamp) -> u32 {
        let us = time.us().rem_euclid(Self::WRAP_PERIOD_US);
        (((us << Self::FRACTION_BITS) / 1_000_000) as u32) & Self::MASK
    }

    pub const fn to_timestamp(abs_send_time: u32) -> Timestamp {
        let ticks = ((abs_send_time & Self::MASK) << Self::INTER_ARRIVAL_UPSHIFT) as i64;
        Timestamp::from_micros((ticks * 1_000_000) >> Self::INTER_ARRIVAL_SHIFT)
    }
}
