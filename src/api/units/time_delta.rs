/*
 *  Copyright (c) 2018 The WebRTC project authors. All Rights Reserved.
 *
 *  Use of this source code is governed by a BSD-style license
 *  that can be found in the LICENSE file in the root of the source
 *  tree. An additional intellectual property rights grant can be found
 *  in the file PATENTS.  All contributing project authors may
 *  be found in the AUTHORS file in the root of the source tree.
 */

//! TimeDelta represents the difference between two timestamps. Commonly this
//! is a duration, such as the feedback interval or the time until the next
//! process call. Internally stored as microseconds.
use std::fmt;

use super::divide_round_to_nearest;

super::relative_unit!(TimeDelta);

impl TimeDelta {
    const ONE_SIDED: bool = false;

    pub const fn from_seconds(value: i64) -> Self {
        Self::from_value(value * 1_000_000)
    }

    pub const fn from_millis(value: i64) -> Self {
        Self::from_value(value * 1_000)
    }

    pub const fn from_micros(value: i64) -> Self {
        Self::from_value(value)
    }

    pub const fn seconds(&self) -> i64 {
        divide_round_to_nearest(self.to_value(), 1_000_000)
    }

    pub const fn ms(&self) -> i64 {
        divide_round_to_nearest(self.to_value(), 1_000)
    }

    pub const fn us(&self) -> i64 {
        self.to_value()
    }
}

impl fmt::Debug for TimeDelta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_plus_infinity() {
            write!(f, "+inf ms")
        } else if self.is_minus_infinity() {
            write!(f, "-inf ms")
        } else if self.us() == 0 || (self.us() % 1000) != 0 {
            write!(f, "{} us", self.us())
        } else if self.ms() % 1000 != 0 {
            write!(f, "{} ms", self.ms())
        } else {
            write!(f, "{} s", self.seconds())
        }
    }
}
