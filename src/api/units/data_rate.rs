/*
 *  Copyright (c) 2018 The WebRTC project authors. All Rights Reserved.
 *
 *  Use of this source code is governed by a BSD-style license
 *  that can be found in the LICENSE file in the root of the source
 *  tree. An additional intellectual property rights grant can be found
 *  in the file PATENTS.  All contributing project authors may
 *  be found in the AUTHORS file in the root of the source tree.
 */

// DataRate is a class that represents a given data rate. This can be used to
// represent bandwidth, encoding bitrate, etc. The internal storage is bits per
// second (bps).

use std::fmt;

use super::divide_round_to_nearest;

super::relative_unit!(DataRate);

impl DataRate {
    const ONE_SIDED: bool = true;

    pub const fn from_bits_per_sec(value: i64) -> Self {
        Self::from_value(value)
    }

    pub const fn from_kilobits_per_sec(value: i64) -> Self {
        Self::from_value(value * 1000)
    }

    pub const fn bps(&self) -> i64 {
        self.to_value()
    }

    pub const fn kbps(&self) -> i64 {
        divide_round_to_nearest(self.to_value(), 1000)
    }
}

impl fmt::Debug for DataRate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_plus_infinity() {
            write!(f, "+inf bps")
        } else if self.is_minus_infinity() {
            write!(f, "-inf bps")
        } else if self.bps() == 0 || self.bps() % 1000 != 0 {
            write!(f, "{} bps", self.bps())
        } else {
            write!(f, "{} kbps", self.kbps())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn get_different_prefix() {
        const VALUE: i64 = 123 * 8000;
        assert_eq!(DataRate::from_bits_per_sec(VALUE).kbps(), VALUE / 1000);
        assert_eq!(DataRate::from_kilobits_per_sec(300).bps(), 300_000);
        assert_eq!(DataRate::from_bits_per_sec(1500).kbps(), 2);
    }

    #[test]
    fn comparison_operators() {
        const SMALL: DataRate = DataRate::from_kilobits_per_sec(30);
        const LARGE: DataRate = DataRate::from_kilobits_per_sec(1000);
        assert!(SMALL < LARGE);
        assert!(DataRate::plus_infinity() > LARGE);
        assert_eq!(SMALL.max(LARGE), LARGE);
        assert_eq!(LARGE - SMALL, DataRate::from_kilobits_per_sec(970));
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", DataRate::from_kilobits_per_sec(300)), "300 kbps");
        assert_eq!(format!("{:?}", DataRate::from_bits_per_sec(1500)), "1500 bps");
        assert_eq!(format!("{:?}", DataRate::plus_infinity()), "+inf bps");
    }
}
