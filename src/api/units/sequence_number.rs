/*
 *  Copyright (c) 2013 The WebRTC project authors. All Rights Reserved.
 *
 *  Use of this source code is governed by a BSD-style license
 *  that can be found in the LICENSE file in the root of the source
 *  tree. An additional intellectual property rights grant can be found
 *  in the file PATENTS.  All contributing project authors may
 *  be found in the AUTHORS file in the root of the source tree.
 */

//! Wraparound-aware comparison of 16 bit RTP sequence numbers.
//!
//! NB: None of these fulfill strict weak ordering requirements and must not be
//! used as a comparator for sorting or ordered maps.

pub const fn is_newer_sequence_number(sequence_number: u16, prev_sequence_number: u16) -> bool {
    // The half-way mark of the sequence space.
    const BREAKPOINT: u16 = (u16::MAX >> 1) + 1;
    // Distinguish between elements that are exactly BREAKPOINT apart.
    // If t1>t2 and |t1-t2| = BREAKPOINT: is_newer(t1,t2)=true,
    // is_newer(t2,t1)=false
    // rather than having is_newer(t1,t2) = is_newer(t2,t1) = false.
    match sequence_number.wrapping_sub(prev_sequence_number) {
        1..BREAKPOINT => true,
        BREAKPOINT => sequence_number > prev_sequence_number,
        _ => false,
    }
}

/// Returns whichever of the two sequence numbers is later in the wrapping
/// sequence space.
pub const fn latest_sequence_number(sequence_number1: u16, sequence_number2: u16) -> u16 {
    if is_newer_sequence_number(sequence_number1, sequence_number2) {
        sequence_number1
    } else {
        sequence_number2
    }
}

/// Signed distance from `prev_sequence_number` to `sequence_number` in the
/// wrapping sequence space. Positive exactly when
/// [is_newer_sequence_number] holds, so two numbers half the space apart give
/// +32768 one way and -32768 the other.
pub const fn sequence_number_diff(sequence_number: u16, prev_sequence_number: u16) -> i64 {
    if is_newer_sequence_number(sequence_number, prev_sequence_number) {
        sequence_number.wrapping_sub(prev_sequence_number) as i64
    } else {
        -(prev_sequence_number.wrapping_sub(sequence_number) as i64)
    }
}
