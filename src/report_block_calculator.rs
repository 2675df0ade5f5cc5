/*
 *  Copyright (c) 2015 The WebRTC project authors. All Rights Reserved.
 *
 *  Use of this source code is governed by a BSD-style license
 *  that can be found in the LICENSE file in the root of the source
 *  tree. An additional intellectual property rights grant can be found
 *  in the file PATENTS.  All contributing project authors may
 *  be found in the AUTHORS file in the root of the source tree.
 */

use crate::api::{transport::ReportBlock, units::sequence_number_diff};

/// Loss statistics for one flow, derived from acknowledged sequence gaps.
///
/// Assumes packets arrive in the order they were sent: every sequence number
/// between the previous high water mark and the newest acknowledged one that
/// isn't in the feedback counts as lost.
#[derive(Debug, Default)]
pub struct ReportBlockCalculator {
    report_block: ReportBlock,
    sequence_number_cycles: u16,
}

impl ReportBlockCalculator {
    pub fn new(source_ssrc: u32) -> Self {
        Self {
            report_block: ReportBlock {
                source_ssrc,
                ..Default::default()
            },
            sequence_number_cycles: 0,
        }
    }

    /// Updates the report block with one feedback batch.
    ///
    /// `last_acked` is the high water mark before this batch, `newest` the
    /// sequence number of the last observation and `received` the number of
    /// observations. Returns None, leaving the block untouched, when `newest`
    /// isn't ahead of `last_acked`.
    pub fn on_feedback(&mut self, last_acked: u16, newest: u16, received: usize) -> Option<ReportBlock> {
        let expected_packets = sequence_number_diff(newest, last_acked);
        if expected_packets <= 0 {
            tracing::debug!(
                "Stale feedback, skipping report block [last acked: {}] [newest: {}]",
                last_acked,
                newest
            );
            return None;
        }

        let received = i64::try_from(received).unwrap_or(i64::MAX);
        // More observations than expected means duplicates, not negative loss.
        let lost_packets = (expected_packets - received).max(0);

        self.report_block.fraction_lost = ((lost_packets << 8) / expected_packets).min(255) as u8;
        self.report_block.cumulative_lost = (self.report_block.cumulative_lost as i64 + lost_packets)
            .min(ReportBlock::MAX_CUMULATIVE_LOST as i64) as i32;

        if newest < last_acked {
            self.sequence_number_cycles = self.sequence_number_cycles.wrapping_add(1);
        }
        self.report_block.extended_high_seq_num =
            ((self.sequence_number_cycles as u32) << 16) | newest as u32;

        tracing::debug!(
            "Report block [expected: {}] [lost: {}] [fraction lost: {}] [cumulative lost: {}]",
            expected_packets,
            lost_packets,
            self.report_block.fraction_lost,
            self.report_block.cumulative_lost
        );

        Some(self.report_block)
    }

    pub fn report_block(&self) -> &ReportBlock {
        &self.report_block
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use test_trace::test;

    #[test]
    fn two_of_ten_lost() {
        let mut calculator = ReportBlockCalculator::new(0);
        let block = calculator.on_feedback(100, 110, 8).unwrap();

        assert_eq!(block.fraction_lost, 51);
        assert_eq!(block.cumulative_lost, 2);
        assert_eq!(block.extended_high_seq_num, 110);
        assert_eq!(*calculator.report_block(), block);
    }

    #[test]
    fn no_loss() {
        let mut calculator = ReportBlockCalculator::new(0);
        let block = calculator.on_feedback(1, 20, 19).unwrap();

        assert_eq!(block.fraction_lost, 0);
        assert_eq!(block.cumulative_lost, 0);
        assert_eq!(block.extended_high_seq_num, 20);
    }

    #[test]
    fn cumulative_loss_accumulates() {
        let mut calculator = ReportBlockCalculator::new(0);
        calculator.on_feedback(100, 110, 8).unwrap();
        let block = calculator.on_feedback(110, 120, 5).unwrap();

        assert_eq!(block.fraction_lost, 128);
        assert_eq!(block.cumulative_lost, 7);
        assert_eq!(block.extended_high_seq_num, 120);
    }

    #[test]
    fn stale_feedback_is_a_no_op() {
        let mut calculator = ReportBlockCalculator::new(0);
        let before = calculator.on_feedback(100, 110, 8).unwrap();

        assert_eq!(calculator.on_feedback(110, 105, 3), None);
        assert_eq!(calculator.on_feedback(110, 110, 1), None);
        assert_eq!(*calculator.report_block(), before);
    }

    #[test]
    fn duplicates_do_not_reduce_cumulative_loss() {
        let mut calculator = ReportBlockCalculator::new(0);
        calculator.on_feedback(100, 110, 8).unwrap();
        let block = calculator.on_feedback(110, 112, 5).unwrap();

        assert_eq!(block.fraction_lost, 0);
        assert_eq!(block.cumulative_lost, 2);
    }

    #[test]
    fn fraction_lost_saturates() {
        let mut calculator = ReportBlockCalculator::new(0);
        let block = calculator.on_feedback(0, 1, 0).unwrap();
        assert_eq!(block.fraction_lost, 255);
    }

    #[test]
    fn cumulative_lost_saturates() {
        let mut calculator = ReportBlockCalculator::new(0);
        calculator.report_block.cumulative_lost = ReportBlock::MAX_CUMULATIVE_LOST - 1;
        let block = calculator.on_feedback(0, 100, 10).unwrap();
        assert_eq!(block.cumulative_lost, ReportBlock::MAX_CUMULATIVE_LOST);
    }

    #[test]
    fn half_the_sequence_space_ahead() {
        let mut calculator = ReportBlockCalculator::new(0);
        let block = calculator.on_feedback(0, 0x8000, 1).unwrap();

        assert_eq!(block.fraction_lost, 255);
        assert_eq!(block.cumulative_lost, 32767);
        assert_eq!(block.extended_high_seq_num, 0x8000);

        // The opposite direction is stale.
        assert_eq!(calculator.on_feedback(0x8000, 0, 1), None);
        assert_eq!(calculator.report_block().cumulative_lost, 32767);
    }

    #[test]
    fn wraparound() {
        let mut calculator = ReportBlockCalculator::new(1234);
        let block = calculator.on_feedback(65530, 4, 10).unwrap();

        assert_eq!(block.source_ssrc, 1234);
        assert_eq!(block.fraction_lost, 0);
        assert_eq!(block.cumulative_lost, 0);
        assert_eq!(block.extended_high_seq_num, 0x1_0004);
        assert_eq!(calculator.report_block().sequence_number_cycles(), 1);

        let block = calculator.on_feedback(4, 14, 10).unwrap();
        assert_eq!(block.extended_high_seq_num, 0x1_000E);
    }
}
