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
        bitrate_controller::{BitrateController, TargetBitrate},
        clock::Clock,
        remote_bitrate_estimator::{
            ReceiveBitrateChanged, RemoteBitrateEstimator, RemoteBitrateEstimatorFactory,
        },
        transport::{FeedbackReport, Packet, PacketObservation, ReportBlock},
        units::{latest_sequence_number, DataRate, TimeDelta},
    },
    BweSender, Module, ReportBlockCalculator, Result, SendSideBweConfig, SendTimeHistory,
};

/// Sender side of the feedback loop.
///
/// Resolves send times for acknowledged packets, feeds them to a remote
/// bitrate estimator, turns sequence gaps into report blocks for the bitrate
/// controller, and drives both on the controller's schedule.
pub struct SendSideBweSender {
    bitrate_controller: Box<dyn BitrateController>,
    remote_bitrate_estimator: Box<dyn RemoteBitrateEstimator>,
    clock: Box<dyn Clock>,

    send_time_history: SendTimeHistory,
    report_block_calculator: ReportBlockCalculator,
    feedback_interval: TimeDelta,

    has_received_ack: bool,
    last_acked_sequence_number: u16,
}

impl SendSideBweSender {
    /// Fails if the configured start bitrate is outside of the bounds, or the
    /// rest of the configuration can't be honored.
    pub fn new(
        config: SendSideBweConfig,
        mut bitrate_controller: Box<dyn BitrateController>,
        estimator_factory: &dyn RemoteBitrateEstimatorFactory,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        config.validate()?;

        bitrate_controller.set_start_bitrate(config.start_bitrate);
        bitrate_controller.set_min_max_bitrate(config.min_bitrate, config.max_bitrate);
        let remote_bitrate_estimator =
            estimator_factory.create(config.rate_control_type, config.estimator_min_bitrate());

        tracing::info!(
            "Created send side BWE [start: {:?}] [min: {:?}] [max: {:?}] [rate control: {:?}]",
            config.start_bitrate,
            config.min_bitrate,
            config.max_bitrate,
            config.rate_control_type
        );

        Ok(Self {
            bitrate_controller,
            remote_bitrate_estimator,
            clock,
            send_time_history: SendTimeHistory::new(config.send_time_history_capacity)?,
            report_block_calculator: ReportBlockCalculator::new(config.ssrc),
            feedback_interval: config.feedback_interval,
            has_received_ack: false,
            last_acked_sequence_number: 0,
        })
    }

    /// Forwards a new remote estimate to the bitrate controller.
    pub fn on_receive_bitrate_changed(&mut self, ssrcs: &[u32], bitrate: DataRate) {
        tracing::debug!(
            "Remote estimate changed [ssrcs: {:?}] [bitrate: {:?}]",
            ssrcs,
            bitrate
        );
        self.bitrate_controller
            .deliver_estimated_bitrate(bitrate, self.clock.now());
    }

    pub fn report_block(&self) -> &ReportBlock {
        self.report_block_calculator.report_block()
    }

    pub fn has_received_ack(&self) -> bool {
        self.has_received_ack
    }

    pub fn last_acked_sequence_number(&self) -> u16 {
        self.last_acked_sequence_number
    }

    /// Number of sent packets still waiting for an acknowledgment.
    pub fn pending_send_times(&self) -> usize {
        self.send_time_history.len()
    }

    fn forward_estimate(&mut self, changed: Option<ReceiveBitrateChanged>) {
        if let Some(changed) = changed {
            self.on_receive_bitrate_changed(&changed.ssrcs, changed.bitrate);
        }
    }
}

impl Module for SendSideBweSender {
    fn time_until_next_process(&self) -> TimeDelta {
        let now = self.clock.now();
        self.bitrate_controller
            .time_until_next_process(now)
            .min(self.remote_bitrate_estimator.time_until_next_process(now))
    }

    fn process(&mut self) -> Option<TargetBitrate> {
        let now = self.clock.now();
        let changed = self.remote_bitrate_estimator.process(now);
        self.forward_estimate(changed);
        self.bitrate_controller.process(now)
    }
}

impl BweSender for SendSideBweSender {
    fn feedback_interval(&self) -> TimeDelta {
        self.feedback_interval
    }

    fn give_feedback(&mut self, feedback: &FeedbackReport) -> Option<TargetBitrate> {
        let newest = feedback.last_observation()?.sequence_number;

        // Unresolved observations stay in the batch, the estimator can still
        // use their arrival times.
        let observations: Vec<PacketObservation> = feedback
            .observations
            .iter()
            .map(|observation| {
                let send_time = self.send_time_history.resolve(observation.sequence_number);
                if send_time.is_none() {
                    tracing::warn!(
                        "Ack arrived too late [sequence number: {}]",
                        observation.sequence_number
                    );
                }
                PacketObservation {
                    send_time,
                    ..*observation
                }
            })
            .collect();

        let changed = self
            .remote_bitrate_estimator
            .incoming_packet_feedback_vector(&observations);
        self.forward_estimate(changed);

        if !self.has_received_ack {
            tracing::debug!("First feedback, baseline sequence number {}", newest);
            self.last_acked_sequence_number = newest;
            self.has_received_ack = true;
            return None;
        }

        let now = self.clock.now();
        if let Some(report_block) = self.report_block_calculator.on_feedback(
            self.last_acked_sequence_number,
            newest,
            observations.len(),
        ) {
            self.bitrate_controller
                .deliver_receiver_report(&[report_block], TimeDelta::zero(), now);
        }
        let update = self.bitrate_controller.process(now);

        self.last_acked_sequence_number =
            latest_sequence_number(newest, self.last_acked_sequence_number);

        if let Some(update) = update {
            tracing::debug!(
                "Target bitrate updated [rate: {:?}] [fraction loss: {}]",
                update.target_rate,
                update.fraction_loss
            );
        }
        update
    }

    fn on_packets_sent(&mut self, packets: &[Packet]) {
        for packet in packets.iter().filter_map(Packet::as_media) {
            self.send_time_history
                .add_and_remove_old(packet.sequence_number, packet.abs_send_timestamp());
        }
    }
}
