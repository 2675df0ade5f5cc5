/// The adaptive controller consuming loss reports: [BitrateController](bitrate_controller::BitrateController).
pub mod bitrate_controller;

/// Injectable time sources: [Clock](clock::Clock).
pub mod clock;

/// Bandwidth estimation from send/arrival deltas: [RemoteBitrateEstimator](remote_bitrate_estimator::RemoteBitrateEstimator).
pub mod remote_bitrate_estimator;

/// Packets, feedback reports and report blocks.
pub mod transport;

/// Some unit types, such as [DataSize](units::DataSize) and [DataRate](units::DataRate).
pub mod units;
