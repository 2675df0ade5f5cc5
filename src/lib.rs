//! Send side bandwidth estimation feedback loop.
//!
//! The sender records send times in a bounded [SendTimeHistory], the receiver
//! batches arrivals in a [SendSideBweReceiver], and the [SendSideBweSender]
//! turns each [FeedbackReport](api::transport::FeedbackReport) into estimator
//! input and loss reports for an external
//! [BitrateController](api::bitrate_controller::BitrateController).

mod bwe;
mod config;
mod error;
mod report_block_calculator;
mod send_side_bwe_receiver;
mod send_side_bwe_sender;
mod send_time_history;

pub use bwe::*;
pub use config::*;
pub use error::*;
pub use report_block_calculator::*;
pub use send_side_bwe_receiver::*;
pub use send_side_bwe_sender::*;
pub use send_time_history::*;

pub mod api;
