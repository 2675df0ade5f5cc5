mod abs_send_time;
mod feedback;
mod packet;
mod report_block;

pub use abs_send_time::*;
pub use feedback::*;
pub use packet::*;
pub use report_block::*;
