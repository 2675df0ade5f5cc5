mod data_rate;
mod data_size;
mod sequence_number;
mod time_delta;
mod timestamp;
mod unit_base;

pub use data_rate::*;
pub use data_size::*;
pub use sequence_number::*;
pub use time_delta::*;
pub use timestamp::*;

pub(crate) use unit_base::{divide_round_to_nearest, relative_unit, unit_base};
