pub mod datastructures;
pub mod sideshift;

pub use datastructures::{
    config::{ShiftConfig, ShiftConfigBuilder},
    error::OrderError,
    order::{CreateOrder, ShiftOrder, ShiftOrderBuilder},
    shift_type::ShiftType,
};
