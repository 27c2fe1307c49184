pub mod config;
pub mod error;
pub mod order;
pub mod shift_type;
