pub mod common;
pub mod log;
