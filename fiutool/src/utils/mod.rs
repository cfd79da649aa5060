mod log;
mod string;

pub use log::{LogLevel, log_level, set_log_level};
pub use string::pretty_bytes;
