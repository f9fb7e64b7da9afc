//! temaku inline markup, plus the file logger used by the demo.
//!
//! Everything from the [`temaku`] crate is re-exported here.

mod log_init;

pub use log_init::init_logger;
pub use temaku::*;
