//! Shared utilities for the star notary.

pub mod clock;
pub mod logging;
pub mod time;

pub use clock::{Clock, SystemClock};
pub use logging::{init_logging, LogFormat};
pub use time::format_duration;
