//! Process-global background sampling
//!
//! - [`timer`]: the recurring timer state machine and its reactor driver
//! - [`collector`]: the injected "take one sample" capability

pub mod collector;
pub mod timer;

pub use collector::{Collector, LogCollector};
pub use timer::{FireOutcome, SampleTimer, TimerState};
