//! The sampling action seam
//!
//! Actual metric collection and serialization belong to the host; the
//! timer only needs something to invoke on each fire. The shipped
//! [`LogCollector`] stands in for a real collector and, like any
//! implementation must, stays strictly bounded — the callback runs on the
//! shared reactor thread, so synchronous I/O here would stall request
//! processing.

use std::path::PathBuf;

use log::info;

use crate::domain::SampleError;

/// External capability invoked each time the sample timer fires.
pub trait Collector {
    /// Take one sample. Failures are logged by the timer and never stop
    /// it from re-arming.
    ///
    /// # Errors
    ///
    /// Implementations report collection failures as [`SampleError`].
    fn collect(&mut self) -> Result<(), SampleError>;
}

/// Placeholder collector that records fires in the log.
#[derive(Debug)]
pub struct LogCollector {
    directory: Option<PathBuf>,
    samples: u64,
}

impl LogCollector {
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self { directory, samples: 0 }
    }
}

impl Collector for LogCollector {
    fn collect(&mut self) -> Result<(), SampleError> {
        self.samples += 1;
        match &self.directory {
            Some(dir) => info!("sample #{} (output directory {})", self.samples, dir.display()),
            None => info!("sample #{} (no output directory configured)", self.samples),
        }
        Ok(())
    }
}
