use std::{path::PathBuf, thread};

use crate::error::{Error, Result};

/// Target size of the byte range handed to one scanning task
pub const SEGMENT_SIZE: usize = 256 * 1024 * 1024;

const PATH: &str = "measurements.txt";

/// Everything the pipeline needs to know about a run.
#[derive(Debug, Clone)]
pub struct Config {
    pub path: PathBuf,
    pub target_segment_size: usize,
    pub worker_count: usize,
    /// Validate every record instead of trusting the input format.
    pub strict: bool,
}

impl Config {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            target_segment_size: SEGMENT_SIZE,
            worker_count: thread::available_parallelism().map(Into::into).unwrap_or(1),
            strict: false,
        }
    }

    pub fn with_segment_size(mut self, target_segment_size: usize) -> Self {
        self.target_segment_size = target_segment_size;
        self
    }

    pub fn with_workers(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_segment_size == 0 {
            return Err(Error::InvalidConfig(
                "target segment size must be greater than zero".into(),
            ));
        }
        if self.worker_count == 0 {
            return Err(Error::InvalidConfig(
                "worker count must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(PATH)
    }
}
