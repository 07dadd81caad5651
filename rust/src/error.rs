//! Error types for configuration and simulation runs.

use std::io;
use thiserror::Error;

/// A configuration that would make the run meaningless or fault mid-way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("worker count must be at least 1")]
    NoWorkers,

    #[error("progress interval must be at least 1")]
    ZeroProgressInterval,

    #[error("sample range is inverted: {min}..={max}")]
    InvertedRange { min: u32, max: u32 },

    #[error("sample range {min}..={max} is wider than a u32 can count")]
    RangeTooWide { min: u32, max: u32 },

    #[error("success value {value} lies outside the sample range {min}..={max}")]
    SuccessOutOfRange { value: u32, min: u32, max: u32 },

    #[error("{share} rounds across {workers} workers overflows the round counter")]
    BudgetOverflow { share: u64, workers: usize },
}

/// Errors that abort a simulation run. None of them leave a partial report.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The OS refused to start a worker thread.
    #[error("failed to spawn worker {worker}: {source}")]
    Spawn {
        worker: usize,
        #[source]
        source: io::Error,
    },

    #[error("worker {worker} panicked")]
    WorkerPanicked { worker: usize },
}
