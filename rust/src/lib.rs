//! Monte Carlo search for the highest number of ones rolled in a round of
//! four-sided draws, spread over worker threads.

pub mod config;
pub mod error;
pub mod logging;
pub mod monte_carlo;
pub mod progress;
pub mod report;
pub mod rng;

pub use config::{RoundParams, SampleRange, SimulationConfig};
pub use error::{ConfigError, SimulationError};
pub use monte_carlo::{run, run_worker, simulate_round, WorkPartition, WorkerResult};
pub use progress::{DotProgress, NoProgress, Progress};
pub use report::Report;
pub use rng::{sample, SeedSource, XorShift32};
