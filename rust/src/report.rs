use std::fmt;

use crate::monte_carlo::WorkerResult;

/// Reduced outcome of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// One entry per worker, ordered by worker identity.
    pub workers: Vec<WorkerResult>,
    pub global_max: u32,
    /// Rounds actually simulated (`share * worker_count`), which can exceed
    /// the nominal budget.
    pub total_rounds: u64,
}

impl Report {
    pub fn from_results(mut workers: Vec<WorkerResult>, total_rounds: u64) -> Self {
        workers.sort_by_key(|result| result.worker);
        let global_max = workers
            .iter()
            .map(|result| result.max_ones)
            .fold(0, u32::max);
        Self {
            workers,
            global_max,
            total_rounds,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.workers {
            writeln!(
                f,
                "[T{}]: Highest Ones Roll: {}",
                result.worker, result.max_ones
            )?;
        }
        writeln!(f, "Highest Ones Roll: {}", self.global_max)?;
        write!(f, "Number of Roll Sessions: {}", self.total_rounds)
    }
}
