use std::sync::Arc;
use std::thread;
use std::time::Instant;

use rand_core::RngCore;
use tracing::{debug, info};

use crate::config::{RoundParams, SimulationConfig};
use crate::error::{ConfigError, SimulationError};
use crate::progress::Progress;
use crate::report::Report;
use crate::rng::{sample, XorShift32};

/// Draws `round.draws` samples and counts the ones equal to `round.success`.
pub fn simulate_round<R: RngCore + ?Sized>(rng: &mut R, round: &RoundParams) -> u32 {
    let RoundParams {
        draws,
        range,
        success,
    } = *round;
    let mut ones = 0;
    for _ in 0..draws {
        ones += u32::from(sample(rng, range.min, range.max) == success);
    }
    ones
}

/// Runs `rounds` rounds and returns the highest count seen, calling
/// `on_round` with each round index after it completes.
pub fn max_ones_over<R, F>(rng: &mut R, rounds: u64, round: &RoundParams, mut on_round: F) -> u32
where
    R: RngCore + ?Sized,
    F: FnMut(u64),
{
    let mut max_ones = 0;
    for i in 0..rounds {
        let ones = simulate_round(rng, round);
        if ones > max_ones {
            max_ones = ones;
        }
        on_round(i);
    }
    max_ones
}

/// Equal per-worker shares of the round budget, rounded up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WorkPartition {
    share: u64,
    workers: usize,
}

impl WorkPartition {
    pub fn new(budget: u64, workers: usize) -> Result<Self, ConfigError> {
        if workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        let share = budget.div_ceil(workers as u64);
        if share.checked_mul(workers as u64).is_none() {
            return Err(ConfigError::BudgetOverflow { share, workers });
        }
        Ok(Self { share, workers })
    }

    pub fn share(&self) -> u64 {
        self.share
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Rounds actually simulated; never less than the budget.
    pub fn total_rounds(&self) -> u64 {
        self.share * self.workers as u64
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WorkerResult {
    pub worker: usize,
    pub max_ones: u32,
}

/// Body of one worker: seed a private generator, run `share` rounds, keep the
/// maximum. Only worker 0 reports progress.
pub fn run_worker(
    config: &SimulationConfig,
    worker: usize,
    share: u64,
    progress: &dyn Progress,
) -> WorkerResult {
    let seed = config.seed.seed_for(worker);
    debug!(worker, seed, share, "worker started");

    let mut rng = XorShift32::new(seed);
    let interval = config.progress_interval;
    let max_ones = max_ones_over(&mut rng, share, &config.round(), |i| {
        if worker == 0 && i % interval == 0 {
            progress.tick(i);
        }
    });

    debug!(worker, max_ones, "worker finished");
    WorkerResult { worker, max_ones }
}

/// Splits the budget across `config.worker_count` threads, waits for all of
/// them and reduces their maxima.
pub fn run(
    config: &SimulationConfig,
    progress: Arc<dyn Progress>,
) -> Result<Report, SimulationError> {
    config.validate()?;
    let partition = WorkPartition::new(config.total_round_budget, config.worker_count)?;
    info!(
        workers = partition.workers(),
        share = partition.share(),
        total_rounds = partition.total_rounds(),
        "starting simulation"
    );

    let start = Instant::now();
    let config = Arc::new(config.clone());
    let mut handles = Vec::with_capacity(partition.workers());

    for worker in 0..partition.workers() {
        let config = Arc::clone(&config);
        let progress = Arc::clone(&progress);
        let share = partition.share();

        let handle = thread::Builder::new()
            .name(format!("roller-{worker}"))
            .spawn(move || run_worker(&config, worker, share, progress.as_ref()))
            .map_err(|source| SimulationError::Spawn { worker, source })?;

        handles.push(handle);
    }

    let mut results = Vec::with_capacity(handles.len());
    for (worker, handle) in handles.into_iter().enumerate() {
        let result = handle
            .join()
            .map_err(|_| SimulationError::WorkerPanicked { worker })?;
        results.push(result);
    }
    progress.finish();

    let report = Report::from_results(results, partition.total_rounds());
    info!(
        global_max = report.global_max,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "simulation finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SampleRange;
    use crate::progress::NoProgress;
    use crate::rng::SeedSource;
    use rand::rngs::mock::StepRng;
    use std::sync::Mutex;

    const DICE: RoundParams = RoundParams {
        draws: 231,
        range: SampleRange::new(0, 3),
        success: 0,
    };

    #[derive(Default)]
    struct Recorder {
        ticks: Mutex<Vec<u64>>,
    }

    impl Progress for Recorder {
        fn tick(&self, round: u64) {
            self.ticks.lock().unwrap().push(round);
        }
    }

    #[test]
    fn round_counts_every_success() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(simulate_round(&mut rng, &DICE), 231);
    }

    #[test]
    fn round_without_success_draws_is_zero() {
        let mut rng = StepRng::new(2, 0);
        assert_eq!(simulate_round(&mut rng, &DICE), 0);
    }

    #[test]
    fn cycling_draws_hit_once_per_four() {
        let round = RoundParams { draws: 4, ..DICE };
        let mut rng = StepRng::new(0, 1);
        assert_eq!(simulate_round(&mut rng, &round), 1);
    }

    #[test]
    fn seeded_rounds_are_reproducible() {
        let mut rng = XorShift32::new(42);
        let rounds: Vec<u32> = (0..3).map(|_| simulate_round(&mut rng, &DICE)).collect();
        assert_eq!(rounds, [60, 73, 54]);
    }

    #[test]
    fn running_max_keeps_highest() {
        let mut rng = XorShift32::new(42);
        let mut seen = Vec::new();
        let max = max_ones_over(&mut rng, 3, &DICE, |i| seen.push(i));
        assert_eq!(max, 73);
        assert_eq!(seen, [0, 1, 2]);
    }

    #[test]
    fn zero_rounds_yield_zero() {
        let mut rng = XorShift32::new(42);
        assert_eq!(max_ones_over(&mut rng, 0, &DICE, |_| {}), 0);
    }

    #[test]
    fn partition_rounds_up() {
        let partition = WorkPartition::new(1_000_000_000, 12).unwrap();
        assert_eq!(partition.share(), 83_333_334);
        assert_eq!(partition.total_rounds(), 1_000_000_008);

        let exact = WorkPartition::new(120, 12).unwrap();
        assert_eq!(exact.share(), 10);
        assert_eq!(exact.total_rounds(), 120);
    }

    #[test]
    fn partition_rejects_zero_workers() {
        assert_eq!(WorkPartition::new(10, 0), Err(ConfigError::NoWorkers));
    }

    #[test]
    fn only_first_worker_ticks() {
        let config = SimulationConfig {
            draws_per_round: 8,
            progress_interval: 2,
            seed: SeedSource::Fixed(5),
            ..Default::default()
        };

        let first = Recorder::default();
        run_worker(&config, 0, 5, &first);
        assert_eq!(*first.ticks.lock().unwrap(), [0, 2, 4]);

        let second = Recorder::default();
        run_worker(&config, 1, 5, &second);
        assert!(second.ticks.lock().unwrap().is_empty());
    }

    #[test]
    fn worker_uses_offset_seed() {
        let config = SimulationConfig {
            seed: SeedSource::Fixed(42),
            ..Default::default()
        };
        let result = run_worker(&config, 1, 3, &NoProgress);
        assert_eq!(result, WorkerResult { worker: 1, max_ones: 60 });
    }

    #[test]
    fn run_reports_actual_total_and_global_max() {
        let config = SimulationConfig {
            worker_count: 2,
            total_round_budget: 5,
            seed: SeedSource::Fixed(42),
            ..Default::default()
        };
        let report = run(&config, Arc::new(NoProgress)).unwrap();
        assert_eq!(
            report.workers,
            [
                WorkerResult { worker: 0, max_ones: 73 },
                WorkerResult { worker: 1, max_ones: 60 },
            ]
        );
        assert_eq!(report.global_max, 73);
        assert_eq!(report.total_rounds, 6);
    }

    #[test]
    fn run_rejects_invalid_config() {
        let config = SimulationConfig {
            worker_count: 0,
            ..Default::default()
        };
        let err = run(&config, Arc::new(NoProgress)).unwrap_err();
        assert!(matches!(err, SimulationError::Config(ConfigError::NoWorkers)));
    }
}
