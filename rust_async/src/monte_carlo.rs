use std::sync::Arc;
use std::time::Instant;

use ones_roll::{run_worker, Progress, Report, SimulationConfig, SimulationError, WorkPartition};
use tokio::task;
use tracing::info;

/// Runs every worker as a `spawn_blocking` task and awaits all of them
/// before reducing. Output is identical to `ones_roll::run` for the same
/// configuration.
pub async fn run_async(
    config: &SimulationConfig,
    progress: Arc<dyn Progress>,
) -> Result<Report, SimulationError> {
    config.validate()?;
    let partition = WorkPartition::new(config.total_round_budget, config.worker_count)?;
    info!(
        tasks = partition.workers(),
        share = partition.share(),
        total_rounds = partition.total_rounds(),
        "starting simulation (async)"
    );

    let start = Instant::now();
    let config = Arc::new(config.clone());
    let mut handles = Vec::with_capacity(partition.workers());

    for worker in 0..partition.workers() {
        let config = Arc::clone(&config);
        let progress = Arc::clone(&progress);
        let share = partition.share();

        let handle =
            task::spawn_blocking(move || run_worker(&config, worker, share, progress.as_ref()));
        handles.push(handle);
    }

    let mut results = Vec::with_capacity(handles.len());
    for (worker, handle) in handles.into_iter().enumerate() {
        let result = handle
            .await
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
