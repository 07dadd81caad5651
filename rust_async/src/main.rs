use std::sync::Arc;

use ones_roll::{logging, DotProgress, SimulationConfig, SimulationError};
use ones_roll_async::run_async;

#[tokio::main]
async fn main() -> Result<(), SimulationError> {
    logging::init();

    let config = SimulationConfig::default();
    let report = run_async(&config, Arc::new(DotProgress)).await?;
    println!("{report}");
    Ok(())
}
