use std::sync::Arc;

use ones_roll::{logging, monte_carlo, DotProgress, SimulationConfig, SimulationError};

fn main() -> Result<(), SimulationError> {
    logging::init();

    let config = SimulationConfig::default();
    let report = monte_carlo::run(&config, Arc::new(DotProgress))?;
    println!("{report}");
    Ok(())
}
