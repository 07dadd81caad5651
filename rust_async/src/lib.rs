//! Tokio front end for `ones_roll`: the same workers, run on the blocking pool.

pub mod monte_carlo;

pub use monte_carlo::run_async;
