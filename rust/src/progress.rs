//! Human-facing progress side channel.
//!
//! Workers never print directly; they call into a [`Progress`] observer so the
//! channel can be silenced in tests and benchmarks.

use std::io::{self, Write};

pub trait Progress: Send + Sync {
    /// Called by worker 0 every `progress_interval` rounds, starting at round 0.
    fn tick(&self, round: u64);

    /// Called once by the coordinator after every worker has been joined.
    fn finish(&self) {}
}

/// Prints an unterminated `.` per tick and a newline once the run is joined.
#[derive(Debug, Default, Clone, Copy)]
pub struct DotProgress;

impl Progress for DotProgress {
    fn tick(&self, _round: u64) {
        let mut out = io::stdout().lock();
        // A lost dot is not worth failing a run over.
        let _ = out.write_all(b".").and_then(|()| out.flush());
    }

    fn finish(&self) {
        println!();
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn tick(&self, _round: u64) {}
}
