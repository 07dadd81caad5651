use crate::error::ConfigError;
use crate::rng::SeedSource;

pub const WORKER_COUNT: usize = 12;
pub const DRAWS_PER_ROUND: u32 = 231;
pub const TOTAL_ROUND_BUDGET: u64 = 1_000_000_000;
pub const PROGRESS_INTERVAL: u64 = 10_000_000;

/// Inclusive bounds for a single draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SampleRange {
    pub min: u32,
    pub max: u32,
}

impl SampleRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for SampleRange {
    fn default() -> Self {
        Self::new(0, 3)
    }
}

/// The shape of one round: how many draws, over what range, and which value
/// counts as a success.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoundParams {
    pub draws: u32,
    pub range: SampleRange,
    pub success: u32,
}

/// Settings for a whole batch run, built once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub worker_count: usize,
    pub draws_per_round: u32,
    pub total_round_budget: u64,
    /// Worker 0 ticks progress every this many rounds.
    pub progress_interval: u64,
    pub sample_range: SampleRange,
    pub success_value: u32,
    pub seed: SeedSource,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            worker_count: WORKER_COUNT,
            draws_per_round: DRAWS_PER_ROUND,
            total_round_budget: TOTAL_ROUND_BUDGET,
            progress_interval: PROGRESS_INTERVAL,
            sample_range: SampleRange::default(),
            success_value: 0,
            seed: SeedSource::Clock,
        }
    }
}

impl SimulationConfig {
    pub fn round(&self) -> RoundParams {
        RoundParams {
            draws: self.draws_per_round,
            range: self.sample_range,
            success: self.success_value,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.worker_count == 0 {
            return Err(ConfigError::NoWorkers);
        }
        if self.progress_interval == 0 {
            return Err(ConfigError::ZeroProgressInterval);
        }

        let SampleRange { min, max } = self.sample_range;
        if min > max {
            return Err(ConfigError::InvertedRange { min, max });
        }
        if max - min == u32::MAX {
            return Err(ConfigError::RangeTooWide { min, max });
        }
        if !self.sample_range.contains(self.success_value) {
            return Err(ConfigError::SuccessOutOfRange {
                value: self.success_value,
                min,
                max,
            });
        }

        crate::monte_carlo::WorkPartition::new(self.total_round_budget, self.worker_count)?;
        Ok(())
    }
}
