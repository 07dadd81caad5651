#![allow(dead_code)]

use std::sync::{Mutex, Once};

use ones_roll::Progress;
use proptest::test_runner::Config as ProptestConfig;

static INIT_LOGGING: Once = Once::new();

/// Installs a test-writer subscriber once per test binary.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .with_thread_names(true)
            .with_ansi(false)
            .try_init();
    });
}

pub fn test_proptest_config(cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// Progress observer that remembers every tick and how often it was finished.
#[derive(Default)]
pub struct RecordingProgress {
    pub ticks: Mutex<Vec<u64>>,
    pub finishes: Mutex<u32>,
}

impl Progress for RecordingProgress {
    fn tick(&self, round: u64) {
        self.ticks.lock().unwrap().push(round);
    }

    fn finish(&self) {
        *self.finishes.lock().unwrap() += 1;
    }
}
