use std::time::Instant;

/// Tracks elapsed wall-clock time across a tour run and logs it per phase.
pub struct RunMonitor {
    start: Instant,
    enabled: bool,
}

impl RunMonitor {
    pub fn new(enabled: bool) -> Self {
        Self {
            start: Instant::now(),
            enabled,
        }
    }

    pub fn log_stats(&self, phase: &str) {
        if self.enabled {
            tracing::info!("📊 {} - elapsed: {:?}", phase, self.start.elapsed());
        }
    }

    pub fn log_final_stats(&self) {
        if self.enabled {
            tracing::info!("📊 Final Stats - Total Time: {:?}", self.start.elapsed());
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for RunMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}
