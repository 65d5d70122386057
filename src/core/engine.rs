//! Drives one notation through the whole demo sequence.

use crate::core::{Notation, Result, StyleReport};
use crate::utils::monitor::RunMonitor;
use std::future::Future;
use tracing::{debug, warn};

/// Runs every demo of one notation in teaching order and collects what each
/// demo produced into a [`StyleReport`].
pub struct TourEngine<N: Notation> {
    notation: N,
    monitor: RunMonitor,
}

impl<N: Notation> TourEngine<N> {
    pub fn new(notation: N) -> Self {
        Self {
            notation,
            monitor: RunMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(notation: N, enabled: bool) -> Self {
        Self {
            notation,
            monitor: RunMonitor::new(enabled),
        }
    }

    /// A demo that ends in its error path has already printed its own
    /// notice, so the engine only logs the failure and carries on with the
    /// next demo.
    pub async fn run(&self) -> StyleReport {
        let name = self.notation.name();
        println!("=== {name} notation ===");
        debug!("Starting demo sequence for {} notation", name);

        let single = self.step("single read", self.notation.read_single()).await;
        let chain = self.step("chained reads", self.notation.read_chain()).await;
        self.step("countdown", self.notation.countdown()).await;
        self.step("interleaving", self.notation.markers()).await;
        let fetch = self.step("page fetch", self.notation.fetch_page()).await;

        self.monitor.log_final_stats();

        StyleReport {
            notation: name.to_string(),
            single,
            chain,
            fetch,
        }
    }

    async fn step<T>(&self, label: &str, demo: impl Future<Output = Result<T>>) -> Option<T> {
        println!("-- {label} --");
        let outcome = demo.await;
        self.monitor.log_stats(label);
        match outcome {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("{} demo ended in its error path: {}", label, e);
                None
            }
        }
    }
}
