use std::sync::Arc;

use tokio::task::spawn_blocking;
use tracing::{debug, warn};

use crate::dashboard::{DashboardOptions, DashboardSnapshot};
use crate::models::Dataset;
use crate::types::{Zone, ALL_ZONES};

/// Serves zone selections over the dataset loaded at startup.
///
/// Each selection is computed on a blocking worker from the shared, read-only
/// dataset; selections never observe each other.
#[derive(Clone)]
pub struct DashboardService {
    dataset: Arc<Dataset>,
    options: DashboardOptions
}

impl DashboardService {
    pub fn new(dataset: Arc<Dataset>, options: DashboardOptions) -> Self {
        Self {
            dataset,
            options
        }
    }

    pub fn zones(&self) -> Vec<Zone> {
        self.dataset.zones()
    }

    /// Recomputes the dashboard for a newly selected zone.
    pub async fn select(&self, zone: &str) -> anyhow::Result<DashboardSnapshot> {
        let dataset = self.dataset.clone();
        let options = self.options;
        let selected = zone.to_string();

        let snapshot = spawn_blocking(move || DashboardSnapshot::build(&dataset, &selected, &options)).await??;

        if zone != ALL_ZONES && snapshot.transaction_count == 0 {
            warn!("Zone [{zone}] has no transactions in the dataset");
        }

        debug!("Zone [{}] selected: {} transactions, revenue {}", zone, snapshot.transaction_count, snapshot.total_revenue);

        Ok(snapshot)
    }
}
