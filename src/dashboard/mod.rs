mod report;
mod service;
mod snapshot;

pub use report::{render_report, render_zones};
pub use service::DashboardService;
pub use snapshot::{DashboardOptions, DashboardSnapshot};
