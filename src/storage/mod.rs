mod csv_loader;
mod errors;

use crate::models::Dataset;

pub use csv_loader::CsvDatasetLoader;
pub use errors::DataLoadError;

/// Anything that can produce the dataset once at startup.
pub trait DataSource: Send + Sync + 'static {
    fn load(&self) -> Result<Dataset, DataLoadError>;
}
