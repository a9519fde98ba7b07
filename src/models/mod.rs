mod dataset;
mod errors;
mod transaction;

pub use dataset::Dataset;
pub use errors::TransactionError;
pub use transaction::{SaleRecord, Transaction};
