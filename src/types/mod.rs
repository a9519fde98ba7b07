mod errors;
mod month;

use std::sync::Arc;

pub use errors::InvalidInput;
pub use month::{Month, MonthLabel};

pub type Gender = Arc<str>;
pub type Zone = Arc<str>;
pub type Category = Arc<str>;

/// Zone selection that disables location filtering.
pub const ALL_ZONES: &str = "all";
