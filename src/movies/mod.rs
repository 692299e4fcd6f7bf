pub mod handlers;
pub mod search;
pub mod types;

pub use handlers::*;
pub use search::{summarize, validate_search, MAX_RESULTS};
pub use types::*;
