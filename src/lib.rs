pub mod auth;
pub mod constants;
pub mod parser;
pub mod raw_types;
pub mod types;
pub mod util;
pub mod wrapper;

// Re-exporting these dependencies since they might be helpful for manual parsing.
pub use reqwest;
pub use serde;
pub use serde_json;
