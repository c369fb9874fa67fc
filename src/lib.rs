pub mod config;
pub mod error;
pub mod partition;

pub use config::SplitConfig;
pub use error::SplitError;
pub use partition::{export_groups, group_by_area, load_ads, run, SplitSummary};
