mod charts;
mod dashboard;
mod status;

pub use charts::{payload_outcome, success_summary};
pub use dashboard::dashboard;
pub use status::status;
