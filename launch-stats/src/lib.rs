mod dataset;
mod read;
mod record;
mod selection;

pub use dataset::{DatasetStore, EmptyDatasetError, LoadError, PayloadBounds};
pub use read::{
    payload_outcome_points, site_success_summary, OutcomeCount, PayloadOutcomePoint, ReadError,
    SiteSuccessRate, SiteSuccessSummary,
};
pub use record::{LaunchRecord, Outcome};
pub use selection::{InvalidRangeError, PayloadRange, SiteSelector, ALL_SITES};
