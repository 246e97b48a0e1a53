mod handlers;
mod run;
mod settings;
mod tracer;

pub use run::{configure_routes, run};
pub use settings::Settings;
pub use tracer::init_logs;
