use actix_web::{
    error,
    web::{self, Json},
    Error,
};
use launch_stats::DatasetStore;
use serde::Serialize;

/// Everything the UI needs to seed its selectors: the offered site
/// list for the dropdown and the global payload bounds for the slider.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub sites: Vec<String>,
    pub min_payload_kg: f64,
    pub max_payload_kg: f64,
}

pub async fn dashboard(store: web::Data<DatasetStore>) -> Result<Json<DashboardResponse>, Error> {
    let bounds = store
        .payload_bounds()
        .map_err(error::ErrorInternalServerError)?;
    Ok(Json(DashboardResponse {
        sites: store.known_sites().to_vec(),
        min_payload_kg: bounds.min,
        max_payload_kg: bounds.max,
    }))
}
