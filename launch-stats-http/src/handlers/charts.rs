use actix_web::{
    error,
    web::{self, Json},
    Error,
};
use launch_stats::{
    payload_outcome_points, site_success_summary, DatasetStore, OutcomeCount, PayloadOutcomePoint,
    PayloadRange, ReadError, SiteSelector, SiteSuccessRate, SiteSuccessSummary, ALL_SITES,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

fn default_site() -> String {
    ALL_SITES.to_string()
}

fn map_read_error(err: ReadError) -> Error {
    match err {
        ReadError::UnknownSite(_) => error::ErrorNotFound(err),
    }
}

#[derive(Debug, Deserialize)]
pub struct SuccessSummaryQuery {
    #[serde(default = "default_site")]
    pub site: String,
}

#[derive(Debug, Serialize)]
pub struct SiteRateRow {
    pub site: String,
    pub success_rate: f64,
}

impl From<SiteSuccessRate> for SiteRateRow {
    fn from(value: SiteSuccessRate) -> Self {
        Self {
            site: value.site,
            success_rate: value.success_rate,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OutcomeCountRow {
    pub outcome: &'static str,
    pub count: u64,
}

impl From<OutcomeCount> for OutcomeCountRow {
    fn from(value: OutcomeCount) -> Self {
        Self {
            outcome: value.outcome.label(),
            count: value.count,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "view", content = "rows", rename_all = "snake_case")]
pub enum SuccessSummaryResponse {
    AllSites(Vec<SiteRateRow>),
    SingleSite(Vec<OutcomeCountRow>),
}

impl From<SiteSuccessSummary> for SuccessSummaryResponse {
    fn from(value: SiteSuccessSummary) -> Self {
        match value {
            SiteSuccessSummary::AllSites(rates) => {
                Self::AllSites(rates.into_iter().map(Into::into).collect())
            }
            SiteSuccessSummary::SingleSite(counts) => {
                Self::SingleSite(counts.into_iter().map(Into::into).collect())
            }
        }
    }
}

#[instrument(skip(store), level = "debug")]
pub async fn success_summary(
    store: web::Data<DatasetStore>,
    query: web::Query<SuccessSummaryQuery>,
) -> Result<Json<SuccessSummaryResponse>, Error> {
    let selector = SiteSelector::from(query.into_inner().site);
    let summary = site_success_summary(store.get_ref(), &selector).map_err(map_read_error)?;
    Ok(Json(summary.into()))
}

#[derive(Debug, Deserialize)]
pub struct PayloadOutcomeQuery {
    #[serde(default = "default_site")]
    pub site: String,
    /// Inclusive payload-mass bounds in kg. Either side defaults to
    /// the global bound when omitted.
    pub from: Option<f64>,
    pub to: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct PointRow {
    pub payload_mass_kg: f64,
    /// 0 = failure, 1 = success; the scatter's y axis.
    pub outcome: u8,
    pub booster_version_category: String,
}

impl From<PayloadOutcomePoint> for PointRow {
    fn from(value: PayloadOutcomePoint) -> Self {
        Self {
            payload_mass_kg: value.payload_mass_kg,
            outcome: value.outcome.into(),
            booster_version_category: value.booster_version_category,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PayloadOutcomeResponse {
    pub points: Vec<PointRow>,
}

#[instrument(skip(store), level = "debug")]
pub async fn payload_outcome(
    store: web::Data<DatasetStore>,
    query: web::Query<PayloadOutcomeQuery>,
) -> Result<Json<PayloadOutcomeResponse>, Error> {
    let query = query.into_inner();
    let (from, to) = match (query.from, query.to) {
        (Some(from), Some(to)) => (from, to),
        (from, to) => {
            let bounds = store
                .payload_bounds()
                .map_err(error::ErrorInternalServerError)?;
            (from.unwrap_or(bounds.min), to.unwrap_or(bounds.max))
        }
    };
    let range = PayloadRange::new(from, to).map_err(error::ErrorBadRequest)?;
    let selector = SiteSelector::from(query.site);

    let points =
        payload_outcome_points(store.get_ref(), &selector, &range).map_err(map_read_error)?;
    Ok(Json(PayloadOutcomeResponse {
        points: points.into_iter().map(Into::into).collect(),
    }))
}
