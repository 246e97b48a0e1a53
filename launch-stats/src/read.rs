use crate::{
    dataset::DatasetStore,
    record::Outcome,
    selection::{PayloadRange, SiteSelector},
};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("{0} is not a known launch site")]
    UnknownSite(String),
}

/// One row of the all-sites view: mean outcome over the site's
/// records, in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSuccessRate {
    pub site: String,
    pub success_rate: f64,
}

/// One row of the single-site view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeCount {
    pub outcome: Outcome,
    pub count: u64,
}

/// Pie-chart input. The shape depends on the selector: rates across
/// sites for `ALL`, outcome counts for one site.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteSuccessSummary {
    /// Sorted by site name, so output is deterministic for a given
    /// table.
    AllSites(Vec<SiteSuccessRate>),
    /// Up to two rows; a label with zero matching records is omitted.
    /// Empty when the selected site has no records at all.
    SingleSite(Vec<OutcomeCount>),
}

/// Scatter-chart input point.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadOutcomePoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

fn ensure_known_site(store: &DatasetStore, selector: &SiteSelector) -> Result<(), ReadError> {
    if let SiteSelector::Site(site) = selector {
        if !store.is_known_site(site) {
            return Err(ReadError::UnknownSite(site.clone()));
        }
    }
    Ok(())
}

/// Success-rate breakdown for the pie view. Pure function of
/// `(store, selector)`; recomputed on every call, nothing is cached.
pub fn site_success_summary(
    store: &DatasetStore,
    selector: &SiteSelector,
) -> Result<SiteSuccessSummary, ReadError> {
    ensure_known_site(store, selector)?;

    match selector {
        SiteSelector::All => {
            // (successes, total) per site
            let mut groups: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
            for record in store.records() {
                let entry = groups.entry(record.launch_site.as_str()).or_default();
                if record.outcome.is_success() {
                    entry.0 += 1;
                }
                entry.1 += 1;
            }
            let rates = groups
                .into_iter()
                .map(|(site, (successes, total))| SiteSuccessRate {
                    site: site.to_string(),
                    success_rate: successes as f64 / total as f64,
                })
                .collect();
            Ok(SiteSuccessSummary::AllSites(rates))
        }
        SiteSelector::Site(site) => {
            let mut failures = 0;
            let mut successes = 0;
            for record in store.records() {
                if record.launch_site != *site {
                    continue;
                }
                match record.outcome {
                    Outcome::Failure => failures += 1,
                    Outcome::Success => successes += 1,
                }
            }
            let mut counts = Vec::with_capacity(2);
            if failures > 0 {
                counts.push(OutcomeCount {
                    outcome: Outcome::Failure,
                    count: failures,
                });
            }
            if successes > 0 {
                counts.push(OutcomeCount {
                    outcome: Outcome::Success,
                    count: successes,
                });
            }
            Ok(SiteSuccessSummary::SingleSite(counts))
        }
    }
}

/// Point set for the payload/outcome scatter view: the intersection of
/// the site filter and the inclusive payload-range filter. Records
/// with an absent payload mass never match. An empty result is valid.
pub fn payload_outcome_points(
    store: &DatasetStore,
    selector: &SiteSelector,
    range: &PayloadRange,
) -> Result<Vec<PayloadOutcomePoint>, ReadError> {
    ensure_known_site(store, selector)?;

    let points = store
        .records()
        .iter()
        .filter(|record| selector.matches(&record.launch_site))
        .filter_map(|record| record.payload_mass_kg.map(|mass| (record, mass)))
        .filter(|(_, mass)| range.contains(*mass))
        .map(|(record, mass)| PayloadOutcomePoint {
            payload_mass_kg: mass,
            outcome: record.outcome,
            booster_version_category: record.booster_version_category.clone(),
        })
        .collect();
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::LaunchRecord;
    use pretty_assertions::assert_eq;

    fn record(site: &str, outcome: u8, mass: Option<f64>, booster: &str) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: mass,
            outcome: outcome.try_into().unwrap(),
            booster_version_category: booster.to_string(),
        }
    }

    fn ccafs_store() -> DatasetStore {
        DatasetStore::from_records(vec![
            record("CCAFS LC-40", 0, Some(100.0), "v1.0"),
            record("CCAFS LC-40", 1, Some(6000.0), "v1.1"),
            record("CCAFS LC-40", 1, Some(3000.0), "FT"),
        ])
    }

    #[test]
    fn single_site_counts_fail_and_success() {
        let store = ccafs_store();
        let summary = site_success_summary(&store, &"CCAFS LC-40".into()).unwrap();
        assert_eq!(
            summary,
            SiteSuccessSummary::SingleSite(vec![
                OutcomeCount {
                    outcome: Outcome::Failure,
                    count: 1
                },
                OutcomeCount {
                    outcome: Outcome::Success,
                    count: 2
                },
            ])
        );
    }

    #[test]
    fn single_site_counts_partition_the_site_records() {
        let store = ccafs_store();
        let summary = site_success_summary(&store, &"CCAFS LC-40".into()).unwrap();
        let SiteSuccessSummary::SingleSite(counts) = summary else {
            panic!("expected single-site view");
        };
        let total: u64 = counts.iter().map(|c| c.count).sum();
        assert_eq!(total as usize, store.records().len());
    }

    #[test]
    fn single_site_omits_zero_count_labels() {
        let store = DatasetStore::from_records(vec![
            record("KSC LC-39A", 1, Some(1000.0), "FT"),
            record("KSC LC-39A", 1, Some(2000.0), "FT"),
        ]);
        let summary = site_success_summary(&store, &"KSC LC-39A".into()).unwrap();
        assert_eq!(
            summary,
            SiteSuccessSummary::SingleSite(vec![OutcomeCount {
                outcome: Outcome::Success,
                count: 2
            }])
        );
    }

    #[test]
    fn site_with_zero_records_yields_an_empty_summary() {
        let store = DatasetStore::from_records(vec![record("A", 1, Some(10.0), "v1.0")])
            .with_known_sites(vec!["A".to_string(), "B".to_string()]);
        let summary = site_success_summary(&store, &"B".into()).unwrap();
        assert_eq!(summary, SiteSuccessSummary::SingleSite(vec![]));
    }

    #[test]
    fn all_sites_view_holds_mean_outcomes() {
        let store = DatasetStore::from_records(vec![
            record("A", 1, Some(10.0), "v1.0"),
            record("A", 0, Some(20.0), "v1.0"),
            record("B", 1, Some(30.0), "v1.1"),
            record("B", 1, Some(40.0), "v1.1"),
        ]);
        let summary = site_success_summary(&store, &SiteSelector::All).unwrap();
        assert_eq!(
            summary,
            SiteSuccessSummary::AllSites(vec![
                SiteSuccessRate {
                    site: "A".to_string(),
                    success_rate: 0.5
                },
                SiteSuccessRate {
                    site: "B".to_string(),
                    success_rate: 1.0
                },
            ])
        );
    }

    #[test]
    fn all_sites_rates_stay_within_unit_interval() {
        let store = ccafs_store();
        let summary = site_success_summary(&store, &SiteSelector::All).unwrap();
        let SiteSuccessSummary::AllSites(rates) = summary else {
            panic!("expected all-sites view");
        };
        for row in rates {
            assert!((0.0..=1.0).contains(&row.success_rate), "{row:?}");
        }
    }

    #[test]
    fn summary_is_idempotent() {
        let store = ccafs_store();
        let first = site_success_summary(&store, &SiteSelector::All).unwrap();
        let second = site_success_summary(&store, &SiteSelector::All).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_site_is_an_explicit_error() {
        let store = ccafs_store();
        let err = site_success_summary(&store, &"unknown-site".into()).unwrap_err();
        assert_eq!(err, ReadError::UnknownSite("unknown-site".to_string()));

        let range = PayloadRange::new(0.0, 10000.0).unwrap();
        let err = payload_outcome_points(&store, &"unknown-site".into(), &range).unwrap_err();
        assert_eq!(err, ReadError::UnknownSite("unknown-site".to_string()));
    }

    #[test]
    fn range_filter_is_inclusive_and_complete() {
        let store = ccafs_store();
        let range = PayloadRange::new(0.0, 5000.0).unwrap();
        let points = payload_outcome_points(&store, &SiteSelector::All, &range).unwrap();
        assert_eq!(
            points.iter().map(|p| p.payload_mass_kg).collect::<Vec<_>>(),
            vec![100.0, 3000.0]
        );
        for point in &points {
            assert!(range.contains(point.payload_mass_kg));
        }
    }

    #[test]
    fn site_and_range_filters_intersect() {
        let store = DatasetStore::from_records(vec![
            record("A", 1, Some(100.0), "v1.0"),
            record("A", 0, Some(9000.0), "v1.1"),
            record("B", 1, Some(200.0), "FT"),
        ]);
        let range = PayloadRange::new(0.0, 1000.0).unwrap();
        let points = payload_outcome_points(&store, &"A".into(), &range).unwrap();
        assert_eq!(
            points,
            vec![PayloadOutcomePoint {
                payload_mass_kg: 100.0,
                outcome: Outcome::Success,
                booster_version_category: "v1.0".to_string(),
            }]
        );
    }

    #[test]
    fn absent_masses_are_excluded_from_the_scatter() {
        let store = DatasetStore::from_records(vec![
            record("A", 1, None, "v1.0"),
            record("A", 0, Some(500.0), "v1.0"),
        ]);
        let range = PayloadRange::new(0.0, 1000.0).unwrap();
        let points = payload_outcome_points(&store, &SiteSelector::All, &range).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].payload_mass_kg, 500.0);
    }

    #[test]
    fn global_bounds_cover_every_present_mass() {
        let store = ccafs_store();
        let bounds = store.payload_bounds().unwrap();
        let range = PayloadRange::new(bounds.min, bounds.max).unwrap();
        let points = payload_outcome_points(&store, &SiteSelector::All, &range).unwrap();
        let with_mass = store
            .records()
            .iter()
            .filter(|r| r.payload_mass_kg.is_some())
            .count();
        assert_eq!(points.len(), with_mass);
    }

    #[test]
    fn empty_in_range_result_is_not_an_error() {
        let store = ccafs_store();
        let range = PayloadRange::new(20000.0, 30000.0).unwrap();
        let points = payload_outcome_points(&store, &SiteSelector::All, &range).unwrap();
        assert_eq!(points, vec![]);
    }
}
