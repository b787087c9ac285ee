#![cfg(feature = "serde")]
#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! JSON shape of the types exchanged with a rendering layer.

use rstest::rstest;
use serde_json::json;
use geo::Coord;
use siting_core::{
    FilterCriteria, HeatmapPoint, HeatmapSettings, ScoredSite, SiteAttributes, WeightConfig,
    WeightUpdate, test_support::sample_sites,
};

#[rstest]
fn site_catalog_entries_deserialise_from_camel_case() {
    let value = json!({
        "id": "7",
        "name": "Kutch Salt Flats",
        "location": { "x": 70.0, "y": 23.7 },
        "region": "Gujarat",
        "policyZone": "SEZ",
        "existingInfrastructure": ["Port Access"],
        "solarIndex": 92.0,
        "windIndex": 70.0,
        "waterIndex": 35.0,
        "industryProximity": 55.0,
        "gridProximity": 60.0,
        "landAvailability": 90.0
    });
    let site: SiteAttributes = serde_json::from_value(value).expect("valid site");
    assert_eq!(site.policy_zone, "SEZ");
    assert_eq!(site.sub_scores.land_availability, 90.0);
    assert!(site.has_infrastructure());
}

#[rstest]
fn optional_site_metadata_defaults_to_empty() {
    let value = json!({
        "id": "8",
        "name": "Bare",
        "location": { "x": 0.0, "y": 0.0 },
        "solarIndex": 0.0,
        "windIndex": 0.0,
        "waterIndex": 0.0,
        "industryProximity": 0.0,
        "gridProximity": 0.0,
        "landAvailability": 0.0
    });
    let site: SiteAttributes = serde_json::from_value(value).expect("valid site");
    assert!(site.region.is_empty());
    assert!(!site.has_infrastructure());
}

#[rstest]
fn scored_sites_flatten_the_underlying_site() {
    let sites = sample_sites();
    let first = sites.first().expect("catalog is not empty");
    let scored = ScoredSite::compute(first, &WeightConfig::default());
    let value = serde_json::to_value(scored).expect("serialise scored site");
    assert_eq!(value["id"], "1");
    assert_eq!(value["score"], 77);
    assert_eq!(value["band"], "high");
    assert_eq!(value["policyZone"], "SEZ");
}

#[rstest]
fn partial_filters_fill_in_defaults() {
    let criteria: FilterCriteria =
        serde_json::from_value(json!({ "region": "Ladakh", "minScore": 20 }))
            .expect("valid filter");
    assert_eq!(
        criteria,
        FilterCriteria::default()
            .with_region("Ladakh")
            .with_score_range(20, 100)
    );
}

#[rstest]
fn weight_updates_accept_partial_records() {
    let update: WeightUpdate =
        serde_json::from_value(json!({ "gridProximity": 12.5 })).expect("valid update");
    let mut weights = WeightConfig::default();
    weights.update(&update).expect("non-negative update");
    assert_eq!(weights.total_weight(), 107.5);
}

#[rstest]
fn heatmap_settings_round_trip_through_camel_case() {
    let value = serde_json::to_value(HeatmapSettings::default()).expect("serialise settings");
    assert_eq!(value, json!({ "pointsPerSite": 25, "spread": 1.5 }));
}

#[rstest]
fn weight_configs_deserialise_when_valid() {
    let weights: WeightConfig = serde_json::from_value(json!({
        "solar": 30.0,
        "wind": 25.0,
        "water": 20.0,
        "industryProximity": 15.0,
        "gridProximity": 5.0,
        "landAvailability": 5.0
    }))
    .expect("valid weights");
    assert_eq!(weights, WeightConfig::default());
}

#[rstest]
fn negative_weights_fail_to_deserialise() {
    let err = serde_json::from_value::<WeightConfig>(json!({
        "solar": -500.0,
        "wind": 25.0,
        "water": 20.0,
        "industryProximity": 15.0,
        "gridProximity": 5.0,
        "landAvailability": 5.0
    }))
    .expect_err("negative weight should be rejected");
    assert!(err.to_string().contains("solar"), "unexpected error: {err}");
}

#[rstest]
fn heatmap_points_serialise_as_flat_lat_lng() {
    let point = HeatmapPoint {
        location: Coord { x: 70.0, y: 26.0 },
        score: 88,
    };
    let value = serde_json::to_value(point).expect("serialise point");
    assert_eq!(value, json!({ "lat": 26.0, "lng": 70.0, "score": 88 }));
    let back: HeatmapPoint = serde_json::from_value(value).expect("deserialise point");
    assert_eq!(back, point);
}
