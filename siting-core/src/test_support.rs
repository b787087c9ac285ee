//! Sample site catalog used by unit, behaviour and property tests.
//!
//! Scores under the default weights are fixed and listed on
//! [`sample_sites`] so assertions can name them directly.

use geo::Coord;

use crate::{SiteAttributes, SubScores};

fn sub_scores(
    solar: f64,
    wind: f64,
    water: f64,
    industry: f64,
    grid: f64,
    land: f64,
) -> SubScores {
    SubScores {
        solar_index: solar,
        wind_index: wind,
        water_index: water,
        industry_proximity: industry,
        grid_proximity: grid,
        land_availability: land,
    }
}

/// Six candidate sites spread across every band.
///
/// Default-weight scores, in catalog order:
///
/// | id | name                          | score | band      |
/// |----|-------------------------------|-------|-----------|
/// | 1  | Jaisalmer Solar Hub           | 77    | High      |
/// | 2  | Gujarat Wind Corridor         | 90    | Excellent |
/// | 3  | Tamil Nadu Industrial Zone    | 79    | High      |
/// | 4  | Karnataka Plateau             | 70    | High      |
/// | 5  | Maharashtra Industrial Cluster| 67    | Medium    |
/// | 6  | Ladakh High-Altitude Desert   | 37    | Low       |
#[must_use]
pub fn sample_sites() -> Vec<SiteAttributes> {
    vec![
        SiteAttributes::new("1", "Jaisalmer Solar Hub", Coord { x: 70.9228, y: 26.9117 })
            .with_region("Rajasthan")
            .with_policy_zone("SEZ")
            .with_infrastructure(["Solar Plant", "Grid Connection", "Road Network"])
            .with_sub_scores(sub_scores(95.0, 70.0, 60.0, 70.0, 80.0, 90.0)),
        SiteAttributes::new("2", "Gujarat Wind Corridor", Coord { x: 71.1924, y: 22.2587 })
            .with_region("Gujarat")
            .with_policy_zone("GIFT City")
            .with_infrastructure(["Wind Farm", "Port Access", "Industrial Zone"])
            .with_sub_scores(sub_scores(90.0, 98.0, 80.0, 90.0, 90.0, 90.0)),
        SiteAttributes::new(
            "3",
            "Tamil Nadu Industrial Zone",
            Coord { x: 80.2707, y: 13.0827 },
        )
        .with_region("Tamil Nadu")
        .with_policy_zone("SEZ")
        .with_infrastructure(["Industrial Park", "Port", "Airport", "Tech Hub"])
        .with_sub_scores(sub_scores(80.0, 85.0, 70.0, 85.0, 80.0, 60.0)),
        SiteAttributes::new("4", "Karnataka Plateau", Coord { x: 76.0, y: 14.5 })
            .with_region("Karnataka")
            .with_policy_zone("Tech Park")
            .with_infrastructure(["Tech Hub", "Grid Connection", "Research Center"])
            .with_sub_scores(sub_scores(85.0, 50.0, 70.0, 70.0, 70.0, 80.0)),
        SiteAttributes::new(
            "5",
            "Maharashtra Industrial Cluster",
            Coord { x: 76.0, y: 19.5 },
        )
        .with_region("Maharashtra")
        .with_policy_zone("SEZ")
        .with_infrastructure(["Industrial Zone", "Rail Link"])
        .with_sub_scores(sub_scores(88.0, 75.0, 40.0, 50.0, 40.0, 95.0)),
        SiteAttributes::new(
            "6",
            "Ladakh High-Altitude Desert",
            Coord { x: 77.5, y: 34.5 },
        )
        .with_region("Ladakh")
        .with_policy_zone("Special Category")
        .with_sub_scores(sub_scores(70.0, 30.0, 20.0, 10.0, 10.0, 50.0)),
    ]
}
