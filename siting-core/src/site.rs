//! Candidate sites and their per-criterion sub-scores.

use geo::Coord;

use crate::Criterion;

/// Per-criterion sub-scores for a site, each nominally in `0.0..=100.0`.
///
/// Values outside the range are tolerated; the score they feed is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SubScores {
    /// Solar resource index.
    pub solar_index: f64,
    /// Wind resource index.
    pub wind_index: f64,
    /// Water availability index.
    pub water_index: f64,
    /// Industry proximity index (higher is closer).
    pub industry_proximity: f64,
    /// Grid proximity index (higher is closer).
    pub grid_proximity: f64,
    /// Land availability index.
    pub land_availability: f64,
}

impl SubScores {
    /// Every sub-score set to `value`.
    ///
    /// # Examples
    /// ```
    /// use siting_core::{Criterion, SubScores};
    ///
    /// let scores = SubScores::uniform(100.0);
    /// assert_eq!(scores.get(Criterion::Water), 100.0);
    /// ```
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            solar_index: value,
            wind_index: value,
            water_index: value,
            industry_proximity: value,
            grid_proximity: value,
            land_availability: value,
        }
    }

    /// Return the sub-score for `criterion`.
    #[must_use]
    pub const fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Solar => self.solar_index,
            Criterion::Wind => self.wind_index,
            Criterion::Water => self.water_index,
            Criterion::IndustryProximity => self.industry_proximity,
            Criterion::GridProximity => self.grid_proximity,
            Criterion::LandAvailability => self.land_availability,
        }
    }
}

/// A candidate site supplied by the caller.
///
/// Coordinates follow the `geo` convention: `x = longitude`, `y = latitude`.
/// The engine only ever reads sites; it derives scores from them without
/// mutation.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use siting_core::{SiteAttributes, SubScores};
///
/// let site = SiteAttributes::new("1", "Jaisalmer Solar Hub", Coord { x: 70.92, y: 26.91 })
///     .with_region("Rajasthan")
///     .with_policy_zone("SEZ")
///     .with_infrastructure(["Solar Plant"])
///     .with_sub_scores(SubScores::uniform(80.0));
///
/// assert_eq!(site.latitude(), 26.91);
/// assert!(site.has_infrastructure());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SiteAttributes {
    /// Caller-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Administrative region the site belongs to.
    #[cfg_attr(feature = "serde", serde(default))]
    pub region: String,
    /// Policy zone designation, for example `SEZ`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy_zone: String,
    /// Tags naming infrastructure already present on or near the site.
    #[cfg_attr(feature = "serde", serde(default))]
    pub existing_infrastructure: Vec<String>,
    /// Per-criterion sub-scores.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub sub_scores: SubScores,
}

impl SiteAttributes {
    /// Construct a site with empty metadata and zeroed sub-scores.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            region: String::new(),
            policy_zone: String::new(),
            existing_infrastructure: Vec::new(),
            sub_scores: SubScores::default(),
        }
    }

    /// Set the region while returning `self` for chaining.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the policy zone while returning `self` for chaining.
    #[must_use]
    pub fn with_policy_zone(mut self, zone: impl Into<String>) -> Self {
        self.policy_zone = zone.into();
        self
    }

    /// Replace the infrastructure tags while returning `self` for chaining.
    #[must_use]
    pub fn with_infrastructure<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.existing_infrastructure = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the sub-scores while returning `self` for chaining.
    #[must_use]
    pub fn with_sub_scores(mut self, sub_scores: SubScores) -> Self {
        self.sub_scores = sub_scores;
        self
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Report whether any infrastructure is recorded for the site.
    #[must_use]
    pub fn has_infrastructure(&self) -> bool {
        !self.existing_infrastructure.is_empty()
    }
}
