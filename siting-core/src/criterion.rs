//! Resource and infrastructure criteria that contribute to a suitability
//! score.
//!
//! The set is fixed: every weight configuration and every site carries exactly
//! one value per criterion.
//!
//! # Examples
//! ```
//! use siting_core::Criterion;
//!
//! assert_eq!(Criterion::IndustryProximity.as_str(), "industryProximity");
//! assert_eq!(Criterion::Solar.to_string(), "solar");
//! ```

use thiserror::Error;

/// One of the six dimensions a site is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Criterion {
    /// Solar irradiance potential.
    Solar,
    /// Wind resource potential.
    Wind,
    /// Water availability.
    Water,
    /// Closeness to industrial demand clusters.
    IndustryProximity,
    /// Closeness to a grid connection.
    GridProximity,
    /// Amount of usable land.
    LandAvailability,
}

impl Criterion {
    /// Every criterion in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Solar,
        Self::Wind,
        Self::Water,
        Self::IndustryProximity,
        Self::GridProximity,
        Self::LandAvailability,
    ];

    /// Return the stable camelCase key used in configuration payloads.
    ///
    /// # Examples
    /// ```
    /// use siting_core::Criterion;
    ///
    /// assert_eq!(Criterion::GridProximity.as_str(), "gridProximity");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solar => "solar",
            Self::Wind => "wind",
            Self::Water => "water",
            Self::IndustryProximity => "industryProximity",
            Self::GridProximity => "gridProximity",
            Self::LandAvailability => "landAvailability",
        }
    }

    /// Human-readable label for charts and legends.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Solar => "Solar",
            Self::Wind => "Wind",
            Self::Water => "Water",
            Self::IndustryProximity => "Industry Proximity",
            Self::GridProximity => "Grid Proximity",
            Self::LandAvailability => "Land Availability",
        }
    }

    /// Chart colour associated with the criterion.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Solar => "#f59e0b",
            Self::Wind => "#3b82f6",
            Self::Water => "#0ea5e9",
            Self::IndustryProximity => "#8b5cf6",
            Self::GridProximity => "#10b981",
            Self::LandAvailability => "#84cc16",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown criterion name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown criterion '{0}'")]
pub struct CriterionParseError(pub String);

impl std::str::FromStr for Criterion {
    type Err = CriterionParseError;

    /// Parse a criterion, ignoring case, `_` and `-` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "solar" => Ok(Self::Solar),
            "wind" => Ok(Self::Wind),
            "water" => Ok(Self::Water),
            "industryproximity" => Ok(Self::IndustryProximity),
            "gridproximity" => Ok(Self::GridProximity),
            "landavailability" => Ok(Self::LandAvailability),
            _ => Err(CriterionParseError(s.to_owned())),
        }
    }
}
