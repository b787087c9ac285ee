//! Criterion weights: non-negative importance values, conventionally summing
//! to 100.
//!
//! The model never normalises. A total other than
//! [`TOTAL_WEIGHT_TARGET`] is reported through [`WeightConfig::is_balanced`]
//! and a `log::warn!`, but scoring proceeds with whatever is set.

use thiserror::Error;

use crate::Criterion;

/// Conventional sum of all criterion weights.
pub const TOTAL_WEIGHT_TARGET: f64 = 100.0;

/// Errors returned when mutating a [`WeightConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WeightError {
    /// A weight was negative or not finite.
    #[error("weight for {criterion} must be a non-negative finite number, got {value}")]
    InvalidWeight {
        /// Criterion the value was destined for.
        criterion: Criterion,
        /// Rejected value.
        value: f64,
    },
}

/// Importance weights for the six scoring criteria.
///
/// Every construction path validates its values, deserialisation included.
///
/// # Examples
/// ```
/// use siting_core::{Criterion, WeightConfig};
///
/// # fn main() -> Result<(), siting_core::WeightError> {
/// let mut weights = WeightConfig::default();
/// weights.set_weight(Criterion::Wind, 40.0)?;
/// assert_eq!(weights.weight(Criterion::Wind), 40.0);
/// assert_eq!(weights.total_weight(), 115.0);
/// assert!(!weights.is_balanced());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", try_from = "RawWeights")
)]
pub struct WeightConfig {
    solar: f64,
    wind: f64,
    water: f64,
    industry_proximity: f64,
    grid_proximity: f64,
    land_availability: f64,
}

impl Default for WeightConfig {
    /// The dashboard's starting configuration, summing to 100.
    fn default() -> Self {
        Self {
            solar: 30.0,
            wind: 25.0,
            water: 20.0,
            industry_proximity: 15.0,
            grid_proximity: 5.0,
            land_availability: 5.0,
        }
    }
}

/// A partial weight record; `None` fields leave the current value untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct WeightUpdate {
    /// New solar weight.
    pub solar: Option<f64>,
    /// New wind weight.
    pub wind: Option<f64>,
    /// New water weight.
    pub water: Option<f64>,
    /// New industry proximity weight.
    pub industry_proximity: Option<f64>,
    /// New grid proximity weight.
    pub grid_proximity: Option<f64>,
    /// New land availability weight.
    pub land_availability: Option<f64>,
}

impl WeightUpdate {
    /// Return the requested value for `criterion`, if any.
    #[must_use]
    pub const fn get(&self, criterion: Criterion) -> Option<f64> {
        match criterion {
            Criterion::Solar => self.solar,
            Criterion::Wind => self.wind,
            Criterion::Water => self.water,
            Criterion::IndustryProximity => self.industry_proximity,
            Criterion::GridProximity => self.grid_proximity,
            Criterion::LandAvailability => self.land_availability,
        }
    }

    /// Set a single field while returning `self` for chaining.
    #[must_use]
    pub const fn with(mut self, criterion: Criterion, value: f64) -> Self {
        let slot = match criterion {
            Criterion::Solar => &mut self.solar,
            Criterion::Wind => &mut self.wind,
            Criterion::Water => &mut self.water,
            Criterion::IndustryProximity => &mut self.industry_proximity,
            Criterion::GridProximity => &mut self.grid_proximity,
            Criterion::LandAvailability => &mut self.land_availability,
        };
        *slot = Some(value);
        self
    }

    /// Report whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Criterion::ALL.iter().all(|c| self.get(*c).is_none())
    }
}

impl WeightConfig {
    /// Build a configuration from one value per criterion.
    ///
    /// # Errors
    /// Returns [`WeightError::InvalidWeight`] for the first negative or
    /// non-finite value, in [`Criterion::ALL`] order.
    pub fn from_fn(mut value_for: impl FnMut(Criterion) -> f64) -> Result<Self, WeightError> {
        let mut config = Self::zeroed();
        for criterion in Criterion::ALL {
            let value = validate(criterion, value_for(criterion))?;
            *config.slot_mut(criterion) = value;
        }
        Ok(config)
    }

    /// A configuration with every weight set to zero.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            solar: 0.0,
            wind: 0.0,
            water: 0.0,
            industry_proximity: 0.0,
            grid_proximity: 0.0,
            land_availability: 0.0,
        }
    }

    /// Return the weight for `criterion`.
    #[must_use]
    pub const fn weight(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Solar => self.solar,
            Criterion::Wind => self.wind,
            Criterion::Water => self.water,
            Criterion::IndustryProximity => self.industry_proximity,
            Criterion::GridProximity => self.grid_proximity,
            Criterion::LandAvailability => self.land_availability,
        }
    }

    /// Iterate `(criterion, weight)` pairs in canonical order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL.into_iter().map(|c| (c, self.weight(c)))
    }

    /// Replace a single criterion's weight, leaving the others untouched.
    ///
    /// # Errors
    /// Returns [`WeightError::InvalidWeight`] when `value` is negative or not
    /// finite; the configuration is unchanged.
    pub fn set_weight(&mut self, criterion: Criterion, value: f64) -> Result<(), WeightError> {
        let accepted = validate(criterion, value)?;
        *self.slot_mut(criterion) = accepted;
        log::debug!("weight for {criterion} set to {accepted}");
        self.warn_if_unbalanced();
        Ok(())
    }

    /// Add a weight while returning `self` for chaining.
    ///
    /// # Errors
    /// Same as [`WeightConfig::set_weight`].
    pub fn with_weight(mut self, criterion: Criterion, value: f64) -> Result<Self, WeightError> {
        self.set_weight(criterion, value)?;
        Ok(self)
    }

    /// Atomically replace the whole configuration.
    ///
    /// # Errors
    /// Returns [`WeightError::InvalidWeight`] when any value in `config` is
    /// negative or not finite; nothing is replaced in that case.
    pub fn replace_all(&mut self, config: Self) -> Result<(), WeightError> {
        for (criterion, value) in config.iter() {
            validate(criterion, value)?;
        }
        *self = config;
        log::debug!("weights replaced; total is now {}", self.total_weight());
        self.warn_if_unbalanced();
        Ok(())
    }

    /// Merge a partial record into the configuration.
    ///
    /// Every supplied value is validated before any is applied.
    ///
    /// # Errors
    /// Returns [`WeightError::InvalidWeight`] for the first invalid value;
    /// the configuration is unchanged.
    pub fn update(&mut self, update: &WeightUpdate) -> Result<(), WeightError> {
        let mut merged = *self;
        for criterion in Criterion::ALL {
            if let Some(value) = update.get(criterion) {
                *merged.slot_mut(criterion) = validate(criterion, value)?;
            }
        }
        *self = merged;
        log::debug!("weights merged; total is now {}", self.total_weight());
        self.warn_if_unbalanced();
        Ok(())
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.iter().map(|(_, w)| w).sum()
    }

    /// Report whether the total matches [`TOTAL_WEIGHT_TARGET`].
    ///
    /// Advisory only: unbalanced configurations are still valid.
    #[expect(
        clippy::float_arithmetic,
        reason = "comparing the weight total against the target needs a tolerance"
    )]
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        (self.total_weight() - TOTAL_WEIGHT_TARGET).abs() < 1e-9
    }

    fn warn_if_unbalanced(&self) {
        if !self.is_balanced() {
            log::warn!(
                "criterion weights total {} rather than {TOTAL_WEIGHT_TARGET}; scores may clamp or compress",
                self.total_weight()
            );
        }
    }

    const fn slot_mut(&mut self, criterion: Criterion) -> &mut f64 {
        match criterion {
            Criterion::Solar => &mut self.solar,
            Criterion::Wind => &mut self.wind,
            Criterion::Water => &mut self.water,
            Criterion::IndustryProximity => &mut self.industry_proximity,
            Criterion::GridProximity => &mut self.grid_proximity,
            Criterion::LandAvailability => &mut self.land_availability,
        }
    }
}

/// Unvalidated wire form of [`WeightConfig`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWeights {
    solar: f64,
    wind: f64,
    water: f64,
    industry_proximity: f64,
    grid_proximity: f64,
    land_availability: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWeights> for WeightConfig {
    type Error = WeightError;

    fn try_from(raw: RawWeights) -> Result<Self, Self::Error> {
        Self::from_fn(|criterion| match criterion {
            Criterion::Solar => raw.solar,
            Criterion::Wind => raw.wind,
            Criterion::Water => raw.water,
            Criterion::IndustryProximity => raw.industry_proximity,
            Criterion::GridProximity => raw.grid_proximity,
            Criterion::LandAvailability => raw.land_availability,
        })
    }
}

fn validate(criterion: Criterion, value: f64) -> Result<f64, WeightError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(WeightError::InvalidWeight { criterion, value })
    }
}
