//! Deterministic weighted suitability scoring.
//!
//! Each criterion contributes `sub_score / 100 * weight`. The sum is rounded
//! to the nearest integer and clamped into `0..=100`. Weights are not
//! normalised: when they total more than 100 the clamp caps the result, and
//! when they total less the score stays compressed. Callers comparing
//! configurations with different totals must normalise first.

use crate::{Criterion, SiteAttributes, WeightConfig};

/// Highest attainable suitability score.
pub const MAX_SCORE: u8 = 100;

/// Compute the suitability score of `site` under `weights`.
///
/// The function is total and pure: it never fails and has no hidden state.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use siting_core::{SiteAttributes, SubScores, WeightConfig, suitability_score};
///
/// let site = SiteAttributes::new("1", "Hub", Coord { x: 0.0, y: 0.0 })
///     .with_sub_scores(SubScores::uniform(100.0));
/// assert_eq!(suitability_score(&site, &WeightConfig::default()), 100);
/// ```
#[must_use]
pub fn suitability_score(site: &SiteAttributes, weights: &WeightConfig) -> u8 {
    sanitise(raw_score(site, weights))
}

/// Weighted sum before rounding and clamping.
#[expect(
    clippy::float_arithmetic,
    reason = "weighted scoring multiplies sub-scores by weights"
)]
#[must_use]
pub fn raw_score(site: &SiteAttributes, weights: &WeightConfig) -> f64 {
    Criterion::ALL
        .iter()
        .map(|&c| site.sub_scores.get(c) / 100.0 * weights.weight(c))
        .sum()
}

/// Round and clamp a raw weighted sum into `0..=100`.
///
/// Non-finite inputs yield `0`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is rounded and clamped into 0..=100 before the cast"
)]
#[must_use]
pub fn sanitise(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}
