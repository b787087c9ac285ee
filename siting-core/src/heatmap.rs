//! Synthetic point clouds for heatmap rendering.
//!
//! Each scored site is expanded into a cluster of points scattered uniformly
//! within a square of side `spread` centred on the site. Positions are random;
//! every point carries its parent's score unchanged. The random source is
//! injected so tests can pass a seeded generator.

use geo::Coord;
use rand::Rng;

use crate::{Band, ScoredSite};

/// Largest cluster [`synthesize_heatmap`] generates around one site.
pub const MAX_POINTS_PER_SITE: usize = 10_000;

/// A displaced point carrying its parent site's score.
///
/// Serialises flat as `{"lat", "lng", "score"}`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "PointRecord", from = "PointRecord")
)]
pub struct HeatmapPoint {
    /// Position, `x = longitude` and `y = latitude`.
    pub location: Coord<f64>,
    /// Score inherited from the parent site.
    pub score: u8,
}

impl HeatmapPoint {
    /// Latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.location.x
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PointRecord {
    lat: f64,
    lng: f64,
    score: u8,
}

#[cfg(feature = "serde")]
impl From<HeatmapPoint> for PointRecord {
    fn from(point: HeatmapPoint) -> Self {
        Self {
            lat: point.lat(),
            lng: point.lng(),
            score: point.score,
        }
    }
}

#[cfg(feature = "serde")]
impl From<PointRecord> for HeatmapPoint {
    fn from(record: PointRecord) -> Self {
        Self {
            location: Coord {
                x: record.lng,
                y: record.lat,
            },
            score: record.score,
        }
    }
}

/// Density parameters for synthesis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HeatmapSettings {
    /// Points generated around each site.
    pub points_per_site: usize,
    /// Side length, in degrees, of the square each cluster is drawn from.
    pub spread: f64,
}

impl Default for HeatmapSettings {
    fn default() -> Self {
        Self {
            points_per_site: 25,
            spread: 1.5,
        }
    }
}

/// Expand scored sites into a random point cloud.
///
/// Produces exactly `points_per_site * sites.len()` points, grouped by site in
/// input order. Densities above [`MAX_POINTS_PER_SITE`] are capped. Each coordinate is offset independently by a uniform value in
/// `[-spread / 2, spread / 2]`. A zero, negative-zero or non-finite spread
/// places every point on its site; negative spreads use their magnitude.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use siting_core::{ScoredSite, SiteAttributes, synthesize_heatmap};
///
/// let site = SiteAttributes::new("1", "Hub", Coord { x: 70.0, y: 26.0 });
/// let scored = [ScoredSite::new(&site, 88)];
/// let mut rng = StdRng::seed_from_u64(7);
/// let points = synthesize_heatmap(&scored, 10, 1.5, &mut rng);
/// assert_eq!(points.len(), 10);
/// assert!(points.iter().all(|p| p.score == 88));
/// ```
#[must_use]
pub fn synthesize_heatmap<R>(
    sites: &[ScoredSite<'_>],
    points_per_site: usize,
    spread: f64,
    rng: &mut R,
) -> Vec<HeatmapPoint>
where
    R: Rng + ?Sized,
{
    let per_site = cap_density(points_per_site);
    let half = half_spread(spread);
    let mut points = Vec::with_capacity(sites.len().checked_mul(per_site).unwrap_or_default());
    for scored in sites {
        let centre = scored.site.location;
        for _ in 0..per_site {
            points.push(HeatmapPoint {
                location: offset(centre, half, rng),
                score: scored.score,
            });
        }
    }
    log::debug!(
        "synthesised {} heatmap points from {} sites",
        points.len(),
        sites.len()
    );
    points
}

/// Expand scored sites using a thread-local entropy source.
#[must_use]
pub fn synthesize_heatmap_with_entropy(
    sites: &[ScoredSite<'_>],
    settings: HeatmapSettings,
) -> Vec<HeatmapPoint> {
    synthesize_heatmap(
        sites,
        settings.points_per_site,
        settings.spread,
        &mut rand::thread_rng(),
    )
}

fn cap_density(points_per_site: usize) -> usize {
    if points_per_site > MAX_POINTS_PER_SITE {
        log::warn!(
            "{points_per_site} points per site requested; capping at {MAX_POINTS_PER_SITE}"
        );
        MAX_POINTS_PER_SITE
    } else {
        points_per_site
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the offset bound is half the spread"
)]
fn half_spread(spread: f64) -> f64 {
    if spread.is_finite() {
        spread.abs() / 2.0
    } else {
        0.0
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "displacing a coordinate adds a random offset"
)]
fn offset<R: Rng + ?Sized>(centre: Coord<f64>, half: f64, rng: &mut R) -> Coord<f64> {
    if half == 0.0 {
        return centre;
    }
    Coord {
        x: centre.x + rng.gen_range(-half..=half),
        y: centre.y + rng.gen_range(-half..=half),
    }
}

/// Marker styling derived from a point's score.
///
/// Radius grows linearly with score; colour follows the score's band.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HeatmapStyle {
    /// Radius of a marker scoring 100.
    pub base_radius: f64,
    /// Fill opacity applied to every marker.
    pub fill_opacity: f64,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self {
            base_radius: 8.0,
            fill_opacity: 0.4,
        }
    }
}

impl HeatmapStyle {
    /// Marker radius for `score`; monotonically non-decreasing.
    #[expect(
        clippy::float_arithmetic,
        reason = "radius scales linearly with score"
    )]
    #[must_use]
    pub fn marker_radius(&self, score: u8) -> f64 {
        self.base_radius * f64::from(score) / 100.0
    }

    /// Marker colour for `score`.
    #[must_use]
    pub const fn marker_color(&self, score: u8) -> &'static str {
        Band::from_score(score).color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SiteAttributes;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    fn site(id: &str, x: f64, y: f64) -> SiteAttributes {
        SiteAttributes::new(id, id, Coord { x, y })
    }

    #[rstest]
    #[case(0.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn degenerate_spread_pins_points_to_site(#[case] spread: f64) {
        let s = site("a", 72.5, 19.0);
        let scored = [ScoredSite::new(&s, 64)];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let points = synthesize_heatmap(&scored, 5, spread, &mut rng);
        assert_eq!(points.len(), 5);
        assert!(points.iter().all(|p| p.location == s.location));
    }

    #[test]
    fn seeded_generators_reproduce_output() {
        let s = site("a", 10.0, 20.0);
        let scored = [ScoredSite::new(&s, 50)];
        let first = synthesize_heatmap(&scored, 8, 1.0, &mut ChaCha8Rng::seed_from_u64(42));
        let second = synthesize_heatmap(&scored, 8, 1.0, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn negative_spread_uses_magnitude() {
        let s = site("a", 0.0, 0.0);
        let scored = [ScoredSite::new(&s, 10)];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let points = synthesize_heatmap(&scored, 50, -2.0, &mut rng);
        assert!(
            points
                .iter()
                .all(|p| p.lat().abs() <= 1.0 && p.lng().abs() <= 1.0)
        );
        assert!(points.iter().any(|p| p.location != s.location));
    }

    #[test]
    fn points_are_grouped_by_site() {
        let a = site("a", 0.0, 0.0);
        let b = site("b", 50.0, 50.0);
        let scored = [ScoredSite::new(&a, 20), ScoredSite::new(&b, 95)];
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let points = synthesize_heatmap(&scored, 3, 0.5, &mut rng);
        let scores: Vec<u8> = points.iter().map(|p| p.score).collect();
        assert_eq!(scores, vec![20, 20, 20, 95, 95, 95]);
    }

    #[test]
    fn oversized_density_is_capped() {
        let s = site("a", 1.0, 2.0);
        let scored = [ScoredSite::new(&s, 60)];
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let points = synthesize_heatmap(&scored, usize::MAX, 0.0, &mut rng);
        assert_eq!(points.len(), MAX_POINTS_PER_SITE);
        assert!(points.iter().all(|p| p.location == s.location && p.score == 60));
    }

    #[test]
    fn zero_points_per_site_yields_empty_cloud() {
        let s = site("a", 0.0, 0.0);
        let scored = [ScoredSite::new(&s, 77)];
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(synthesize_heatmap(&scored, 0, 1.5, &mut rng).is_empty());
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(50, 4.0)]
    #[case(100, 8.0)]
    fn marker_radius_scales_with_score(#[case] score: u8, #[case] expected: f64) {
        let style = HeatmapStyle::default();
        assert!((style.marker_radius(score) - expected).abs() < 1e-12);
    }

    #[test]
    fn marker_radius_is_monotonic() {
        let style = HeatmapStyle::default();
        let radii: Vec<f64> = (0..=100).map(|s| style.marker_radius(s)).collect();
        assert!(radii.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn entropy_synthesis_respects_settings() {
        let s = site("a", 5.0, 5.0);
        let scored = [ScoredSite::new(&s, 42)];
        let points = synthesize_heatmap_with_entropy(&scored, HeatmapSettings::default());
        assert_eq!(points.len(), 25);
        assert!(
            points
                .iter()
                .all(|p| (p.lat() - 5.0).abs() <= 0.75 + 1e-9 && (p.lng() - 5.0).abs() <= 0.75 + 1e-9)
        );
    }
}
