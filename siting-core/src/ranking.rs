//! Filtered and ranked views over a site collection.
//!
//! Filtering keeps the caller's order. Ranking is a separate, stable sort by
//! descending score, so sites with equal scores stay in collection order.
//! Scores are recomputed on every call; nothing is cached between passes.

use crate::{Band, FilterCriteria, SiteAttributes, WeightConfig, suitability_score};

/// A site with its derived score and band.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoredSite<'a> {
    /// The underlying site.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub site: &'a SiteAttributes,
    /// Suitability score in `0..=100`.
    pub score: u8,
    /// Band derived from `score`.
    pub band: Band,
}

impl<'a> ScoredSite<'a> {
    /// Attach a precomputed score to `site`.
    #[must_use]
    pub const fn new(site: &'a SiteAttributes, score: u8) -> Self {
        Self {
            site,
            score,
            band: Band::from_score(score),
        }
    }

    /// Score `site` under `weights`.
    #[must_use]
    pub fn compute(site: &'a SiteAttributes, weights: &WeightConfig) -> Self {
        Self::new(site, suitability_score(site, weights))
    }

    /// Display colour for the site's band.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        self.band.color()
    }
}

/// Score every site without filtering, preserving order.
#[must_use]
pub fn score_all<'a>(sites: &'a [SiteAttributes], weights: &WeightConfig) -> Vec<ScoredSite<'a>> {
    sites
        .iter()
        .map(|site| ScoredSite::compute(site, weights))
        .collect()
}

/// Keep the sites matching `criteria` and attach their score and band.
///
/// The result keeps collection order; use [`rank_by_score`] or [`top_n`] to
/// sort. An inverted score range yields an empty result.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use siting_core::{FilterCriteria, SiteAttributes, SubScores, WeightConfig, filter_and_rank};
///
/// let sites = vec![
///     SiteAttributes::new("a", "Alpha", Coord { x: 0.0, y: 0.0 })
///         .with_sub_scores(SubScores::uniform(90.0)),
///     SiteAttributes::new("b", "Beta", Coord { x: 1.0, y: 1.0 })
///         .with_sub_scores(SubScores::uniform(30.0)),
/// ];
/// let criteria = FilterCriteria::default().with_score_range(50, 100);
/// let kept = filter_and_rank(&sites, &criteria, &WeightConfig::default());
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].score, 90);
/// ```
#[must_use]
pub fn filter_and_rank<'a>(
    sites: &'a [SiteAttributes],
    criteria: &FilterCriteria,
    weights: &WeightConfig,
) -> Vec<ScoredSite<'a>> {
    let predicate = criteria.predicate(weights);
    let kept: Vec<ScoredSite<'a>> = sites
        .iter()
        .filter_map(|site| predicate.evaluate(site).map(|score| ScoredSite::new(site, score)))
        .collect();
    log::debug!("filter kept {} of {} sites", kept.len(), sites.len());
    kept
}

/// Sort by descending score; ties keep their input order.
pub fn rank_by_score(scored: &mut [ScoredSite<'_>]) {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Return the `n` highest-scoring sites, ties broken by input order.
#[must_use]
pub fn top_n<'a>(scored: &[ScoredSite<'a>], n: usize) -> Vec<ScoredSite<'a>> {
    let mut ranked = scored.to_vec();
    rank_by_score(&mut ranked);
    ranked.truncate(n);
    ranked
}

/// Sorted, deduplicated regions present in `sites`, for filter choices.
#[must_use]
pub fn distinct_regions(sites: &[SiteAttributes]) -> Vec<&str> {
    distinct(sites.iter().map(|site| site.region.as_str()))
}

/// Sorted, deduplicated policy zones present in `sites`, for filter choices.
#[must_use]
pub fn distinct_policy_zones(sites: &[SiteAttributes]) -> Vec<&str> {
    distinct(sites.iter().map(|site| site.policy_zone.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = values.filter(|v| !v.is_empty()).collect();
    out.sort_unstable();
    out.dedup();
    out
}
