//! Compound site filters.
//!
//! Every clause is ANDed; an unset optional clause is neutral. The score range
//! is checked literally, so an inverted range (`min_score > max_score`)
//! matches nothing rather than failing.

use crate::{SiteAttributes, WeightConfig, suitability_score};

/// Filter settings chosen by the caller.
///
/// # Examples
/// ```
/// use siting_core::FilterCriteria;
///
/// let criteria = FilterCriteria::default()
///     .with_region("Gujarat")
///     .with_score_range(60, 100);
/// assert_eq!(criteria.region.as_deref(), Some("Gujarat"));
/// assert!(!criteria.is_inverted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FilterCriteria {
    /// Exact region to match; `None` matches every region.
    pub region: Option<String>,
    /// Inclusive lower score bound.
    pub min_score: u8,
    /// Inclusive upper score bound.
    pub max_score: u8,
    /// Exact policy zone to match; `None` matches every zone.
    pub policy_zone: Option<String>,
    /// Require at least one infrastructure tag.
    pub require_infrastructure: bool,
    /// Case-insensitive substring matched against site name or region.
    pub search: Option<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            region: None,
            min_score: 0,
            max_score: crate::MAX_SCORE,
            policy_zone: None,
            require_infrastructure: false,
            search: None,
        }
    }
}

impl FilterCriteria {
    /// Restrict to a region while returning `self` for chaining.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Restrict to a policy zone while returning `self` for chaining.
    #[must_use]
    pub fn with_policy_zone(mut self, zone: impl Into<String>) -> Self {
        self.policy_zone = Some(zone.into());
        self
    }

    /// Set the inclusive score range while returning `self` for chaining.
    ///
    /// The bounds are stored as given; an inverted range filters everything
    /// out.
    #[must_use]
    pub fn with_score_range(mut self, min_score: u8, max_score: u8) -> Self {
        self.min_score = min_score;
        self.max_score = max_score;
        self
    }

    /// Require existing infrastructure while returning `self` for chaining.
    #[must_use]
    pub fn requiring_infrastructure(mut self) -> Self {
        self.require_infrastructure = true;
        self
    }

    /// Add a free-text search clause while returning `self` for chaining.
    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Report whether the score range is inverted and can match nothing.
    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.min_score > self.max_score
    }

    /// Bind the criteria to a weight configuration.
    #[must_use]
    pub const fn predicate<'a>(&'a self, weights: &'a WeightConfig) -> SitePredicate<'a> {
        SitePredicate {
            criteria: self,
            weights,
        }
    }
}

/// Criteria bound to the weights used to score each site.
#[derive(Debug, Clone, Copy)]
pub struct SitePredicate<'a> {
    criteria: &'a FilterCriteria,
    weights: &'a WeightConfig,
}

impl SitePredicate<'_> {
    /// Evaluate the predicate, returning the site's score when it matches.
    ///
    /// Cheap attribute clauses run before the site is scored.
    #[must_use]
    pub fn evaluate(&self, site: &SiteAttributes) -> Option<u8> {
        let criteria = self.criteria;
        if !self.matches_attributes(site) {
            return None;
        }
        let score = suitability_score(site, self.weights);
        (criteria.min_score..=criteria.max_score)
            .contains(&score)
            .then_some(score)
    }

    /// Report whether `site` satisfies every clause.
    #[must_use]
    pub fn matches(&self, site: &SiteAttributes) -> bool {
        self.evaluate(site).is_some()
    }

    fn matches_attributes(&self, site: &SiteAttributes) -> bool {
        let criteria = self.criteria;
        matches_exact(criteria.region.as_deref(), &site.region)
            && matches_exact(criteria.policy_zone.as_deref(), &site.policy_zone)
            && (!criteria.require_infrastructure || site.has_infrastructure())
            && matches_search(criteria.search.as_deref(), site)
    }
}

/// Build a predicate closure over `criteria` and `weights`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use siting_core::{FilterCriteria, SiteAttributes, WeightConfig, build_predicate};
///
/// let criteria = FilterCriteria::default().with_region("Ladakh");
/// let weights = WeightConfig::default();
/// let predicate = build_predicate(&criteria, &weights);
/// let site = SiteAttributes::new("1", "Leh", Coord { x: 77.6, y: 34.2 }).with_region("Ladakh");
/// assert!(predicate(&site));
/// ```
#[must_use]
pub fn build_predicate<'a>(
    criteria: &'a FilterCriteria,
    weights: &'a WeightConfig,
) -> impl Fn(&SiteAttributes) -> bool + 'a {
    let predicate = criteria.predicate(weights);
    move |site| predicate.matches(site)
}

fn matches_exact(wanted: Option<&str>, actual: &str) -> bool {
    wanted.is_none_or(|value| value == actual)
}

fn matches_search(query: Option<&str>, site: &SiteAttributes) -> bool {
    let Some(needle) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        return true;
    };
    let lowered = needle.to_lowercase();
    site.name.to_lowercase().contains(&lowered) || site.region.to_lowercase().contains(&lowered)
}
