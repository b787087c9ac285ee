//! Core domain types for the siting engine.
//!
//! The crate scores candidate sites against weighted criteria, classifies the
//! scores into bands, and keeps the state a map dashboard needs around them:
//! layer visibility, the active filter, heatmap synthesis and a bounded
//! comparison selection. Everything is synchronous and in-memory; callers own
//! the site catalog and pass it in by reference.
//!
//! # Examples
//!
//! ```
//! use siting_core::{FilterCriteria, WeightConfig, filter_and_rank, test_support::sample_sites};
//!
//! let sites = sample_sites();
//! let criteria = FilterCriteria::default().with_score_range(70, 100);
//! let kept = filter_and_rank(&sites, &criteria, &WeightConfig::default());
//! assert!(kept.iter().all(|s| s.score >= 70));
//! ```

#![forbid(unsafe_code)]

mod band;
mod comparison;
mod criterion;
mod dashboard;
mod filter;
mod heatmap;
mod layers;
mod ranking;
mod score;
mod site;
mod weights;

pub mod test_support;

pub use band::{Band, Classification, classify};
pub use comparison::{ComparisonSet, ToggleOutcome};
pub use criterion::{Criterion, CriterionParseError};
pub use dashboard::{ActionOutcome, Dashboard, DashboardAction, DashboardError};
pub use filter::{FilterCriteria, SitePredicate, build_predicate};
pub use heatmap::{
    HeatmapPoint, HeatmapSettings, HeatmapStyle, MAX_POINTS_PER_SITE, synthesize_heatmap,
    synthesize_heatmap_with_entropy,
};
pub use layers::{LayerDescriptor, LayerError, LayerKind, LayerKindParseError, LayerState};
pub use ranking::{
    ScoredSite, distinct_policy_zones, distinct_regions, filter_and_rank, rank_by_score,
    score_all, top_n,
};
pub use score::{MAX_SCORE, raw_score, sanitise, suitability_score};
pub use site::{SiteAttributes, SubScores};
pub use weights::{TOTAL_WEIGHT_TARGET, WeightConfig, WeightError, WeightUpdate};
