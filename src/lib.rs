//! Facade crate for the siting engine.
//!
//! This crate re-exports the core scoring, classification, filtering and
//! dashboard state types so callers depend on a single package.

#![forbid(unsafe_code)]

pub use siting_core::{
    ActionOutcome, Band, Classification, ComparisonSet, Criterion, CriterionParseError, Dashboard,
    DashboardAction, DashboardError, FilterCriteria, HeatmapPoint, HeatmapSettings, HeatmapStyle,
    LayerDescriptor, LayerError, LayerKind, LayerKindParseError, LayerState, MAX_POINTS_PER_SITE,
    MAX_SCORE, ScoredSite, SitePredicate, SiteAttributes, SubScores, TOTAL_WEIGHT_TARGET,
    ToggleOutcome, WeightConfig, WeightError, WeightUpdate, build_predicate, classify,
    distinct_policy_zones, distinct_regions, filter_and_rank, rank_by_score, raw_score, sanitise,
    score_all, suitability_score, synthesize_heatmap, synthesize_heatmap_with_entropy, top_n,
};
