//! Single-owner state container for an interactive siting session.
//!
//! [`Dashboard`] holds the weights, layers, filter, comparison selection and
//! view flags. All mutation goes through [`Dashboard::apply`], which applies
//! one [`DashboardAction`] fully before returning. Derived views such as
//! scored sites are recomputed on every read.

use rand::Rng;
use thiserror::Error;

use crate::{
    ComparisonSet, Criterion, FilterCriteria, HeatmapPoint, HeatmapSettings, LayerError,
    LayerState, ScoredSite, SiteAttributes, ToggleOutcome, WeightConfig, WeightError,
    WeightUpdate, filter_and_rank, synthesize_heatmap,
};

/// A discrete change requested by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    /// Set one criterion weight.
    SetWeight {
        /// Criterion to change.
        criterion: Criterion,
        /// New weight.
        value: f64,
    },
    /// Replace every weight at once.
    ReplaceWeights(WeightConfig),
    /// Merge a partial weight record.
    UpdateWeights(WeightUpdate),
    /// Flip a layer's visibility.
    ToggleLayer {
        /// Layer id.
        id: String,
    },
    /// Set a layer's opacity, clamped into `0.0..=1.0`.
    SetLayerOpacity {
        /// Layer id.
        id: String,
        /// Requested opacity.
        opacity: f64,
    },
    /// Select a site, or clear the selection with `None`.
    SelectSite(Option<String>),
    /// Switch between marker and heatmap rendering.
    ToggleHeatmapMode,
    /// Replace the active filter.
    SetFilter(FilterCriteria),
    /// Add or remove a site from the comparison set.
    ToggleComparison {
        /// Site id.
        id: String,
    },
    /// Empty the comparison set.
    ClearComparison,
}

/// What an applied action reports back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionOutcome {
    /// The action completed with nothing further to report.
    Applied,
    /// A layer's visibility after toggling.
    LayerVisibility(bool),
    /// A layer's opacity after clamping.
    LayerOpacity(f64),
    /// Heatmap mode after toggling.
    HeatmapMode(bool),
    /// Result of a comparison toggle.
    Comparison(ToggleOutcome),
}

/// Errors returned by [`Dashboard::apply`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    /// A weight change was rejected.
    #[error(transparent)]
    Weight(#[from] WeightError),
    /// A layer change referenced an unknown layer.
    #[error(transparent)]
    Layer(#[from] LayerError),
}

/// Session state with reducer-style mutation.
///
/// # Examples
/// ```
/// use siting_core::{ActionOutcome, Dashboard, DashboardAction};
///
/// # fn main() -> Result<(), siting_core::DashboardError> {
/// let mut dashboard = Dashboard::default();
/// let outcome = dashboard.apply(DashboardAction::ToggleLayer { id: "landuse".into() })?;
/// assert_eq!(outcome, ActionOutcome::LayerVisibility(true));
/// assert_eq!(dashboard.layers().list_visible().len(), 6);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    weights: WeightConfig,
    layers: LayerState,
    filter: FilterCriteria,
    comparison: ComparisonSet,
    selected_site: Option<String>,
    heatmap_mode: bool,
    heatmap_settings: HeatmapSettings,
}

impl Dashboard {
    /// Start from explicit weights and layers.
    #[must_use]
    pub fn new(weights: WeightConfig, layers: LayerState) -> Self {
        Self {
            weights,
            layers,
            ..Self::default()
        }
    }

    /// Override heatmap density while returning `self` for chaining.
    #[must_use]
    pub fn with_heatmap_settings(mut self, settings: HeatmapSettings) -> Self {
        self.heatmap_settings = settings;
        self
    }

    /// Apply one action.
    ///
    /// # Errors
    /// Returns [`DashboardError`] when the action is rejected; the dashboard is
    /// left exactly as it was.
    pub fn apply(&mut self, action: DashboardAction) -> Result<ActionOutcome, DashboardError> {
        log::debug!("applying {action:?}");
        let outcome = match action {
            DashboardAction::SetWeight { criterion, value } => {
                self.weights.set_weight(criterion, value)?;
                ActionOutcome::Applied
            }
            DashboardAction::ReplaceWeights(config) => {
                self.weights.replace_all(config)?;
                ActionOutcome::Applied
            }
            DashboardAction::UpdateWeights(update) => {
                self.weights.update(&update)?;
                ActionOutcome::Applied
            }
            DashboardAction::ToggleLayer { id } => {
                ActionOutcome::LayerVisibility(self.layers.toggle_visibility(&id)?)
            }
            DashboardAction::SetLayerOpacity { id, opacity } => {
                ActionOutcome::LayerOpacity(self.layers.set_opacity(&id, opacity)?)
            }
            DashboardAction::SelectSite(id) => {
                self.selected_site = id;
                ActionOutcome::Applied
            }
            DashboardAction::ToggleHeatmapMode => {
                self.heatmap_mode = !self.heatmap_mode;
                ActionOutcome::HeatmapMode(self.heatmap_mode)
            }
            DashboardAction::SetFilter(criteria) => {
                self.filter = criteria;
                ActionOutcome::Applied
            }
            DashboardAction::ToggleComparison { id } => {
                ActionOutcome::Comparison(self.comparison.toggle(&id))
            }
            DashboardAction::ClearComparison => {
                self.comparison.clear();
                ActionOutcome::Applied
            }
        };
        Ok(outcome)
    }

    /// Current weights.
    #[must_use]
    pub const fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    /// Current layers.
    #[must_use]
    pub const fn layers(&self) -> &LayerState {
        &self.layers
    }

    /// Current filter.
    #[must_use]
    pub const fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    /// Current comparison selection.
    #[must_use]
    pub const fn comparison(&self) -> &ComparisonSet {
        &self.comparison
    }

    /// Currently selected site id.
    #[must_use]
    pub fn selected_site(&self) -> Option<&str> {
        self.selected_site.as_deref()
    }

    /// Report whether heatmap rendering is active.
    #[must_use]
    pub const fn is_heatmap_mode(&self) -> bool {
        self.heatmap_mode
    }

    /// Heatmap density used by [`Dashboard::heatmap`].
    #[must_use]
    pub const fn heatmap_settings(&self) -> HeatmapSettings {
        self.heatmap_settings
    }

    /// Sites passing the current filter, scored under the current weights.
    #[must_use]
    pub fn scored_sites<'a>(&self, sites: &'a [SiteAttributes]) -> Vec<ScoredSite<'a>> {
        filter_and_rank(sites, &self.filter, &self.weights)
    }

    /// Heatmap points for the filtered sites; empty unless heatmap mode is on.
    #[must_use]
    pub fn heatmap<R>(&self, sites: &[SiteAttributes], rng: &mut R) -> Vec<HeatmapPoint>
    where
        R: Rng + ?Sized,
    {
        if !self.heatmap_mode {
            return Vec::new();
        }
        let settings = self.heatmap_settings;
        synthesize_heatmap(
            &self.scored_sites(sites),
            settings.points_per_site,
            settings.spread,
            rng,
        )
    }
}
