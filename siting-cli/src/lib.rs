//! Command-line interface for scoring site catalogs offline.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use siting_core::{FilterCriteria, MAX_SCORE, WeightConfig, WeightUpdate};

#[macro_use]
mod args;
mod catalog;
mod error;
mod fs;
mod heatmap;
mod rank;

pub use error::CliError;

use heatmap::HeatmapArgs;
use rank::RankArgs;

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ENV_RANK_CATALOG: &str = "SITING_CMDS_RANK_CATALOG";
pub(crate) const ENV_HEATMAP_CATALOG: &str = "SITING_CMDS_HEATMAP_CATALOG";

/// Run the siting CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => rank::run_rank(args),
        Command::Heatmap(args) => heatmap::run_heatmap(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "siting",
    about = "Score, filter and rank candidate sites from a JSON catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the filtered sites ranked by suitability score.
    Rank(RankArgs),
    /// Write synthetic heatmap points around the filtered sites.
    Heatmap(HeatmapArgs),
}

/// Weights and filter resolved from the merged configuration layers.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoringConfig {
    pub(crate) weights: WeightConfig,
    pub(crate) filter: FilterCriteria,
}

/// Unresolved filter fields shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub(crate) struct FilterFields {
    pub(crate) region: Option<String>,
    pub(crate) min_score: Option<u8>,
    pub(crate) max_score: Option<u8>,
    pub(crate) policy_zone: Option<String>,
    pub(crate) require_infrastructure: Option<bool>,
    pub(crate) search: Option<String>,
}

impl ScoringConfig {
    /// Apply weight overrides to the default configuration and build the
    /// filter. An unbalanced total is allowed; the core logs a warning.
    pub(crate) fn resolve(update: &WeightUpdate, fields: FilterFields) -> Result<Self, CliError> {
        let mut weights = WeightConfig::default();
        weights.update(update)?;
        let filter = FilterCriteria {
            region: fields.region,
            min_score: fields.min_score.unwrap_or(0),
            max_score: fields.max_score.unwrap_or(MAX_SCORE),
            policy_zone: fields.policy_zone,
            require_infrastructure: fields.require_infrastructure.unwrap_or(false),
            search: fields.search,
        };
        if filter.is_inverted() {
            log::warn!(
                "minimum score {} exceeds maximum {}; no sites will match",
                filter.min_score,
                filter.max_score
            );
        }
        Ok(Self { weights, filter })
    }
}

#[cfg(test)]
mod tests;
