//! Rank command implementation for the siting CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use siting_core::{filter_and_rank, rank_by_score};
use std::io::Write;

use crate::catalog::{load_catalog, require_existing, write_json};
use crate::{ARG_CATALOG, CliError, ENV_RANK_CATALOG, ScoringConfig};

scoring_args! {
    /// CLI arguments for the `rank` subcommand.
    #[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
    #[command(
        name = "rank",
        long_about = "Score every site in a JSON catalog, keep those matching the \
                     filter and print them ordered by descending score. Weights \
                     default to the standard configuration; any flag overrides a \
                     single criterion.",
        about = "Rank catalog sites by suitability"
    )]
    #[ortho_config(prefix = "SITING")]
    pub(crate) struct RankArgs {
        /// Path to a JSON array of sites.
        #[arg(value_name = "path")]
        #[serde(default)]
        pub(crate) catalog: Option<Utf8PathBuf>,
        /// Keep only the highest-scoring sites.
        #[arg(long, value_name = "count")]
        #[serde(default)]
        pub(crate) top: Option<usize>,
    }
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the JSON catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Weights and filter to apply.
    pub(crate) scoring: ScoringConfig,
    /// Optional cap on the number of sites written.
    pub(crate) top: Option<usize>,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let scoring = args.scoring()?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_RANK_CATALOG,
        })?;
        Ok(Self {
            catalog,
            scoring,
            top: args.top,
        })
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_rank(&config, writer)
}

pub(crate) fn execute_rank(config: &RankConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    require_existing(&config.catalog)?;
    let sites = load_catalog(&config.catalog)?;
    let scoring = &config.scoring;
    let mut ranked = filter_and_rank(&sites, &scoring.filter, &scoring.weights);
    rank_by_score(&mut ranked);
    if let Some(limit) = config.top {
        ranked.truncate(limit);
    }
    write_json(writer, &ranked)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
