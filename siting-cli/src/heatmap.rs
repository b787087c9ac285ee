//! Heatmap command implementation for the siting CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use siting_core::{
    HeatmapPoint, HeatmapSettings, MAX_POINTS_PER_SITE, SiteAttributes, filter_and_rank,
    synthesize_heatmap,
};
use std::io::Write;

use crate::catalog::{load_catalog, require_existing, write_json};
use crate::{ARG_CATALOG, CliError, ENV_HEATMAP_CATALOG, ScoringConfig};

scoring_args! {
    /// CLI arguments for the `heatmap` subcommand.
    #[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
    #[command(
        name = "heatmap",
        long_about = "Expand every site matching the filter into a cluster of \
                     randomly displaced points carrying the site's score. Pass \
                     --seed for reproducible output.",
        about = "Synthesise heatmap points for catalog sites"
    )]
    #[ortho_config(prefix = "SITING")]
    pub(crate) struct HeatmapArgs {
        /// Path to a JSON array of sites.
        #[arg(value_name = "path")]
        #[serde(default)]
        pub(crate) catalog: Option<Utf8PathBuf>,
        /// Points generated around each site (default 25).
        #[arg(long, value_name = "count")]
        #[serde(default)]
        pub(crate) points_per_site: Option<usize>,
        /// Side of the square each cluster is drawn from, in degrees (default 1.5).
        #[arg(long, value_name = "degrees")]
        #[serde(default)]
        pub(crate) spread: Option<f64>,
        /// Seed for reproducible output; entropy is used when absent.
        #[arg(long, value_name = "seed")]
        #[serde(default)]
        pub(crate) seed: Option<u64>,
    }
}

impl HeatmapArgs {
    pub(crate) fn into_config(self) -> Result<HeatmapConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        HeatmapConfig::try_from(merged)
    }
}

/// Resolved `heatmap` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HeatmapConfig {
    /// Path to the JSON catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Weights and filter to apply.
    pub(crate) scoring: ScoringConfig,
    /// Cluster density.
    pub(crate) settings: HeatmapSettings,
    /// Seed for the point generator.
    pub(crate) seed: Option<u64>,
}

impl TryFrom<HeatmapArgs> for HeatmapConfig {
    type Error = CliError;

    fn try_from(args: HeatmapArgs) -> Result<Self, Self::Error> {
        let scoring = args.scoring()?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_HEATMAP_CATALOG,
        })?;
        let defaults = HeatmapSettings::default();
        let points_per_site = args.points_per_site.unwrap_or(defaults.points_per_site);
        if points_per_site > MAX_POINTS_PER_SITE {
            return Err(CliError::ExcessiveDensity {
                requested: points_per_site,
                max: MAX_POINTS_PER_SITE,
            });
        }
        Ok(Self {
            catalog,
            scoring,
            settings: HeatmapSettings {
                points_per_site,
                spread: args.spread.unwrap_or(defaults.spread),
            },
            seed: args.seed,
        })
    }
}

pub(crate) fn run_heatmap(args: HeatmapArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_heatmap_with(args, &mut stdout)
}

pub(crate) fn run_heatmap_with(args: HeatmapArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_heatmap(&config, writer)
}

pub(crate) fn execute_heatmap(
    config: &HeatmapConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    require_existing(&config.catalog)?;
    let sites = load_catalog(&config.catalog)?;
    let points = synthesize(&sites, config);
    write_json(writer, &points)
}

fn synthesize(sites: &[SiteAttributes], config: &HeatmapConfig) -> Vec<HeatmapPoint> {
    let scoring = &config.scoring;
    let scored = filter_and_rank(sites, &scoring.filter, &scoring.weights);
    let HeatmapSettings {
        points_per_site,
        spread,
    } = config.settings;
    match config.seed {
        Some(seed) => synthesize_heatmap(
            &scored,
            points_per_site,
            spread,
            &mut ChaCha8Rng::seed_from_u64(seed),
        ),
        None => synthesize_heatmap(&scored, points_per_site, spread, &mut rand::thread_rng()),
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<HeatmapConfig, CliError> {
    let merged = HeatmapArgs::merge_from_layers(layers).map_err(CliError::from)?;
    HeatmapConfig::try_from(merged)
}
