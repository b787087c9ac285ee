//! Focused unit tests covering rank CLI configuration and output.

use super::helpers::{CatalogWorkspace, parse_output, write_utf8};
use super::*;
use crate::rank::{RankConfig, config_from_layers_for_test, execute_rank};
use rstest::{fixture, rstest};
use siting_core::{Criterion, WeightError};

#[fixture]
fn workspace() -> CatalogWorkspace {
    CatalogWorkspace::new()
}

fn args_for(workspace: &CatalogWorkspace) -> RankArgs {
    RankArgs {
        catalog: Some(workspace.catalog()),
        ..RankArgs::default()
    }
}

fn ranked_ids(config: &RankConfig) -> Vec<String> {
    let mut buffer = Vec::new();
    execute_rank(config, &mut buffer).expect("rank should succeed");
    parse_output(&buffer)
        .as_array()
        .expect("output is an array")
        .iter()
        .map(|entry| entry["id"].as_str().expect("id is a string").to_owned())
        .collect()
}

#[rstest]
fn converting_rank_without_catalog_errors() {
    let err = RankConfig::try_from(RankArgs::default()).expect_err("missing catalog should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(env, ENV_RANK_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn negative_weight_override_is_rejected(workspace: CatalogWorkspace) {
    let args = RankArgs {
        wind: Some(-3.0),
        ..args_for(&workspace)
    };
    let err = RankConfig::try_from(args).expect_err("negative weight should error");
    match err {
        CliError::InvalidWeight(WeightError::InvalidWeight { criterion, value }) => {
            assert_eq!(criterion, Criterion::Wind);
            assert_eq!(value, -3.0);
        }
        other => panic!("expected InvalidWeight, found {other:?}"),
    }
}

#[rstest]
fn unset_flags_fall_back_to_defaults(workspace: CatalogWorkspace) {
    let config = RankConfig::try_from(args_for(&workspace)).expect("config should build");
    assert_eq!(config.scoring.weights, siting_core::WeightConfig::default());
    assert_eq!(config.scoring.filter, siting_core::FilterCriteria::default());
    assert_eq!(config.top, None);
}

#[rstest]
fn ranks_whole_catalog_by_descending_score(workspace: CatalogWorkspace) {
    let config = RankConfig::try_from(args_for(&workspace)).expect("config should build");
    assert_eq!(ranked_ids(&config), ["2", "3", "1", "4", "5", "6"]);
}

#[rstest]
#[case::top_three(RankArgs { top: Some(3), ..RankArgs::default() }, vec!["2", "3", "1"])]
#[case::region(RankArgs { region: Some("Gujarat".into()), ..RankArgs::default() }, vec!["2"])]
#[case::zone(RankArgs { policy_zone: Some("SEZ".into()), ..RankArgs::default() }, vec!["3", "1", "5"])]
#[case::infrastructure(
    RankArgs { require_infrastructure: Some(true), ..RankArgs::default() },
    vec!["2", "3", "1", "4", "5"],
)]
#[case::search(RankArgs { search: Some("industrial".into()), ..RankArgs::default() }, vec!["3", "5"])]
#[case::range(
    RankArgs { min_score: Some(70), max_score: Some(79), ..RankArgs::default() },
    vec!["3", "1", "4"],
)]
#[case::inverted(
    RankArgs { min_score: Some(80), max_score: Some(20), ..RankArgs::default() },
    vec![],
)]
fn filters_and_limits_apply(
    workspace: CatalogWorkspace,
    #[case] overrides: RankArgs,
    #[case] expected: Vec<&str>,
) {
    let args = RankArgs {
        catalog: Some(workspace.catalog()),
        ..overrides
    };
    let config = RankConfig::try_from(args).expect("config should build");
    assert_eq!(ranked_ids(&config), expected);
}

#[rstest]
fn reweighting_changes_the_order(workspace: CatalogWorkspace) {
    let args = RankArgs {
        solar: Some(100.0),
        wind: Some(0.0),
        water: Some(0.0),
        industry_proximity: Some(0.0),
        grid_proximity: Some(0.0),
        land_availability: Some(0.0),
        top: Some(2),
        ..args_for(&workspace)
    };
    let config = RankConfig::try_from(args).expect("config should build");
    assert_eq!(ranked_ids(&config), ["1", "2"]);
}

#[rstest]
fn missing_catalog_file_is_reported(workspace: CatalogWorkspace) {
    let missing = workspace.root().join("absent.json");
    let args = RankArgs {
        catalog: Some(missing.clone()),
        ..RankArgs::default()
    };
    let config = RankConfig::try_from(args).expect("config should build");
    let err = execute_rank(&config, &mut Vec::new()).expect_err("missing file should error");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(path, missing);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn directory_catalog_is_reported(workspace: CatalogWorkspace) {
    let dir = workspace.root().join("catalog.d");
    std::fs::create_dir(dir.as_std_path()).expect("catalog directory");
    let args = RankArgs {
        catalog: Some(dir.clone()),
        ..RankArgs::default()
    };
    let config = RankConfig::try_from(args).expect("config should build");
    let err = execute_rank(&config, &mut Vec::new()).expect_err("directory should error");
    match err {
        CliError::SourcePathNotFile { path, .. } => assert_eq!(path, dir),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn malformed_catalog_is_reported(workspace: CatalogWorkspace) {
    let broken = workspace.root().join("broken.json");
    write_utf8(&broken, b"[{ not valid json");
    let args = RankArgs {
        catalog: Some(broken.clone()),
        ..RankArgs::default()
    };
    let config = RankConfig::try_from(args).expect("config should build");
    let err = execute_rank(&config, &mut Vec::new()).expect_err("bad json should error");
    match err {
        CliError::ParseCatalog { path, .. } => assert_eq!(path, broken),
        other => panic!("expected ParseCatalog, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "min_score": "high" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence(workspace: CatalogWorkspace) {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "solar": 40.0,
            "region": "Ladakh",
            "top": 5,
        }),
        None,
    );
    composer.push_environment(json!({
        "catalog": workspace.catalog().as_str(),
        "region": "Gujarat",
    }));
    composer.push_cli(json!({
        "region": "Rajasthan",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.catalog, workspace.catalog());
    assert_eq!(config.scoring.filter.region.as_deref(), Some("Rajasthan"));
    assert_eq!(config.scoring.weights.weight(Criterion::Solar), 40.0);
    assert_eq!(config.top, Some(5));
}
