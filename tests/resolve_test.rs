//! Resolution properties across every selector combination.

use bundle_config::config::{resolve, Finalizer};
use bundle_config::environment::Environment;
use bundle_config::rules::RuleKind;
use std::path::PathBuf;

const ENVIRONMENTS: [Option<&str>; 6] = [
    Some("dev"),
    Some("stg"),
    Some("prod"),
    Some(""),
    Some("unknown"),
    None,
];

const MODES: [Option<&str>; 5] = [
    Some("development"),
    Some("production"),
    Some(""),
    Some("unknown"),
    None,
];

fn expected_environment(selector: Option<&str>) -> Environment {
    match selector {
        Some("stg") => Environment::Stg,
        Some("prod") => Environment::Prod,
        _ => Environment::Dev,
    }
}

#[test]
fn output_directory_and_public_path_match_environment() {
    for env in ENVIRONMENTS {
        for mode in MODES {
            let config = resolve(env, mode);
            let expected = expected_environment(env);

            assert_eq!(config.environment, expected, "env {:?}", env);
            assert_eq!(config.output.path, expected.output_directory());
            assert_eq!(config.output.public_path, expected.public_path());
            assert_eq!(config.manifest.public_path, expected.public_path());
        }
    }
}

#[test]
fn output_directories_are_the_known_three() {
    let known: Vec<PathBuf> = ["bundles/dev", "bundles/stg", "bundles/prod"]
        .iter()
        .map(PathBuf::from)
        .collect();

    for env in ENVIRONMENTS {
        let config = resolve(env, None);
        assert!(known.contains(&config.output.path), "env {:?}", env);
    }
}

#[test]
fn script_template_hashes_only_in_production() {
    for mode in MODES {
        for env in ENVIRONMENTS {
            let config = resolve(env, mode);
            let production = mode == Some("production");
            assert_eq!(config.output.filename.has_hash(), production, "mode {:?}", mode);
            assert_eq!(config.output.chunk_filename.has_hash(), production);
            assert_eq!(config.style_extraction.filename.has_hash(), production);
            assert_eq!(config.asset_filename.has_hash(), production);
        }
    }
}

#[test]
fn exactly_four_rules_in_order() {
    for env in ENVIRONMENTS {
        for mode in MODES {
            let config = resolve(env, mode);
            let kinds: Vec<RuleKind> = config.rules().iter().map(|r| r.kind).collect();
            assert_eq!(
                kinds,
                vec![RuleKind::Script, RuleKind::Style, RuleKind::Font, RuleKind::Image]
            );
        }
    }
}

#[test]
fn font_and_image_share_asset_template() {
    for mode in MODES {
        let config = resolve(None, mode);
        let font = config.rules().get(RuleKind::Font).unwrap().resource().unwrap();
        let image = config.rules().get(RuleKind::Image).unwrap().resource().unwrap();

        assert_eq!(font.template, image.template);
        assert_eq!(font.template, config.asset_filename);
        assert_eq!(font.filename().as_str(), format!("fonts/{}", config.asset_filename));
        assert_eq!(image.filename().as_str(), format!("images/{}", config.asset_filename));
    }
}

#[test]
fn manifest_filename_ignores_mode() {
    for env in ENVIRONMENTS {
        let names: Vec<String> = MODES
            .iter()
            .map(|mode| resolve(env, *mode).manifest.filename)
            .collect();
        let expected = format!("webpack-bundle.{}.json", expected_environment(env));
        assert!(names.iter().all(|n| *n == expected), "env {:?}", env);
    }
}

#[test]
fn prod_production_scenario() {
    let config = resolve(Some("prod"), Some("production"));

    assert_eq!(config.output.path, PathBuf::from("bundles/prod"));
    assert_eq!(config.output.public_path, "https://example.com/static/bundles/prod/");
    assert_eq!(config.output.filename.as_str(), "[chunkhash]/[name].js");
    assert_eq!(config.output.chunk_filename.as_str(), "[chunkhash]/[name].[id].js");
    assert_eq!(config.style_extraction.filename.as_str(), "[chunkhash]/[name].css");
    assert_eq!(
        config.style_extraction.chunk_filename.as_str(),
        "[chunkhash]/[name].[id].css"
    );
    assert_eq!(config.asset_filename.as_str(), "[path][name].[contenthash].[ext]");
    assert_eq!(config.manifest.filename, "webpack-bundle.prod.json");
}

#[test]
fn defaults_scenario() {
    let config = resolve(None, None);

    assert_eq!(config.output.path, PathBuf::from("bundles/dev"));
    assert_eq!(config.output.public_path, "http://127.0.0.1:8000/static/bundles/dev/");
    assert_eq!(config.output.filename.as_str(), "[name].js");
    assert_eq!(config.output.chunk_filename.as_str(), "[name].js");
    assert_eq!(config.style_extraction.filename.as_str(), "[name].css");
    assert_eq!(config.style_extraction.chunk_filename.as_str(), "[name].[id].css");
    assert_eq!(config.asset_filename.as_str(), "[path][name].[ext]");
    assert_eq!(config.manifest.filename, "webpack-bundle.dev.json");
}

#[test]
fn stg_production_scenario() {
    let config = resolve(Some("stg"), Some("production"));

    assert_eq!(config.output.path, PathBuf::from("bundles/stg"));
    assert_eq!(
        config.output.public_path,
        "https://staging.example.com/static/bundles/stg/"
    );
    assert_eq!(config.output.filename.as_str(), "[chunkhash]/[name].js");
    assert_eq!(config.manifest.filename, "webpack-bundle.stg.json");
}

#[test]
fn common_settings_are_fixed() {
    let config = resolve(Some("stg"), None);

    assert_eq!(config.entry, "./index.js");
    assert_eq!(config.devtool, "source-map");
    assert!(matches!(config.finalizers()[0], Finalizer::EmitManifest(_)));
    assert!(matches!(config.finalizers()[1], Finalizer::ExtractStyles(_)));
}

#[test]
fn script_rule_excludes_dependencies() {
    let config = resolve(None, None);

    assert_eq!(
        config.rule_for("src/app.js").map(|r| r.kind),
        Some(RuleKind::Script)
    );
    assert!(config.rule_for("node_modules/react/index.js").is_none());
    assert_eq!(
        config.rule_for("fonts/fa.ttf?v=4.7.0").map(|r| r.kind),
        Some(RuleKind::Font)
    );
    assert_eq!(config.rule_for("img/logo.svg").map(|r| r.kind), Some(RuleKind::Image));
    assert!(config.rule_for("img/photo.gif").is_none());
}
