mod common;

use budget_planning_core::{config::Config, format::NegativeStyle, Horizon, PlanningError};
use common::setup_config_env;
use predicates::prelude::*;
use std::fs;

#[test]
fn save_then_load_returns_same_config() {
    let manager = setup_config_env();
    let config = Config {
        locale: "de-DE".into(),
        currency: "EUR".into(),
        emergency_fund_months: 3,
        negative_style: NegativeStyle::Parentheses,
        ..Config::default()
    };
    manager.save(&config).expect("save config");
    assert!(manager.path().exists());
    assert!(!manager.path().with_extension("json.tmp").exists());
    assert_eq!(manager.load().expect("load config"), config);
}

#[test]
fn saved_file_is_pretty_json() {
    let manager = setup_config_env();
    manager.save(&Config::default()).expect("save config");
    let raw = fs::read_to_string(manager.path()).expect("read config");
    let expected = predicate::str::contains("\"never_threshold_months\": 1200")
        .and(predicate::str::contains("\"currency\": \"USD\""));
    assert!(expected.eval(raw.as_str()));
}

#[test]
fn invalid_config_is_rejected_on_save_and_load() {
    let manager = setup_config_env();
    let bad = Config {
        never_threshold_months: 0,
        ..Config::default()
    };
    assert!(matches!(manager.save(&bad), Err(PlanningError::InvalidConfig(_))));

    fs::write(manager.path(), r#"{"currency": "EURO"}"#).expect("write config");
    assert!(matches!(manager.load(), Err(PlanningError::InvalidConfig(_))));

    fs::write(manager.path(), "not json").expect("write config");
    assert!(matches!(manager.load(), Err(PlanningError::Serde(_))));
}

#[test]
fn settings_drive_formatting_and_targets() {
    let config = Config {
        emergency_fund_months: 4,
        negative_style: NegativeStyle::Parentheses,
        ..Config::default()
    };
    let settings = config.format_settings();
    let target = config.emergency_fund_target(2500.0);
    insta::assert_snapshot!(settings.currency(target), @"$10,000.00");
    insta::assert_snapshot!(settings.currency(-250.0), @"($250.00)");
}

#[test]
fn loaded_settings_drive_projections() {
    let manager = setup_config_env();
    fs::write(
        manager.path(),
        r#"{"compounding_per_year": 4, "never_threshold_months": 60}"#,
    )
    .expect("write config");
    let config = manager.load().expect("load config");
    let quarterly = 1000.0 * (1.0f64 + 0.08 / 4.0).powf(4.0);
    assert!((config.future_value(1000.0, 8.0, 1.0) - quarterly).abs() < 1e-9);
    insta::assert_snapshot!(config.horizon_label(Horizon::Months(61)), @"Never (payment too low)");
    insta::assert_snapshot!(config.horizon_label(Horizon::Months(60)), @"5 years");
}
