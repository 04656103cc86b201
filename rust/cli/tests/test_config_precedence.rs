mod helpers;

use helpers::{clear_config_env, run, run_with_env};
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_config_env();
    let res = run(&["cfg"]);
    assert_eq!(res.exit_code, 0);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["format"]["value"], "text");
    assert_eq!(json["format"]["source"], "default");
    assert_eq!(json["show_zero"]["value"], true);
    assert_eq!(json["show_zero"]["source"], "default");
}

#[test]
#[serial]
fn file_then_env_then_flag() {
    clear_config_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = \"json\"").unwrap();
    let path = file.path().to_string_lossy().into_owned();

    // file alone: json
    let res = run_with_env(
        &["score", "--dice", "1,1,1,1,1", "--rule", "ones"],
        &[("YAHTZEE_CONFIG", path.as_str())],
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["points"], 5);

    // env beats file
    let res = run_with_env(
        &["score", "--dice", "1,1,1,1,1", "--rule", "ones"],
        &[("YAHTZEE_CONFIG", path.as_str()), ("YAHTZEE_FORMAT", "text")],
    );
    assert!(res.stdout.starts_with("ones"));

    // flag beats env
    let res = run_with_env(
        &["score", "--dice", "1,1,1,1,1", "--rule", "ones", "--format", "json"],
        &[("YAHTZEE_FORMAT", "text")],
    );
    assert!(serde_json::from_str::<Value>(&res.stdout).is_ok());
}

#[test]
#[serial]
fn show_zero_hides_empty_categories() {
    clear_config_env();
    let res = run_with_env(
        &["score", "--dice", "6,6,6,6,6"],
        &[("YAHTZEE_SHOW_ZERO", "false")],
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("sixes"));
    assert!(res.stdout.contains("yahtzee"));
    assert!(!res.stdout.contains("full-house"));
    assert!(!res.stdout.contains("ones"));
}

#[test]
#[serial]
fn broken_config_file_fails_every_command() {
    clear_config_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = [").unwrap();
    let path = file.path().to_string_lossy().into_owned();
    let env = [("YAHTZEE_CONFIG", path.as_str())];

    let res = run_with_env(&["cfg"], &env);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid configuration"));

    let res = run_with_env(&["score", "--dice", "1,2,3,4,5"], &env);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Configuration error"));
}

#[test]
#[serial]
fn missing_config_file_is_an_error() {
    clear_config_env();
    let res = run_with_env(&["rules"], &[("YAHTZEE_CONFIG", "/nonexistent/yahtzee.toml")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot read config file"));
}
