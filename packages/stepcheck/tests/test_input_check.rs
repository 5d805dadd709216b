//! End-to-end checks driving the full pipeline against fixture steps:
//! - Matching source and manifest
//! - Drift in either direction
//! - Duplicate tags
//! - Broken source as a fatal precondition

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use stepcheck::config::CheckPaths;
use stepcheck::errors::CheckError;
use stepcheck::pipeline::run_check;
use stepcheck::{Result, Verdict};

fn check(go_source: &str, step_yml: &str) -> Result<Verdict> {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("main.go"), go_source).expect("write main.go");
    fs::write(dir.path().join("step.yml"), step_yml).expect("write step.yml");
    run_check(&CheckPaths::resolve(Some(dir.path())))
}

fn matched_keys(entries: &[stepcheck::KeyMatch]) -> Vec<(&str, bool)> {
    entries
        .iter()
        .map(|entry| (entry.key.as_str(), entry.matched))
        .collect()
}

#[test]
fn matching_inputs_pass_in_both_directions() {
    let verdict = check(
        r#"
package main

type Config struct {
    APIKey  string `env:"API_KEY"`
    Timeout int    `env:"TIMEOUT,required"`
}

func main() {}
"#,
        r#"
title: Example step
inputs:
- API_KEY: ""
  opts:
    title: API key
    is_required: true
- TIMEOUT: "30"
"#,
    )
    .expect("check runs");

    assert!(verdict.passed());
    assert_eq!(
        matched_keys(&verdict.source_view),
        vec![("API_KEY", true), ("TIMEOUT", true)]
    );
    assert_eq!(
        matched_keys(&verdict.manifest_view),
        vec![("API_KEY", true), ("TIMEOUT", true)]
    );
}

#[test]
fn source_only_key_fails_the_source_view() {
    let verdict = check(
        r#"
package main

type Config struct {
    RetryCount int `env:"RETRY_COUNT"`
}

func main() {}
"#,
        "title: Example step\n",
    )
    .expect("check runs");

    assert!(!verdict.passed());
    assert_eq!(
        matched_keys(&verdict.source_view),
        vec![("RETRY_COUNT", false)]
    );
    assert_eq!(matched_keys(&verdict.manifest_view), Vec::<(&str, bool)>::new());
    assert_eq!(verdict.missing_from_manifest(), vec!["RETRY_COUNT"]);
}

#[test]
fn manifest_only_key_fails_the_manifest_view() {
    let verdict = check(
        r#"
package main

type Config struct {
    APIKey string `env:"API_KEY"`
}

func main() {}
"#,
        r#"
inputs:
- API_KEY: ""
- DEBUG: "false"
"#,
    )
    .expect("check runs");

    assert!(!verdict.passed());
    assert_eq!(matched_keys(&verdict.source_view), vec![("API_KEY", true)]);
    assert_eq!(
        matched_keys(&verdict.manifest_view),
        vec![("API_KEY", true), ("DEBUG", false)]
    );
    assert_eq!(verdict.missing_from_source(), vec!["DEBUG"]);
}

#[test]
fn broken_source_aborts_before_comparison() {
    let result = check(
        "package main\n\nfunc {\n",
        r#"
inputs:
- API_KEY: ""
"#,
    );

    assert!(matches!(result.unwrap_err(), CheckError::Parse(_)));
}

#[test]
fn missing_manifest_aborts() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("main.go"), "package main\n\nfunc main() {}\n")
        .expect("write main.go");

    let result = run_check(&CheckPaths::resolve(Some(dir.path())));
    assert!(matches!(result.unwrap_err(), CheckError::Manifest(_)));
}

#[test]
fn duplicate_tag_matches_a_single_declaration() {
    let verdict = check(
        r#"
package main

type Config struct {
    Primary   string `env:"API_KEY"`
    Secondary string `env:"API_KEY"`
}

func main() {}
"#,
        r#"
inputs:
- API_KEY: ""
"#,
    )
    .expect("check runs");

    // Never deduplicated: both occurrences are classified, both match.
    assert!(verdict.passed());
    assert_eq!(
        matched_keys(&verdict.source_view),
        vec![("API_KEY", true), ("API_KEY", true)]
    );
    assert_eq!(matched_keys(&verdict.manifest_view), vec![("API_KEY", true)]);
}
