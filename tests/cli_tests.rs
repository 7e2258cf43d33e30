//! Tests for the runstate CLI
//!
//! The binary is the "separate process per invocation" story told for
//! real: every command below is a fresh process that only shares the
//! sandbox's cache directory with the others.

mod common;

use common::CacheSandbox;

#[test]
fn incr_accumulates_and_get_reads_back() {
    let sandbox = CacheSandbox::new();

    assert_eq!(sandbox.run_cli_success(&["incr", "p", "runs", "2"]), "2\n");
    assert_eq!(sandbox.run_cli_success(&["incr", "p", "runs", "3"]), "5\n");
    assert_eq!(sandbox.run_cli_success(&["get", "p", "runs"]), "5\n");
    assert_eq!(sandbox.read_raw("p"), r#"{"runs":5}"#);
}

#[test]
fn incr_defaults_to_one() {
    let sandbox = CacheSandbox::new();
    assert_eq!(sandbox.run_cli_success(&["incr", "p", "runs"]), "1\n");
}

#[test]
fn get_on_unknown_key_prints_zero() {
    let sandbox = CacheSandbox::new();
    assert_eq!(sandbox.run_cli_success(&["get", "p", "never"]), "0\n");
    assert!(!sandbox.cache_file("p").exists());
}

#[test]
fn doc_set_then_doc_get_round_trips() {
    let sandbox = CacheSandbox::new();

    sandbox.run_cli_success(&["doc", "set", "p", r#"{"count":1}"#]);
    assert_eq!(
        sandbox.run_cli_success(&["doc", "get", "p"]),
        "{\"count\":1}\n"
    );
}

#[test]
fn doc_get_heals_corruption_to_default() {
    let sandbox = CacheSandbox::new();

    sandbox.run_cli_success(&["doc", "set", "p", r#"{"count":1}"#]);
    sandbox.write_raw("p", "{corrupt");

    let output =
        sandbox.run_cli_success(&["doc", "get", "p", "--default", r#"{"count":1}"#]);
    assert_eq!(output, "{\"count\":1}\n");
}

#[test]
fn path_resolves_into_cache_dir() {
    let sandbox = CacheSandbox::new();
    let output = sandbox.run_cli_success(&["path", "p"]);
    assert_eq!(
        output.trim_end(),
        sandbox.cache_file("p").display().to_string()
    );
}

#[test]
fn invalid_namespace_exits_with_code_2() {
    let sandbox = CacheSandbox::new();
    let (code, stderr) = sandbox.run_cli_failure(&["get", "a/b", "runs"]);
    assert_eq!(code, Some(2));
    assert!(stderr.contains("Invalid namespace"), "stderr: {stderr}");
}

#[test]
fn doc_set_rejects_non_object_with_code_3() {
    let sandbox = CacheSandbox::new();

    let (code, stderr) = sandbox.run_cli_failure(&["doc", "set", "p", "[1,2]"]);
    assert_eq!(code, Some(3));
    assert!(stderr.contains("Invalid document"), "stderr: {stderr}");

    let (code, _) = sandbox.run_cli_failure(&["doc", "set", "p", "{not json"]);
    assert_eq!(code, Some(3));
}

#[test]
fn list_and_clear_manage_namespaces() {
    let sandbox = CacheSandbox::new();

    sandbox.run_cli_success(&["incr", "beta", "runs"]);
    sandbox.run_cli_success(&["incr", "alpha", "runs"]);
    assert_eq!(sandbox.run_cli_success(&["list"]), "alpha\nbeta\n");

    sandbox.run_cli_success(&["clear", "alpha"]);
    assert_eq!(sandbox.run_cli_success(&["list"]), "beta\n");

    // Clearing again is a quiet no-op.
    sandbox.run_cli_success(&["clear", "alpha"]);
}

#[test]
fn cache_dir_flag_overrides_environment() {
    let sandbox = CacheSandbox::new();
    let other = CacheSandbox::new();
    let flag_dir = other.path().display().to_string();

    sandbox.run_cli_success(&["incr", "p", "runs", "--cache-dir", &flag_dir]);

    assert!(!sandbox.cache_file("p").exists());
    assert!(other.cache_file("p").exists());
}
