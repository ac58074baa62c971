use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

/// Runs the binary inside `dir`, with the global data dir kept under it too.
fn agentspec(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("agentspec").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_DATA_HOME", dir.join("data"))
        .env_remove("AGENTSPEC_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_no_subcommand_prints_grouped_help() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Document Commands:"))
        .stdout(predicate::str::contains("share"));
}

#[test]
fn test_presets_lists_builtin_catalog() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("support-triage"))
        .stdout(predicate::str::contains("RFP / Security Questionnaire Agent"));
}

#[test]
fn test_render_preset() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .args(["md", "--example", "support-triage"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Support Triage Agent Spec\n"))
        .stdout(predicate::str::contains("- Zendesk: read ticket\n"))
        .stdout(predicate::str::contains("## Cost / Latency Budget"));
}

#[test]
fn test_render_empty_input_uses_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Agent Spec\n"))
        .stdout(predicate::str::contains("_Not specified._"))
        .stdout(predicate::str::contains("- _None listed._"));
}

#[test]
fn test_render_reads_stdin_and_applies_overrides() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .args(["render", "--input", "-", "--set", "tools=Search\\nSummarize"])
        .write_stdin(r#"{"appName": "Piped Bot", "tools": "ignored"}"#)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Piped Bot\n"))
        .stdout(predicate::str::contains("- Search\n- Summarize\n"))
        .stdout(predicate::str::contains("ignored").not());
}

#[test]
fn test_render_from_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("spec.json"),
        r#"{"objective": "Answer billing questions from the help center"}"#,
    )
    .unwrap();
    agentspec(dir.path())
        .args(["render", "-i", "spec.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Answer billing questions from the help center",
        ));
}

#[test]
fn test_unknown_example_fails() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .args(["render", "--example", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown preset: nope"));
}

#[test]
fn test_conflicting_sources_fail() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .args(["render", "--example", "sales-rfp", "--token", "jabc"])
        .assert()
        .failure();
}

#[test]
fn test_lint_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .arg("lint")
        .assert()
        .success()
        .stdout(predicate::str::contains("objective-missing"))
        .stdout(predicate::str::contains("success-metrics-missing"))
        .stdout(predicate::str::contains("findings"));
}

#[test]
fn test_lint_json_for_preset() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(agentspec(dir.path()).args(["lint", "--json", "-e", "sales-rfp"]));
    let findings: serde_json::Value = serde_json::from_str(&out).unwrap();
    let findings = findings.as_array().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["id"], "budget-missing");
}

#[test]
fn test_lint_complete_input_reports_success() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .args(["lint", "-e", "support-triage", "--set", "p95Latency=10s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No findings"));
}

#[test]
fn test_share_and_decode_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let token = stdout_of(agentspec(dir.path()).args([
        "share",
        "--token-only",
        "-e",
        "sales-rfp",
        "--set",
        "maxRetries=3",
    ]));
    let token = token.trim();
    assert!(token.starts_with('z') || token.starts_with('j'));

    let json = stdout_of(agentspec(dir.path()).args(["decode", token]));
    let input: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(input["appName"], "RFP Agent Spec");
    assert_eq!(input["maxRetries"], "3");
    assert_eq!(input.as_object().unwrap().len(), 14);
}

#[test]
fn test_share_link_uses_configured_base() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .args(["config", "share-base-url", "https://specs.example.com/app"])
        .assert()
        .success();

    let url = stdout_of(agentspec(dir.path()).args(["share", "-e", "support-triage"]));
    assert!(url.starts_with("https://specs.example.com/app?s="));

    agentspec(dir.path())
        .args(["render", "--url", url.trim()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Support Triage Agent Spec\n"));
}

#[test]
fn test_share_warns_when_link_is_long() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .args(["config", "max-url-length", "40"])
        .assert()
        .success();
    agentspec(dir.path())
        .args(["share", "-e", "support-triage"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("http://localhost:3000/?s="))
        .stderr(predicate::str::contains("above the limit of 40"));
}

#[test]
fn test_url_with_broken_token_falls_back_to_example() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .args(["render", "--url", "https://x.dev/?s=broken&example=sales-rfp"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# RFP Agent Spec\n"))
        .stderr(predicate::str::contains("could not be decoded"));
}

#[test]
fn test_decode_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .args(["decode", "not-a-valid-token!!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_export_respects_force() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .args(["export", "-e", "support-triage", "--dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let path = dir.path().join("out").join("support-triage-agent-spec.md");
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("# Support Triage Agent Spec\n"));

    agentspec(dir.path())
        .args(["export", "-e", "support-triage", "--dir", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    agentspec(dir.path())
        .args(["export", "-e", "support-triage", "--dir", "out", "--force"])
        .assert()
        .success();
}

#[test]
fn test_template_is_a_complete_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let json = stdout_of(agentspec(dir.path()).arg("template"));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 14);
    assert!(object.values().all(|v| v == ""));
}

#[test]
fn test_config_show_set_and_reject() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max-url-length = 2000"));

    agentspec(dir.path())
        .args(["config", "max-url-length", "1200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max-url-length set to 1200"));
    assert!(dir.path().join(".agentspec/config.json").exists());

    agentspec(dir.path())
        .args(["config", "max-url-length"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1200"));

    agentspec(dir.path())
        .args(["config", "max-url-length", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("whole number"));
}

#[test]
fn test_global_config_is_separate() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .args(["--global", "config", "max-url-length", "99"])
        .assert()
        .success();
    agentspec(dir.path())
        .args(["config", "max-url-length"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2000"));
    agentspec(dir.path())
        .args(["config", "max-url-length", "--global"])
        .assert()
        .success()
        .stdout(predicate::str::contains("99"));
}

#[test]
fn test_file_catalog_from_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("presets.json"),
        r#"[{"id": "house", "label": "House Style", "data": {"appName": "House Bot"}}]"#,
    )
    .unwrap();
    agentspec(dir.path())
        .args(["config", "catalog-path", "presets.json"])
        .assert()
        .success();

    agentspec(dir.path())
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("house"))
        .stdout(predicate::str::contains("support-triage").not());

    agentspec(dir.path())
        .args(["render", "-e", "house"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# House Bot\n"));
}

#[test]
fn test_broken_catalog_path_only_affects_preset_lookups() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .args(["config", "catalog-path", "missing.json"])
        .assert()
        .success();

    agentspec(dir.path())
        .arg("presets")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.json"));
    agentspec(dir.path())
        .args(["render", "-e", "support-triage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.json"));

    agentspec(dir.path())
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Agent Spec\n"));
    agentspec(dir.path()).arg("template").assert().success();
    agentspec(dir.path())
        .args(["decode", "zzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.json").not());

    agentspec(dir.path())
        .args(["config", "catalog-path", ""])
        .assert()
        .success();
    agentspec(dir.path())
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("support-triage"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    agentspec(dir.path())
        .args(["-v", "decode", "zzzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DEBUG"));
}
