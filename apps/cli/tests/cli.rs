use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn bkit() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_bkit"));
    command.env_remove("RUST_LOG");
    command
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn no_arguments_prints_help() {
    bkit().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn check_accepts_valid_message() {
    bkit()
        .args(["check", &fixture("valid_message.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid message with 3 block(s)"));
}

#[test]
fn check_reports_every_violation() {
    bkit()
        .args(["check", &fixture("invalid_message.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("blocks[0].text: is 165 characters long, the limit is 150"))
        .stderr(predicate::str::contains("blocks[1].elements[1].action_id"))
        .stderr(predicate::str::contains("2 violation(s) found"));
}

#[test]
fn check_can_be_disabled_from_environment() {
    bkit()
        .args(["check", &fixture("invalid_message.json")])
        .env("BKIT__VALIDATION__ENABLED", "false")
        .assert()
        .success()
        .stdout(predicate::str::contains("validation disabled"));
}

#[test]
fn check_uses_limits_from_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("bkit.toml");
    fs::write(&config, "[validation.limits]\nactions_elements = 0\n")?;

    bkit()
        .args(["--config", config.to_str().ok_or("non-utf8 path")?])
        .args(["check", &fixture("valid_message.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("blocks[2].elements: has 1 items, the limit is 0"));
    Ok(())
}

#[test]
fn check_rejects_unknown_block_types() {
    bkit()
        .args(["check", &fixture("unknown_type.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid payload"))
        .stderr(predicate::str::contains("unknown variant `carousel`"));
}

#[test]
fn fmt_compact_round_trips_stdin() {
    bkit()
        .args(["fmt", "-", "--compact"])
        .write_stdin(r#"[ {"type": "divider", "block_id": "d1"} ]"#)
        .assert()
        .success()
        .stdout(predicate::str::diff("[{\"type\":\"divider\",\"block_id\":\"d1\"}]\n"));
}

#[test]
fn fmt_drops_null_fields() {
    bkit()
        .args(["fmt", "-", "--compact"])
        .write_stdin(r#"{"text": "hi", "thread_ts": null}"#)
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"text\":\"hi\"}\n"));
}

#[test]
fn kinds_lists_containers() {
    bkit()
        .arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("plain_text_input"))
        .stdout(predicate::str::is_match(r"radio_buttons\s+section, actions, input").expect("regex"));
}

#[test]
fn demo_outputs_valid_payloads() {
    bkit()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"radio_buttons\""));

    bkit()
        .args(["demo", "--modal"])
        .env("BKIT__OUTPUT__PRETTY", "false")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"{"type":"modal","title":"#));
}
