//! Integration tests for the minsh binary.

// For now, only compile this for Unix-like platforms (Linux, macOS).
#![cfg(unix)]

use std::time::{Duration, Instant};

use anyhow::Context;
use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

fn minsh() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("minsh"));
    cmd.arg("--no-config");
    cmd
}

#[test]
fn runs_command_from_flag() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("out.txt");

    minsh()
        .arg("-c")
        .arg(format!("echo hi > {}", out.display()))
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&out)?, "hi\n");
    Ok(())
}

#[test]
fn runs_lines_from_stdin_in_order() {
    minsh()
        .write_stdin("echo one\nprintf abc | tr a-z A-Z\n\necho three\n")
        .assert()
        .success()
        .stdout("one\nABCthree\n");
}

#[test]
fn redirect_truncates_existing_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("out.txt");
    std::fs::write(&out, "a much longer line that must disappear\n")?;

    minsh()
        .write_stdin(format!("printf short > {}\n", out.display()))
        .assert()
        .success()
        .stdout("");

    assert_eq!(std::fs::read_to_string(&out)?, "short");
    Ok(())
}

#[test]
fn missing_program_is_reported_and_loop_continues() {
    minsh()
        .write_stdin("/nonexistent/minsh-test/missing-program\necho next\n")
        .assert()
        .success()
        .stdout("next\n")
        .stderr(predicate::str::contains("missing-program: exec failed"));
}

#[test]
fn dispatch_failure_is_reported_and_loop_continues() {
    minsh()
        .write_stdin("| wc\necho next\n")
        .assert()
        .success()
        .stdout("next\n")
        .stderr(predicate::str::contains("missing command"));
}

#[test]
fn dispatch_failure_sets_exit_code_for_single_command() {
    minsh().arg("-c").arg("ls |").assert().code(1);
}

#[test]
fn background_command_does_not_block() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let script = dir.path().join("slow.sh");
    let marker = dir.path().join("marker");

    // Detaches from the output pipe so only the interpreter keeps it open.
    std::fs::write(
        &script,
        format!(
            "exec >/dev/null 2>&1 </dev/null\nsleep 1\necho late > '{}'\n",
            marker.display()
        ),
    )?;

    let start = Instant::now();
    minsh()
        .write_stdin(format!("sh {} &\necho after\n", script.display()))
        .assert()
        .success()
        .stdout("after\n");
    assert!(start.elapsed() < Duration::from_millis(900));

    let deadline = Instant::now() + Duration::from_secs(5);
    while !marker.exists() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(20));
    }
    assert!(marker.exists(), "background command never finished");
    Ok(())
}

#[test]
fn explicit_config_file_must_load() {
    Command::new(assert_cmd::cargo::cargo_bin!("minsh"))
        .arg("--config")
        .arg("/nonexistent/minsh-test/config.toml")
        .arg("-c")
        .arg("true")
        .assert()
        .code(1);
}

#[test]
fn valid_config_file_is_accepted() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[ui]\nprompt = \"% \"\n[trace]\nevents = [\"commands\"]\n")?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("minsh"))
        .arg("--config")
        .arg(&config)
        .arg("-c")
        .arg("echo configured")
        .output()
        .context("running minsh")?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "configured\n");
    // Enabling the `commands` events surfaces classification on stderr.
    assert!(String::from_utf8(output.stderr)?.contains("Simple"));
    Ok(())
}

#[test]
fn version_flag() {
    minsh()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
