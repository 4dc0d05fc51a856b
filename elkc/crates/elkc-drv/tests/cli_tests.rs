//! CLI Interface E2E Tests
//!
//! These tests run the `elk` binary: help and version output, the
//! `tokens` and `parse` commands, configuration handling and the REPL.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the path to the elk binary
fn elk_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_elk"))
}

/// A command isolated from the caller's environment and config files
fn elk(dir: &Path) -> Command {
    let mut cmd = Command::new(elk_bin());
    cmd.current_dir(dir)
        .env_remove("ELK_CONFIG")
        .env_remove("ELK_VERBOSE")
        .env_remove("ELK_NO_COLOR")
        .env_remove("RUST_LOG")
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"));
    cmd
}

fn write_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write source file");
    path
}

#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    elk(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("tokens")));
}

#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    elk(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_tokens_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&temp_dir, "ok.elk", "val x = 5;\n");

    elk(temp_dir.path())
        .arg("tokens")
        .arg(&input)
        .assert()
        .success()
        .stdout("val \"val\"\nIDENTITY \"x\"\n= \"=\"\nINTEGER \"5\"\n; \";\"\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_tokens_command_reports_illegal_characters() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&temp_dir, "bad.elk", "val x = @;\nval s = \"open");

    elk(temp_dir.path())
        .arg("tokens")
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("ILLEGAL \"@\""))
        .stderr(
            predicate::str::contains("error[E1001]")
                .and(predicate::str::contains("error[E1002]"))
                .and(predicate::str::contains("aborting due to 2 previous error(s)")),
        );
}

#[test]
fn test_parse_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(
        &temp_dir,
        "three.elk",
        "val x = 5; val y = 10; val foobar = 838383;",
    );

    elk(temp_dir.path())
        .arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout("val x = …;\nval y = …;\nval foobar = …;\n");
}

#[test]
fn test_parse_command_with_errors() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&temp_dir, "bad.elk", "val = 5; val y = 1;");

    elk(temp_dir.path())
        .arg("parse")
        .arg(&input)
        .assert()
        .failure()
        .stdout("val y = …;\n")
        .stderr(predicate::str::contains(
            "error[E2002]: expected next token to be of type IDENTITY, got = instead",
        ));
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    elk(temp_dir.path())
        .arg("parse")
        .arg("does-not-exist.elk")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_explicit_missing_config_is_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&temp_dir, "ok.elk", "val x = 1;");

    elk(temp_dir.path())
        .arg("--config")
        .arg(temp_dir.path().join("missing.toml"))
        .arg("parse")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_config_in_current_dir_sets_binding_style() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_source(&temp_dir, "elk.toml", "[parser]\nbinding = \"val\"\n");
    let input = write_source(&temp_dir, "mixed.elk", "let a = 1; val b = 2;");

    elk(temp_dir.path())
        .arg("parse")
        .arg(&input)
        .assert()
        .failure()
        .stdout("val b = …;\n")
        .stderr(predicate::str::contains("error[E2004]"));
}

#[test]
fn test_config_from_environment() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = write_source(&temp_dir, "custom.toml", "[parser]\nbinding = \"let\"\n");
    let input = write_source(&temp_dir, "mixed.elk", "let a = 1; val b = 2;");

    elk(temp_dir.path())
        .env("ELK_CONFIG", &config)
        .arg("parse")
        .arg(&input)
        .assert()
        .failure()
        .stdout("let a = …;\n");
}

#[test]
fn test_repl_is_default_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    elk(temp_dir.path())
        .write_stdin("val x;\n")
        .assert()
        .success()
        .stdout("🦌> val \"val\"\nIDENTITY \"x\"\n; \";\"\n🦌> ");
}

#[test]
fn test_repl_keeps_prompting_after_invalid_utf8() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    elk(temp_dir.path())
        .write_stdin(&b"\xff\nx\n"[..])
        .assert()
        .success()
        .stdout("🦌> ILLEGAL \"\u{fffd}\"\n🦌> IDENTITY \"x\"\n🦌> ");
}

#[test]
fn test_tokens_command_on_invalid_utf8_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("bytes.elk");
    std::fs::write(&input, b"val x = \xff;").expect("Failed to write source file");

    elk(temp_dir.path())
        .arg("tokens")
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("ILLEGAL \"\u{fffd}\"").and(predicate::str::contains("; \";\"")))
        .stderr(
            predicate::str::contains("warning[W1001]")
                .and(predicate::str::contains("error[E1001]"))
                .and(predicate::str::contains("aborting due to 1 previous error(s)")),
        );
}

#[test]
fn test_repl_custom_prompt() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_source(&temp_dir, "elk.toml", "[repl]\nprompt = \"elk> \"\n");

    elk(temp_dir.path())
        .arg("repl")
        .write_stdin("1\n2\n")
        .assert()
        .success()
        .stdout("elk> INTEGER \"1\"\nelk> INTEGER \"2\"\nelk> ");
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&temp_dir, "ok.elk", "val x = 1;");

    elk(temp_dir.path())
        .arg("--verbose")
        .arg("--no-color")
        .arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout("val x = …;\n")
        .stderr(predicate::str::contains("DEBUG"));
}
