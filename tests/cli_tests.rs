use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

mod common;
use common::fixture;

/// This test replays the mixed fixture stream with the fixture
/// configuration. The failing test makes the command exit with 1, and the
/// report lists every test under its short name.
///
/// 这个测试使用夹具配置重放混合事件流。失败的测试使命令以 1 退出，
/// 报告以短名称列出每个测试。
#[test]
fn test_report_from_fixture() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("report.html");

    let mut cmd = Command::cargo_bin("spectra").unwrap();
    cmd.arg("report")
        .arg("--config")
        .arg(fixture("Spectra.toml"))
        .arg("--input")
        .arg(fixture("libtest_events.jsonl"))
        .arg("--output")
        .arg(&output)
        .arg("--lang")
        .arg("en");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("1 passed, 1 failed, 1 skipped"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<title>Fixture Run</title>"));
    assert!(html.contains("test_pass: Simple check, Assertion: N/A"));
    assert!(html.contains("<li>step 1</li><li>step 2</li>"));
    assert!(html.contains("<li>test_skip</li>"));
    assert!(html.contains("Exit status: 1"));
}

/// An explicit exit status overrides the one implied by the stream.
/// 显式的退出状态会覆盖事件流推断出的状态。
#[test]
fn test_report_with_explicit_exit_status() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("spectra").unwrap();
    cmd.arg("report")
        .arg("--input")
        .arg(fixture("libtest_events.jsonl"))
        .arg("--output")
        .arg(dir.path())
        .arg("--exit-status")
        .arg("0")
        .arg("--quiet");

    cmd.assert().success().stdout(predicate::str::is_empty());

    let html = fs::read_to_string(dir.path().join("test_report.html")).unwrap();
    assert!(html.contains("<li>tests::test_pass</li>"));
    assert!(html.contains("Exit status: 0"));
}

#[test]
fn test_report_from_stdin() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("report.html");

    let mut cmd = assert_cmd::Command::cargo_bin("spectra").unwrap();
    cmd.arg("report")
        .arg("--output")
        .arg(&output)
        .arg("--title")
        .arg("Piped")
        .arg("--quiet")
        .write_stdin(fs::read_to_string(fixture("passing_events.jsonl")).unwrap());

    cmd.assert().success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<h1>Piped</h1>"));
    assert!(html.contains("Passed Tests (1)"));
}

#[test]
fn test_report_missing_input_fails() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("spectra").unwrap();
    cmd.arg("report")
        .arg("--input")
        .arg(dir.path().join("missing.jsonl"))
        .arg("--output")
        .arg(dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open event stream"));
}

#[test]
fn test_report_with_invalid_config_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("Spectra.toml");
    fs::write(&config, "quiet = maybe").unwrap();

    let mut cmd = Command::cargo_bin("spectra").unwrap();
    cmd.arg("report").arg("--config").arg(&config);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

/// `init --non-interactive` writes a configuration that `report` accepts.
/// `init --non-interactive` 写入一个 `report` 可以接受的配置。
#[test]
fn test_init_non_interactive() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("Spectra.toml");

    let mut cmd = Command::cargo_bin("spectra").unwrap();
    cmd.arg("init")
        .arg("--path")
        .arg(&config)
        .arg("--non-interactive")
        .arg("--lang")
        .arg("en");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Configuration written to"));

    let content = fs::read_to_string(&config).unwrap();
    assert!(content.contains("title = \"Test Result\""));

    let mut again = Command::cargo_bin("spectra").unwrap();
    again
        .arg("init")
        .arg("--path")
        .arg(&config)
        .arg("--non-interactive")
        .arg("--lang")
        .arg("en");

    again
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

/// `--lang=<VALUE>` localizes the help text just like `--lang <VALUE>`.
/// `--lang=<VALUE>` 与 `--lang <VALUE>` 一样会本地化帮助文本。
#[test]
fn test_lang_equals_form_localizes_help() {
    let mut cmd = Command::cargo_bin("spectra").unwrap();
    cmd.arg("--lang=zh-CN").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("收集测试运行的结果"));
}

#[test]
fn test_no_subcommand_prints_help() {
    let mut cmd = Command::cargo_bin("spectra").unwrap();
    cmd.assert().failure().stderr(predicate::str::contains("Usage"));
}

/// `run` streams a command's stdout through the recorder. `cat` stands in
/// for a test binary printing libtest JSON.
///
/// `run` 将命令的 stdout 流经记录器。这里用 `cat` 代替输出 libtest JSON 的测试二进制文件。
#[cfg(unix)]
#[test]
fn test_run_with_streaming_command() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("report.html");

    let mut cmd = Command::cargo_bin("spectra").unwrap();
    cmd.arg("run")
        .arg("--output")
        .arg(&output)
        .arg("--short-names")
        .arg("--lang")
        .arg("en")
        .arg("--")
        .arg("cat")
        .arg(fixture("libtest_events.jsonl"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("running 3 tests"))
        .stdout(predicate::str::contains("1 passed, 1 failed, 1 skipped"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<li>test_pass</li>"));
    assert!(html.contains("Exit status: 0"));
}

#[cfg(unix)]
#[test]
fn test_run_forwards_exit_code() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("spectra").unwrap();
    cmd.arg("run")
        .arg("--output")
        .arg(dir.path())
        .arg("--quiet")
        .arg("--")
        .arg("sh")
        .arg("-c")
        .arg("exit 3");

    cmd.assert().code(3);
    assert!(dir.path().join("test_report.html").is_file());
}
