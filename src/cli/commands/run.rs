//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command: it spawns the host test
//! command, feeds its libtest JSON output to the recorder as it arrives, and
//! writes the report once the command exits.
//!
//! 此模块实现 `run` 命令：启动宿主测试命令，在其 libtest JSON 输出到达时
//! 将其送入记录器，并在命令退出后写入报告。

use anyhow::Result;
use colored::*;

use crate::{
    core::{config::ReportConfig, recorder::OutcomeRecorder},
    infra::{
        command::{exit_code, parse_command, spawn_streaming},
        libtest::LibtestStream,
        t,
    },
    reporting::console::print_warning,
};

/// Executes the run command.
///
/// # Arguments
/// * `config` - The resolved reporter configuration
/// * `command` - Program and arguments given after `--`; falls back to the
///   configured `command` when absent
///
/// # Returns
/// The host command's exit code, so the caller can exit with it.
pub async fn execute(config: ReportConfig, command: Option<Vec<String>>) -> Result<i32> {
    let parts = match command {
        Some(parts) if !parts.is_empty() => parts,
        _ => parse_command(&config.command)?,
    };

    let quiet = config.quiet;
    let locale = config.language.clone();
    let mut recorder = OutcomeRecorder::new(config);
    let mut stream = LibtestStream::new();

    if !quiet {
        println!(
            "{}",
            t!("run.spawning", locale = &locale, command = parts.join(" ")).blue()
        );
    }

    // The session covers the whole command, including compilation.
    stream.ensure_started(&mut recorder);

    let status = spawn_streaming(&parts, None, |line| {
        if !stream.feed_line(line, &mut recorder) && !quiet {
            println!("{line}");
        }
    })
    .await?;

    if stream.tests_seen() == 0 && !quiet {
        print_warning(&t!("run.no_test_events", locale = &locale));
    }

    let exit_status = exit_code(&status);
    recorder.on_session_end(exit_status)?;
    Ok(exit_status)
}
