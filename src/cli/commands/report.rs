//! # Report Command Module / 报告命令模块
//!
//! This module implements the `report` command, which replays a saved
//! libtest JSON stream (from a file or stdin) into a report.
//!
//! 此模块实现 `report` 命令，将保存的 libtest JSON 流（来自文件或 stdin）重放为报告。

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::{
    core::{config::ReportConfig, recorder::OutcomeRecorder},
    infra::{command::decode_line, libtest::LibtestStream},
};

/// Executes the report command.
///
/// # Arguments
/// * `config` - The resolved reporter configuration
/// * `input` - A file holding libtest JSON lines, or `-` for stdin
/// * `exit_status` - The host runner's exit status, when known. Otherwise it
///   is inferred from the stream: 1 if anything failed, else 0.
///
/// # Returns
/// The exit status recorded in the report.
pub fn execute(config: ReportConfig, input: &Path, exit_status: Option<i32>) -> Result<i32> {
    let reader: Box<dyn BufRead> = if input.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(input)
            .with_context(|| format!("Failed to open event stream: {}", input.display()))?;
        Box::new(BufReader::new(file))
    };

    let mut recorder = OutcomeRecorder::new(config);
    let stream = replay(reader, &mut recorder)
        .with_context(|| format!("Failed to read event stream: {}", input.display()))?;

    let exit_status = exit_status.unwrap_or_else(|| stream.implied_exit_status());
    recorder.on_session_end(exit_status)?;
    Ok(exit_status)
}

/// Feeds every line of `reader` to `recorder`. Lines that are not libtest
/// messages are skipped, including lines that are not valid UTF-8.
pub fn replay<R: BufRead>(mut reader: R, recorder: &mut OutcomeRecorder) -> Result<LibtestStream> {
    let mut stream = LibtestStream::new();
    let mut buf = Vec::new();
    while reader.read_until(b'\n', &mut buf)? > 0 {
        stream.feed_line(&decode_line(&buf), recorder);
        buf.clear();
    }
    Ok(stream)
}
