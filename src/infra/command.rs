//! # Command Execution Module / 命令执行模块
//!
//! Spawns the host test command and hands its stdout to the caller line by
//! line while the command is still running. Stderr is inherited, so compiler
//! diagnostics and panic messages reach the terminal unchanged.
//!
//! 启动宿主测试命令，并在命令运行期间逐行将其 stdout 交给调用方。
//! stderr 直接继承，因此编译器诊断和 panic 消息原样到达终端。

use anyhow::{Context, Result, anyhow, bail};
use std::borrow::Cow;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Expands `~` and environment variables in a command line, then splits it
/// into program and arguments with shell quoting rules.
///
/// 展开命令行中的 `~` 和环境变量，然后按 shell 引号规则拆分为程序和参数。
pub fn parse_command(command: &str) -> Result<Vec<String>> {
    let expanded_command = shellexpand::full(command)
        .with_context(|| format!("Failed to expand command: {command}"))?
        .to_string();

    let parts = shlex::split(&expanded_command)
        .ok_or_else(|| anyhow!("Failed to parse command: {}", expanded_command))?;

    if parts.is_empty() {
        bail!("Empty command after parsing.");
    }
    Ok(parts)
}

/// Spawns `parts[0]` with the remaining parts as arguments and calls
/// `on_line` for every line it prints to stdout.
///
/// # Arguments
/// * `parts` - Program followed by its arguments
/// * `cwd` - Optional working directory
/// * `on_line` - Called once per stdout line, without the trailing newline
///
/// # Returns
/// The exit status of the command once its stdout is exhausted.
///
/// 启动 `parts[0]` 并以其余部分作为参数，对其输出到 stdout 的每一行调用 `on_line`。
pub async fn spawn_streaming<F>(parts: &[String], cwd: Option<&Path>, mut on_line: F) -> Result<ExitStatus>
where
    F: FnMut(&str),
{
    let (program, args) = parts
        .split_first()
        .ok_or_else(|| anyhow!("Empty command after parsing."))?;

    let mut cmd = tokio::process::Command::new(program);
    cmd.args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let mut child = cmd
        .spawn()
        .with_context(|| format!("Failed to spawn command: {}", parts.join(" ")))?;
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow!("Failed to capture stdout of: {}", program))?;

    let mut reader = BufReader::new(stdout);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .await
            .context("Failed to read command output")?;
        if read == 0 {
            break;
        }
        on_line(&decode_line(&buf));
    }

    child.wait().await.context("Failed to get process status")
}

/// Decodes one raw output line, dropping the line terminator. Bytes that
/// are not valid UTF-8 become U+FFFD instead of ending the stream.
///
/// 解码一行原始输出并去掉行结束符。无效的 UTF-8 字节会变为 U+FFFD，而不会中断流。
pub fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

/// The numeric exit code of a finished process. Processes killed by a
/// signal have no code and map to 1.
pub fn exit_code(status: &ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
