//! # File System Operations Module / 文件系统操作模块
//!
//! Writes the rendered report, and optionally its stylesheet and script,
//! to disk. Files are opened for the duration of a single call and closed
//! when the call returns, whether it succeeds or not.
//!
//! 将渲染好的报告（以及可选的样式表和脚本）写入磁盘。
//! 文件仅在单次调用期间打开，并在调用返回时关闭，无论成功与否。

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::reporting::html::{HTML_SCRIPT, HTML_STYLE, SCRIPT_PATH, STYLESHEET_PATH};

/// Writes `content` to `path`, replacing any previous report there.
/// Missing parent directories are created.
///
/// 将 `content` 写入 `path`，替换该处之前的任何报告。会创建缺失的父目录。
///
/// # Errors / 错误
/// Returns an error if the file cannot be created, written or flushed.
/// Nothing is retried.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create report directory: {}", parent.display())
            })?;
        }
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush report file: {}", path.display()))?;
    Ok(())
}

/// Writes the bundled stylesheet and script into `dir`, under the names the
/// report links to.
///
/// 将内置的样式表和脚本写入 `dir`，使用报告中引用的文件名。
pub fn write_assets(dir: &Path) -> Result<()> {
    write_report(&dir.join(STYLESHEET_PATH), HTML_STYLE)?;
    write_report(&dir.join(SCRIPT_PATH), HTML_SCRIPT)?;
    Ok(())
}

/// Checks if a path exists and is a directory.
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the path exists and is a directory, `false` otherwise
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}
