//! # Commands Module / 命令模块
//!
//! One submodule per subcommand of the `spectra` binary.
//!
//! `spectra` 二进制文件的每个子命令对应一个子模块。

use std::path::{Path, PathBuf};

use crate::core::config::DEFAULT_REPORT_PATH;
use crate::infra::fs::is_directory;

pub mod init;
pub mod report;
pub mod run;

/// Resolves the `--output` argument: an existing directory receives a
/// `test_report.html` inside it, anything else is used as the file path.
///
/// 解析 `--output` 参数：已存在的目录会在其中生成 `test_report.html`，否则直接作为文件路径。
pub fn report_path(output: &Path) -> PathBuf {
    if is_directory(output) {
        output.join(DEFAULT_REPORT_PATH)
    } else {
        output.to_path_buf()
    }
}
