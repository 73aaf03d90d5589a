//! # Configuration Module / 配置模块
//!
//! Loads `Spectra.toml`. Every field has a default, so an empty file or no
//! file at all produces a usable configuration.
//!
//! 加载 `Spectra.toml`。每个字段都有默认值，
//! 因此空文件或没有文件都会产生可用的配置。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::{normalize_title, Description, DEFAULT_TITLE};

/// The configuration file name looked up by default.
/// 默认查找的配置文件名。
pub const DEFAULT_CONFIG_FILE: &str = "Spectra.toml";

/// Where the report is written unless configured otherwise.
/// 未另行配置时报告的写入位置。
pub const DEFAULT_REPORT_PATH: &str = "test_report.html";

/// The command `spectra run` spawns when none is given.
pub const DEFAULT_COMMAND: &str = "cargo test -- -Z unstable-options --format json --report-time";

/// A description attached to a test through the configuration file instead
/// of through the assertion tracker.
///
/// 通过配置文件（而不是断言跟踪器）附加到测试的描述。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AttachEntry {
    /// The test identity the description belongs to / 描述所属的测试标识
    pub test: String,
    /// A single line, or a list of steps / 单行文本或步骤列表
    pub description: Description,
}

/// The full reporter configuration.
/// 完整的报告器配置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// The report title. Blank values fall back to "Test Result".
    /// 报告标题。空白值会回退到 "Test Result"。
    #[serde(default = "default_title")]
    pub title: String,

    /// The language for console messages and report labels (e.g., "en", "zh-CN").
    /// 控制台消息和报告标签的语言（例如 "en", "zh-CN"）。
    #[serde(default = "default_language")]
    pub language: String,

    /// Path of the HTML report / HTML 报告的路径
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Also write the bundled stylesheet and script next to the report.
    /// 同时在报告旁边写入内置的样式表和脚本。
    #[serde(default)]
    pub emit_assets: bool,

    /// Strip `module::` prefixes from test names reported by libtest.
    /// 去除 libtest 报告的测试名称中的 `module::` 前缀。
    #[serde(default)]
    pub short_names: bool,

    /// Suppress console echo of session and test events.
    /// 禁止在控制台回显会话和测试事件。
    #[serde(default)]
    pub quiet: bool,

    /// The command used by `spectra run` when none is passed on the command line.
    /// 命令行未传入命令时 `spectra run` 使用的命令。
    #[serde(default = "default_command")]
    pub command: String,

    /// Descriptions attached up front / 预先附加的描述
    #[serde(default)]
    pub attach: Vec<AttachEntry>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            language: default_language(),
            output: default_output(),
            emit_assets: false,
            short_names: false,
            quiet: false,
            command: default_command(),
            attach: vec![],
        }
    }
}

impl ReportConfig {
    /// Creates a default configuration with the given title.
    pub fn with_title(title: &str) -> Self {
        Self {
            title: normalize_title(title),
            ..Self::default()
        }
    }

    /// The title to display, with blank titles replaced by the default.
    pub fn display_title(&self) -> String {
        normalize_title(&self.title)
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_PATH)
}

fn default_command() -> String {
    DEFAULT_COMMAND.to_string()
}

/// Parses a configuration from TOML text.
/// 从 TOML 文本解析配置。
pub fn parse_config(content: &str) -> Result<ReportConfig> {
    let mut config: ReportConfig =
        toml::from_str(content).context("Failed to parse reporter configuration")?;
    config.title = config.display_title();
    Ok(config)
}

/// Loads the configuration at `path`.
/// 加载 `path` 处的配置。
///
/// # Errors / 错误
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<ReportConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Loads the configuration at `path` if it exists, or the defaults if it doesn't.
/// 如果 `path` 处的配置存在则加载它，否则使用默认值。
pub fn load_config_or_default(path: &Path) -> Result<ReportConfig> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(ReportConfig::default())
    }
}
