//! # Spectra Library / Spectra 库
//!
//! Collects test outcomes from a test runner's lifecycle events and renders
//! them as a static HTML report with one collapsible section per outcome,
//! optionally annotated with descriptions of what each test verifies.
//!
//! 从测试运行器的生命周期事件中收集测试结果，并将其渲染为静态 HTML 报告，
//! 每种结果对应一个可折叠部分，并可附带每个测试所验证内容的描述。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, result store, event recorder and assertion tracker
//! - `infra` - Command spawning, libtest adapter and file writing
//! - `reporting` - HTML rendering and console output
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、结果存储、事件记录器和断言跟踪器
//! - `infra` - 命令启动、libtest 适配器和文件写入
//! - `reporting` - HTML 渲染和控制台输出
//! - `cli` - 命令行接口和命令
//!
//! ## Example / 示例
//!
//! ```no_run
//! use spectra::core::{OutcomeRecorder, ReportConfig};
//!
//! let mut recorder = OutcomeRecorder::new(ReportConfig::with_title("Nightly"));
//! recorder.on_session_start();
//! recorder.on_test_phase_report("tests::it_works", "call", "passed");
//! recorder.on_session_end(0)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::models;
pub use crate::core::config;
pub use crate::core::{AssertionTracker, Description, Outcome, OutcomeRecorder, ReportConfig, ResultStore};

/// Detects the system locale and picks the closest available translation.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en"), and finally falls back to "en".
///
/// 检测系统语言环境并选择最接近的可用翻译。
pub fn detect_locale() -> String {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    resolve_locale(&locale)
}

/// Resolves a requested locale against the bundled translations.
/// 根据内置翻译解析请求的语言环境。
pub fn resolve_locale(requested: &str) -> String {
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&requested) {
        return requested.to_string();
    }
    requested
        .split('-')
        .next()
        .filter(|lang_code| available_locales.contains(lang_code))
        .unwrap_or("en")
        .to_string()
}

/// Initializes the application's internationalization (i18n) based on the system locale.
pub fn init() {
    rust_i18n::set_locale(&detect_locale());
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
