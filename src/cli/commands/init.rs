//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command, which creates a commented
//! `Spectra.toml`. In interactive mode it asks for the report title and
//! whether to write the stylesheet and script next to the report.
//!
//! 此模块实现 `init` 命令，用于创建带注释的 `Spectra.toml`。
//! 在交互模式下，它会询问报告标题以及是否在报告旁写入样式表和脚本。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::{fs, path::Path};

use crate::core::config::{DEFAULT_COMMAND, DEFAULT_REPORT_PATH};
use crate::core::models::{normalize_title, DEFAULT_TITLE};
use crate::infra::t;

/// Renders the configuration file written by `init`.
/// 渲染 `init` 写入的配置文件。
pub fn render_config_template(title: &str, language: &str, emit_assets: bool) -> String {
    // `toml::Value` takes care of quoting and escaping.
    let title = toml::Value::String(normalize_title(title));
    let language = toml::Value::String(language.to_string());
    let command = toml::Value::String(DEFAULT_COMMAND.to_string());
    let output = toml::Value::String(DEFAULT_REPORT_PATH.to_string());

    format!(
        r#"# Spectra Configuration / Spectra 配置

# Report title / 报告标题
title = {title}

# Language for console output and report labels / 控制台输出和报告标签的语言
language = {language}

# Where the HTML report is written / HTML 报告的写入位置
output = {output}

# Write report.css and report.js next to the report / 在报告旁写入 report.css 和 report.js
emit_assets = {emit_assets}

# Record `tests::it_works` as `it_works` / 将 `tests::it_works` 记录为 `it_works`
short_names = false

# Suppress console echo / 禁止控制台回显
quiet = false

# Command spawned by `spectra run` / `spectra run` 启动的命令
command = {command}

# Describe what tests verify / 描述测试验证的内容
# [[attach]]
# test = "tests::it_works"
# description = "Checks the happy path"
#
# [[attach]]
# test = "tests::it_fails"
# description = ["step 1", "step 2"]
"#
    )
}

/// Executes the init command.
///
/// # Arguments
/// * `path` - Path for the new configuration file
/// * `force` - Whether to overwrite an existing file without asking
/// * `non_interactive` - Write the defaults without prompting
/// * `language` - Language for messages, also written into the file
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub fn execute(path: &Path, force: bool, non_interactive: bool, language: &str) -> Result<()> {
    let theme = ColorfulTheme::default();

    if path.exists() && !force {
        if non_interactive {
            println!(
                "{}",
                t!("init.file_exists", locale = language, path = path.display()).red()
            );
            println!("{}", t!("init.use_force", locale = language).yellow());
            return Ok(());
        }

        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init.overwrite_prompt", locale = language, path = path.display()))
            .default(false)
            .interact()
            .context(t!("init.user_confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted", locale = language));
            return Ok(());
        }
    }

    let content = if non_interactive {
        render_config_template(DEFAULT_TITLE, language, false)
    } else {
        println!("\n{}", t!("init.welcome", locale = language).cyan().bold());
        let title: String = Input::with_theme(&theme)
            .with_prompt(t!("init.title_prompt", locale = language))
            .default(DEFAULT_TITLE.to_string())
            .interact_text()
            .context(t!("init.user_confirmation_failed", locale = language).to_string())?;
        let emit_assets = Confirm::with_theme(&theme)
            .with_prompt(t!("init.assets_prompt", locale = language))
            .default(true)
            .interact()
            .context(t!("init.user_confirmation_failed", locale = language).to_string())?;
        render_config_template(&title, language, emit_assets)
    };

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                t!("init.create_parent_dir_failed", locale = language, path = parent.display())
                    .to_string()
            })?;
        }
    }

    fs::write(path, content)
        .with_context(|| t!("init.write_failed", locale = language, path = path.display()).to_string())?;

    println!(
        "{}",
        t!("init.success", locale = language, path = path.display()).green()
    );
    println!("{}", t!("init.next_steps", locale = language));
    Ok(())
}
