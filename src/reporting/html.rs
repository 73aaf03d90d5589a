//! # HTML Reporting Module / HTML 报告模块
//!
//! This module renders the accumulated session state as a single HTML
//! document: a header with the session summary, followed by one collapsible
//! section per non-empty outcome bucket. Rendering is a pure function of its
//! inputs, so the same store and session always produce the same bytes.
//!
//! 此模块将累积的会话状态渲染为单个 HTML 文档：一个包含会话摘要的头部，
//! 随后是每个非空结果桶对应的一个可折叠部分。渲染是输入的纯函数，
//! 因此相同的存储和会话总是产生相同的字节。

use crate::core::models::{AttachedMetadata, Description, Outcome, SessionMetadata};
use crate::core::store::ResultStore;
use crate::infra::t;

/// Relative path of the stylesheet the report links to.
/// 报告链接的样式表的相对路径。
pub const STYLESHEET_PATH: &str = "report.css";

/// Relative path of the script that makes sections collapsible.
/// 使各部分可折叠的脚本的相对路径。
pub const SCRIPT_PATH: &str = "report.js";

/// Bundled stylesheet, written next to the report on request.
/// 内置样式表，按需写入到报告旁边。
pub const HTML_STYLE: &str = include_str!("assets/report.css");

/// Bundled script toggling the sections / 切换各部分的内置脚本
pub const HTML_SCRIPT: &str = include_str!("assets/report.js");

/// Label put in front of a multi-step description.
pub const STEPS_LABEL: &str = "Steps:";

const START_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders the report document.
/// 渲染报告文档。
///
/// # Arguments / 参数
/// * `store` - Outcome buckets and attached metadata
///             结果桶和附加元数据
/// * `session` - Title, timing and exit status shown in the header
///               头部显示的标题、时间和退出状态
/// * `locale` - The locale for headings and labels
///              标题和标签使用的语言环境
///
/// # Returns / 返回值
/// The complete HTML document / 完整的 HTML 文档
pub fn render_report(store: &ResultStore, session: &SessionMetadata, locale: &str) -> String {
    let title = escape_html(&session.title);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{STYLESHEET_PATH}\">\n"
    ));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{title}</h1>\n"));

    push_session_header(&mut html, session, locale);

    for outcome in Outcome::ALL {
        push_outcome_section(&mut html, store, outcome, locale);
    }

    html.push_str(&format!("<script src=\"{SCRIPT_PATH}\"></script>\n"));
    html.push_str("</body>\n</html>\n");
    html
}

fn push_session_header(html: &mut String, session: &SessionMetadata, locale: &str) {
    let started = session
        .started_at
        .map(|at| at.format(START_FORMAT).to_string())
        .unwrap_or_else(|| t!("report.not_available", locale = locale).to_string());

    html.push_str("<div class=\"session-summary\">\n");
    html.push_str(&format!(
        "<h2>{}</h2>\n",
        t!("report.session_summary", locale = locale)
    ));
    html.push_str(&format!(
        "<p class=\"started\">{}: {}</p>\n",
        t!("report.started", locale = locale),
        escape_html(&started)
    ));
    html.push_str(&format!(
        "<p class=\"duration\">{}</p>\n",
        t!(
            "report.duration",
            locale = locale,
            seconds = format!("{:.2}", session.duration.as_secs_f64())
        )
    ));
    html.push_str(&format!(
        "<p class=\"exit-status\">{}: {}</p>\n",
        t!("report.exit_status", locale = locale),
        session.exit_status
    ));
    html.push_str("</div>\n");
}

fn push_outcome_section(html: &mut String, store: &ResultStore, outcome: Outcome, locale: &str) {
    let ids = store.bucket(outcome);
    if ids.is_empty() {
        return;
    }

    let heading = match outcome {
        Outcome::Passed => t!("report.section.passed", locale = locale),
        Outcome::Failed => t!("report.section.failed", locale = locale),
        Outcome::Skipped => t!("report.section.skipped", locale = locale),
    };

    let class = outcome.css_class();
    html.push_str(&format!("<section class=\"outcome outcome-{class}\">\n"));
    html.push_str(&format!(
        "<button type=\"button\" class=\"collapsible\">{} ({})</button>\n",
        heading,
        ids.len()
    ));
    html.push_str("<div class=\"collapsible-content\">\n<ul>\n");
    for id in ids {
        html.push_str("<li>");
        match store.metadata(id) {
            Some(metadata) => push_annotated_entry(html, id, metadata, locale),
            None => html.push_str(&escape_html(id)),
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n</div>\n</section>\n");
}

/// Renders `id: <description>, Assertion: <text>` for a test with metadata.
fn push_annotated_entry(html: &mut String, id: &str, metadata: &AttachedMetadata, locale: &str) {
    html.push_str(&escape_html(id));
    html.push_str(": ");
    match &metadata.description {
        Description::Line(line) => html.push_str(&escape_html(line)),
        Description::Steps(steps) => {
            html.push_str(STEPS_LABEL);
            html.push_str("<ol class=\"steps\">");
            for step in steps {
                html.push_str(&format!("<li>{}</li>", escape_html(step)));
            }
            html.push_str("</ol>");
        }
    }

    let assertion = match &metadata.assertion {
        Some(text) => escape_html(text),
        None => t!("report.not_available", locale = locale).to_string(),
    };
    html.push_str(", Assertion: ");
    html.push_str(&assertion);
}

/// Simple HTML escape function to replace special characters with their HTML entities
/// 简单的 HTML 转义函数，用 HTML 实体替换特殊字符
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
