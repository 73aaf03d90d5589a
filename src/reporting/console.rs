//! # Console Reporting Module / 控制台报告模块
//!
//! Colored, localized console echo of session and test events, printed as
//! they happen so a run's progress stays visible next to the host runner's
//! own output.
//!
//! 会话和测试事件的彩色本地化控制台回显，
//! 在事件发生时打印，使运行进度与宿主运行器自身的输出一起可见。

use colored::*;
use std::path::Path;

use crate::core::models::{Outcome, SessionMetadata};
use crate::core::store::ResultStore;
use crate::infra::t;

/// Announces the start of a session.
/// 宣布会话开始。
pub fn print_session_started(locale: &str) {
    println!("\n{}", t!("session.started", locale = locale).cyan());
}

/// Prints one line per recorded test, e.g. `tests::it_works PASSED`.
/// 每个记录的测试打印一行，例如 `tests::it_works PASSED`。
pub fn print_test_outcome(id: &str, outcome: Outcome) {
    let label = outcome.to_string();
    let label = match outcome {
        Outcome::Passed => label.green(),
        Outcome::Failed => label.red(),
        Outcome::Skipped => label.dimmed(),
    };
    println!("{} {}", id, label);
}

/// Prints the session duration and the host runner's exit status.
/// 打印会话持续时间和宿主运行器的退出状态。
pub fn print_session_finished(session: &SessionMetadata, locale: &str) {
    println!(
        "\n{}",
        t!(
            "session.finished",
            locale = locale,
            seconds = format!("{:.2}", session.duration.as_secs_f64())
        )
        .bold()
    );

    let status = t!(
        "session.exit_status",
        locale = locale,
        status = session.exit_status
    );
    if session.exit_status == 0 {
        println!("{}", status.green());
    } else {
        println!("{}", status.red());
    }
}

/// Prints the number of tests in each bucket.
/// 打印每个结果桶中的测试数量。
///
/// # Output Format / 输出格式
/// ```text
/// --- Summary: 3 passed, 1 failed, 2 skipped ---
/// ```
pub fn print_summary(store: &ResultStore, locale: &str) {
    let (passed, failed, skipped) = store.counts();
    let line = t!(
        "summary.counts",
        locale = locale,
        passed = passed,
        failed = failed,
        skipped = skipped
    );
    if failed > 0 {
        println!("{}", line.red().bold());
    } else {
        println!("{}", line.green().bold());
    }
}

/// Tells the user where the report went.
pub fn print_report_written(path: &Path, locale: &str) {
    println!(
        "{}",
        t!("report.written", locale = locale, path = path.display()).cyan()
    );
}

/// Prints a warning about an event the recorder could not act on.
/// 打印一条关于记录器无法处理的事件的警告。
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message.yellow());
}
