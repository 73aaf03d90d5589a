//! # libtest Event Adapter / libtest 事件适配器
//!
//! Drives an [`OutcomeRecorder`] from the JSON event stream printed by
//! Rust's test harness (`cargo test -- -Z unstable-options --format json`)
//! or by `cargo nextest run --message-format libtest-json`:
//!
//! ```text
//! { "type": "suite", "event": "started", "test_count": 2 }
//! { "type": "test", "event": "started", "name": "tests::it_works" }
//! { "type": "test", "name": "tests::it_works", "event": "ok", "exec_time": 0.001 }
//! { "type": "test", "name": "tests::it_fails", "event": "failed", "stdout": "..." }
//! { "type": "suite", "event": "failed", "passed": 1, "failed": 1, ... }
//! ```
//!
//! Each test binary emits its own suite; all suites of one run form a
//! single session.
//!
//! 从 Rust 测试框架输出的 JSON 事件流驱动 [`OutcomeRecorder`]。
//! 每个测试二进制文件都会输出自己的 suite；一次运行的所有 suite 构成一个会话。

use serde::Deserialize;

use crate::core::models::{Outcome, TestPhase};
use crate::core::recorder::OutcomeRecorder;

/// The `event` field of a libtest message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibtestEvent {
    Started,
    Ok,
    Failed,
    Ignored,
    Timeout,
    #[serde(other)]
    Other,
}

/// One line of libtest JSON output.
/// libtest JSON 输出的一行。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LibtestMessage {
    Suite {
        event: LibtestEvent,
    },
    Test {
        event: LibtestEvent,
        name: String,
    },
    #[serde(other)]
    Other,
}

impl LibtestMessage {
    /// Parses a single line. Lines that are not libtest JSON yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if !trimmed.starts_with('{') {
            return None;
        }
        serde_json::from_str(trimmed).ok()
    }
}

/// Maps a finished test event to the outcome it reports.
pub fn outcome_for(event: LibtestEvent) -> Option<Outcome> {
    match event {
        LibtestEvent::Ok => Some(Outcome::Passed),
        LibtestEvent::Failed => Some(Outcome::Failed),
        LibtestEvent::Ignored => Some(Outcome::Skipped),
        LibtestEvent::Started | LibtestEvent::Timeout | LibtestEvent::Other => None,
    }
}

/// Returns the identity a libtest name is recorded under. With `short_names`
/// only the last `::` segment is kept, e.g. `tests::it_works` becomes `it_works`.
///
/// 返回 libtest 名称对应的记录标识。启用 `short_names` 时只保留最后一个 `::` 段。
pub fn test_identity(name: &str, short_names: bool) -> &str {
    if short_names {
        name.rsplit("::").next().unwrap_or(name)
    } else {
        name
    }
}

/// Feeds libtest output into a recorder, line by line.
/// 逐行将 libtest 输出送入记录器。
#[derive(Debug, Default)]
pub struct LibtestStream {
    session_started: bool,
    failure_seen: bool,
    tests_seen: usize,
}

impl LibtestStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles one line of output. Returns `false` when the line is not a
    /// libtest message, so the caller can pass it through untouched.
    ///
    /// 处理一行输出。如果该行不是 libtest 消息则返回 `false`，以便调用方原样输出。
    pub fn feed_line(&mut self, line: &str, recorder: &mut OutcomeRecorder) -> bool {
        let Some(message) = LibtestMessage::parse(line) else {
            return false;
        };

        match message {
            LibtestMessage::Suite { event } => match event {
                LibtestEvent::Started => self.ensure_started(recorder),
                LibtestEvent::Failed => self.failure_seen = true,
                _ => {}
            },
            LibtestMessage::Test { event, name } => {
                if let Some(outcome) = outcome_for(event) {
                    self.ensure_started(recorder);
                    let id = test_identity(&name, recorder.config().short_names);
                    recorder.report_phase(id, TestPhase::Call, outcome);
                    self.tests_seen += 1;
                    if outcome == Outcome::Failed {
                        self.failure_seen = true;
                    }
                }
            }
            LibtestMessage::Other => {}
        }
        true
    }

    /// Starts the session unless that already happened. Streams cut from
    /// the middle of a run may lack the suite start.
    pub fn ensure_started(&mut self, recorder: &mut OutcomeRecorder) {
        if !self.session_started {
            recorder.on_session_start();
            self.session_started = true;
        }
    }

    /// Whether any suite or test reported failure.
    pub fn failure_seen(&self) -> bool {
        self.failure_seen
    }

    /// Number of finished test events seen.
    pub fn tests_seen(&self) -> usize {
        self.tests_seen
    }

    /// The exit status implied by the stream alone: 1 if anything failed, else 0.
    /// 仅由事件流推断的退出状态：有任何失败则为 1，否则为 0。
    pub fn implied_exit_status(&self) -> i32 {
        if self.failure_seen { 1 } else { 0 }
    }
}
