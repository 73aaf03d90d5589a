//! # Outcome Recorder Module / 结果记录器模块
//!
//! The façade a host test runner talks to. It turns lifecycle events
//! (session start, per-phase test reports, session end) into result store
//! mutations, keeps the session timing, and renders and writes the report
//! when the session ends.
//!
//! 宿主测试运行器与之交互的门面。它将生命周期事件（会话开始、
//! 各阶段测试报告、会话结束）转换为结果存储的变更，记录会话时间，
//! 并在会话结束时渲染和写入报告。
//!
//! ## Session States / 会话状态
//!
//! `Idle -> Started -> Running -> Finalized`. Events arriving after the
//! session is finalized are ignored with a warning.

use anyhow::Result;
use chrono::Local;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::core::config::ReportConfig;
use crate::core::models::{Outcome, SessionMetadata, TestPhase};
use crate::core::store::{lock_store, Recorded, ResultStore, SharedStore};
use crate::core::tracker::AssertionTracker;
use crate::infra::fs::{write_assets, write_report};
use crate::infra::t;
use crate::reporting::{console, html::render_report};

/// Where a session is in its lifecycle.
/// 会话在其生命周期中的位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, no session start seen yet / 已构造，尚未收到会话开始
    Idle,
    /// Session started, no test reported yet / 会话已开始，尚无测试报告
    Started,
    /// At least one test phase has been reported / 至少报告了一个测试阶段
    Running,
    /// The report has been produced; terminal / 报告已生成；终止状态
    Finalized,
}

/// Receives host runner events for a single session.
/// 接收单个会话的宿主运行器事件。
#[derive(Debug)]
pub struct OutcomeRecorder {
    config: ReportConfig,
    store: SharedStore,
    session: SessionMetadata,
    state: SessionState,
    start_instant: Option<Instant>,
}

impl OutcomeRecorder {
    /// Creates a recorder with a fresh store. Descriptions listed under
    /// `[[attach]]` in the configuration are attached right away.
    ///
    /// 使用新的存储创建记录器。配置中 `[[attach]]` 下列出的描述会立即附加。
    pub fn new(config: ReportConfig) -> Self {
        Self::with_store(config, ResultStore::shared())
    }

    /// Creates a recorder around an existing store, e.g. one that trackers
    /// are already recording into. Metadata already in the store takes
    /// precedence over `[[attach]]` entries for the same test.
    ///
    /// 围绕已有存储创建记录器。对于同一测试，存储中已有的元数据优先于 `[[attach]]` 条目。
    pub fn with_store(config: ReportConfig, store: SharedStore) -> Self {
        {
            let mut guard = lock_store(&store);
            for entry in &config.attach {
                if guard.metadata(&entry.test).is_none() {
                    guard.attach(&entry.test, entry.description.clone());
                }
            }
        }
        let session = SessionMetadata::new(&config.title);
        Self {
            config,
            store,
            session,
            state: SessionState::Idle,
            start_instant: None,
        }
    }

    /// A handle to the store, for sharing with trackers or inspection.
    pub fn store(&self) -> SharedStore {
        self.store.clone()
    }

    /// A tracker that records into this recorder's store.
    /// 一个记录到此记录器存储中的跟踪器。
    pub fn tracker(&self) -> AssertionTracker {
        AssertionTracker::new(self.store.clone())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn session(&self) -> &SessionMetadata {
        &self.session
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    fn locale(&self) -> &str {
        &self.config.language
    }

    fn warn(&self, message: &str) {
        if !self.config.quiet {
            console::print_warning(message);
        }
    }

    /// Handles the session start event by capturing the start time.
    /// 通过记录开始时间来处理会话开始事件。
    pub fn on_session_start(&mut self) {
        if self.state != SessionState::Idle {
            self.warn(&t!("session.duplicate_start", locale = self.locale()));
            return;
        }
        self.session.started_at = Some(Local::now());
        self.start_instant = Some(Instant::now());
        self.state = SessionState::Started;
        if !self.config.quiet {
            console::print_session_started(self.locale());
        }
    }

    /// Handles a test phase report given as strings, as a host runner
    /// hook would deliver it. Unknown phases and outcomes are ignored.
    ///
    /// 处理以字符串形式给出的测试阶段报告。未知的阶段和结果会被忽略。
    pub fn on_test_phase_report(&mut self, id: &str, phase: &str, outcome: &str) {
        let (Ok(phase), Ok(outcome)) = (phase.parse::<TestPhase>(), outcome.parse::<Outcome>())
        else {
            return;
        };
        self.report_phase(id, phase, outcome);
    }

    /// Handles a typed test phase report. Only the call phase assigns a
    /// bucket; the return value says what the store did with it.
    ///
    /// 处理类型化的测试阶段报告。只有 call 阶段会分配结果桶。
    pub fn report_phase(&mut self, id: &str, phase: TestPhase, outcome: Outcome) -> Option<Recorded> {
        match self.state {
            SessionState::Finalized => {
                self.warn(&t!("session.event_after_end", locale = self.locale(), name = id));
                return None;
            }
            SessionState::Idle | SessionState::Started => self.state = SessionState::Running,
            SessionState::Running => {}
        }

        if phase != TestPhase::Call {
            return None;
        }

        let recorded = lock_store(&self.store).record_outcome(id, outcome);
        match recorded {
            Recorded::Inserted => {
                if !self.config.quiet {
                    console::print_test_outcome(id, outcome);
                }
            }
            Recorded::Duplicate => {}
            Recorded::Conflict { existing } => self.warn(&t!(
                "session.conflicting_outcome",
                locale = self.locale(),
                name = id,
                existing = existing,
                outcome = outcome
            )),
        }
        Some(recorded)
    }

    /// Handles the session end event: computes the duration, renders the
    /// report and writes it. Returns the path of the written report.
    ///
    /// 处理会话结束事件：计算持续时间，渲染并写入报告。返回已写入报告的路径。
    ///
    /// # Errors / 错误
    /// Fails only when the report (or its assets) cannot be written. The
    /// session then stays open and a later call writes it again.
    pub fn on_session_end(&mut self, exit_status: i32) -> Result<PathBuf> {
        if self.state == SessionState::Finalized {
            self.warn(&t!("session.duplicate_end", locale = self.locale()));
            return Ok(self.config.output.clone());
        }

        self.session.duration = match self.start_instant {
            Some(start) => start.elapsed(),
            None => {
                self.warn(&t!("session.missing_start", locale = self.locale()));
                Duration::ZERO
            }
        };
        self.session.exit_status = exit_status;

        if !self.config.quiet {
            console::print_session_finished(&self.session, self.locale());
        }

        // Finalized only once the report is on disk.
        let html = self.render();
        let output = self.config.output.clone();
        write_report(&output, &html)?;
        if self.config.emit_assets {
            write_assets(asset_dir(&output))?;
        }
        self.state = SessionState::Finalized;

        if !self.config.quiet {
            console::print_summary(&lock_store(&self.store), self.locale());
            console::print_report_written(&output, self.locale());
        }
        Ok(output)
    }

    /// Renders the report for the current state without writing it.
    /// 渲染当前状态的报告而不写入。
    pub fn render(&self) -> String {
        render_report(&lock_store(&self.store), &self.session, self.locale())
    }
}

/// The directory the report's sibling assets belong in.
fn asset_dir(output: &Path) -> &Path {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
