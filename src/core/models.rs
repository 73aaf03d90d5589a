//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures shared by the store, the
//! recorder, the tracker and the renderer: outcomes, test phases, attached
//! descriptions and the per-session metadata.
//!
//! 此模块定义了存储、记录器、跟踪器和渲染器共享的核心数据结构：
//! 测试结果、测试阶段、附加描述以及会话元数据。

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// The title used when none is configured, or when the configured one is empty.
/// 未配置标题或配置的标题为空时使用的默认标题。
pub const DEFAULT_TITLE: &str = "Test Result";

/// The outcome bucket a test is assigned to.
/// 测试被分配到的结果桶。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
}

impl Outcome {
    /// All outcomes, in the order their sections appear in the report.
    /// 所有结果，按其在报告中出现的顺序排列。
    pub const ALL: [Outcome; 3] = [Outcome::Passed, Outcome::Failed, Outcome::Skipped];

    /// Gets the CSS class suffix used for this outcome's section.
    pub fn css_class(&self) -> &'static str {
        match self {
            Outcome::Passed => "passed",
            Outcome::Failed => "failed",
            Outcome::Skipped => "skipped",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Passed => "PASSED",
            Outcome::Failed => "FAILED",
            Outcome::Skipped => "SKIPPED",
        };
        f.write_str(label)
    }
}

/// Error returned when a string names neither an outcome nor a phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedValue(pub String);

impl fmt::Display for UnrecognizedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized value: {:?}", self.0)
    }
}

impl std::error::Error for UnrecognizedValue {}

impl FromStr for Outcome {
    type Err = UnrecognizedValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "passed" => Ok(Outcome::Passed),
            "failed" => Ok(Outcome::Failed),
            "skipped" => Ok(Outcome::Skipped),
            other => Err(UnrecognizedValue(other.to_string())),
        }
    }
}

/// The phase of a test's lifecycle that a host runner reports on.
/// Only the `Call` phase, which runs the test body, assigns a bucket.
///
/// 宿主运行器报告的测试生命周期阶段。
/// 只有运行测试主体的 `Call` 阶段才会分配结果桶。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestPhase {
    Setup,
    Call,
    Teardown,
}

impl FromStr for TestPhase {
    type Err = UnrecognizedValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "setup" => Ok(TestPhase::Setup),
            "call" => Ok(TestPhase::Call),
            "teardown" => Ok(TestPhase::Teardown),
            other => Err(UnrecognizedValue(other.to_string())),
        }
    }
}

/// A human-authored description of what a test verifies.
/// Either a single line, or an ordered list of steps.
///
/// 描述测试验证内容的人工编写说明。
/// 可以是单行文本，也可以是有序的步骤列表。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Line(String),
    Steps(Vec<String>),
}

impl From<&str> for Description {
    fn from(line: &str) -> Self {
        Description::Line(line.to_string())
    }
}

impl From<String> for Description {
    fn from(line: String) -> Self {
        Description::Line(line)
    }
}

impl<S: Into<String>> From<Vec<S>> for Description {
    fn from(steps: Vec<S>) -> Self {
        Description::Steps(steps.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Description {
    fn from(steps: [S; N]) -> Self {
        Description::Steps(steps.into_iter().map(Into::into).collect())
    }
}

/// Metadata attached to a single test identity.
/// 附加到单个测试标识的元数据。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedMetadata {
    /// What the test verifies / 测试验证的内容
    pub description: Description,
    /// Text captured by the assertion tracker. `None` until the test has run
    /// through the tracker; `Some("")` for a clean pass.
    /// 断言跟踪器捕获的文本。在测试通过跟踪器运行之前为 `None`；干净通过时为 `Some("")`。
    pub assertion: Option<String>,
}

impl AttachedMetadata {
    pub fn new(description: Description) -> Self {
        Self {
            description,
            assertion: None,
        }
    }
}

/// Session-level information shown in the report header.
/// 显示在报告头部的会话级信息。
#[derive(Debug, Clone, PartialEq)]
pub struct SessionMetadata {
    /// The report title / 报告标题
    pub title: String,
    /// Wall-clock time the session started, if a start event was seen.
    /// 会话开始的挂钟时间（如果收到了开始事件）。
    pub started_at: Option<DateTime<Local>>,
    /// Session duration. Zero when the session start was never captured.
    /// 会话持续时间。如果从未捕获会话开始，则为零。
    pub duration: Duration,
    /// The host runner's final exit status / 宿主运行器的最终退出状态
    pub exit_status: i32,
}

impl SessionMetadata {
    /// Creates metadata for a session that has not started yet. An empty
    /// title falls back to [`DEFAULT_TITLE`].
    pub fn new(title: &str) -> Self {
        Self {
            title: normalize_title(title),
            started_at: None,
            duration: Duration::ZERO,
            exit_status: 0,
        }
    }
}

impl Default for SessionMetadata {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

/// Returns the title to display, substituting the default for blank input.
pub fn normalize_title(title: &str) -> String {
    if title.trim().is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title.to_string()
    }
}
