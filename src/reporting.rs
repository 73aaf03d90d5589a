//! # Reporting Module / 报告模块
//!
//! This module handles everything a user sees: the static HTML report and
//! the colored console echo of session and test events.
//!
//! 此模块处理用户看到的一切：静态 HTML 报告，以及会话和测试事件的彩色控制台回显。

pub mod console;
pub mod html;

// Re-export common reporting functions
pub use html::render_report;
