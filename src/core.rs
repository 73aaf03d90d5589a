//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Spectra: the data models,
//! the result store, the event recorder, the assertion tracker and the
//! configuration they share.
//!
//! 此模块包含 Spectra 的核心功能：数据模型、结果存储、
//! 事件记录器、断言跟踪器以及它们共享的配置。

pub mod config;
pub mod models;
pub mod recorder;
pub mod store;
pub mod tracker;

// Re-exports
pub use config::ReportConfig;
pub use models::{Description, Outcome};
pub use recorder::OutcomeRecorder;
pub use store::ResultStore;
pub use tracker::AssertionTracker;
