//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Spectra: spawning the
//! host test command, adapting its libtest output, and writing files.
//!
//! 此模块为 Spectra 提供基础设施服务：启动宿主测试命令、
//! 适配其 libtest 输出以及写入文件。

pub mod command;
pub mod fs;
pub mod libtest;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
