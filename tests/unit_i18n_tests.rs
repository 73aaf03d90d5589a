//! # I18n Unit Tests / I18n 单元测试
//!
//! Tests locale resolution and that each bundled locale reaches the report.
//!
//! 测试语言环境解析，以及每个内置语言环境都能体现在报告中。

use spectra::core::models::{Outcome, SessionMetadata};
use spectra::core::store::ResultStore;
use spectra::reporting::html::render_report;
use spectra::resolve_locale;

#[cfg(test)]
mod resolve_locale_tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(resolve_locale("en"), "en");
        assert_eq!(resolve_locale("zh-CN"), "zh-CN");
    }

    #[test]
    fn test_language_code_fallback() {
        assert_eq!(resolve_locale("en-US"), "en");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        assert_eq!(resolve_locale("invalid-lang"), "en");
        assert_eq!(resolve_locale(""), "en");
    }
}

#[cfg(test)]
mod report_language_tests {
    use super::*;

    fn one_of_each() -> ResultStore {
        let mut store = ResultStore::new();
        store.record_outcome("a", Outcome::Passed);
        store.record_outcome("b", Outcome::Failed);
        store.record_outcome("c", Outcome::Skipped);
        store
    }

    #[test]
    fn test_english_report() {
        let html = render_report(&one_of_each(), &SessionMetadata::default(), "en");
        assert!(html.contains("Passed Tests (1)"));
        assert!(html.contains("Failed Tests (1)"));
        assert!(html.contains("Skipped Tests (1)"));
        assert!(html.contains("Test Session Summary"));
    }

    #[test]
    fn test_chinese_report() {
        let html = render_report(&one_of_each(), &SessionMetadata::default(), "zh-CN");
        assert!(!html.contains("Passed Tests"));
        assert!(!html.contains("Test Session Summary"));
        assert_eq!(html.matches("<section").count(), 3);
    }

    #[test]
    fn test_unknown_locale_uses_fallback() {
        let html = render_report(&one_of_each(), &SessionMetadata::default(), "fr");
        assert!(html.contains("Passed Tests (1)"));
    }
}
