//! # Assertion Tracker Module / 断言跟踪模块
//!
//! Wraps individual test functions so their outcome and failure message are
//! captured in the result store. The tracker only observes: panics keep
//! unwinding with their original payload and `Err` values are handed back
//! untouched, so the host runner still sees every failure.
//!
//! 包装单个测试函数，以便在结果存储中捕获其结果和失败消息。
//! 跟踪器只做观察：panic 会携带原始负载继续展开，`Err` 值原样返回，
//! 因此宿主运行器仍然能看到每一个失败。
//!
//! ```
//! use spectra::core::store::ResultStore;
//! use spectra::core::tracker::AssertionTracker;
//!
//! let tracker = AssertionTracker::new(ResultStore::shared());
//! let mut test_pass = tracker.wrap("test_pass", "Simple check", || {
//!     assert_eq!(1, 1);
//! });
//! test_pass();
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::core::models::{Description, Outcome};
use crate::core::store::{lock_store, Recorded, SharedStore};

/// Prefix for failures that were returned as `Err` rather than raised by a panic.
/// 以 `Err` 返回（而不是由 panic 引发）的失败的前缀。
pub const ERROR_PREFIX: &str = "Error: ";

/// Return types a tracked test may have.
///
/// A test returning `()` can only fail by panicking. A test returning a
/// `Result` fails softly by returning `Err`, which the tracker reports as
/// `"Error: <message>"`.
///
/// 被跟踪测试可能具有的返回类型。
pub trait TrackedReturn {
    /// The message of a returned error, or `None` when the value is a success.
    fn error_message(&self) -> Option<String>;
}

impl TrackedReturn for () {
    fn error_message(&self) -> Option<String> {
        None
    }
}

impl<T, E: fmt::Display> TrackedReturn for Result<T, E> {
    fn error_message(&self) -> Option<String> {
        self.as_ref().err().map(|e| e.to_string())
    }
}

/// Extracts the message carried by a panic payload.
/// 提取 panic 负载携带的消息。
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

/// Wraps test functions, recording what happened to them into a shared store.
/// 包装测试函数，并将其执行结果记录到共享存储中。
#[derive(Debug, Clone)]
pub struct AssertionTracker {
    store: SharedStore,
}

impl AssertionTracker {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// The store this tracker records into.
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Attaches `description` to `id` and returns a wrapped version of `test`.
    ///
    /// The returned closure has the same signature and return value as
    /// `test`. Each call records the outcome:
    /// - normal return: `Passed`, assertion text `""`;
    /// - panic: `Failed`, assertion text is the panic message, then the panic resumes;
    /// - `Err(e)`: `Failed`, assertion text `"Error: {e}"`, then the `Err` is returned.
    ///
    /// 将 `description` 附加到 `id`，并返回 `test` 的包装版本。
    pub fn wrap<D, F, R>(
        &self,
        id: &str,
        description: D,
        mut test: F,
    ) -> impl FnMut() -> R + use<D, F, R>
    where
        D: Into<Description>,
        F: FnMut() -> R,
        R: TrackedReturn,
    {
        let mut wrapped = self.wrap_with_args(id, description, move |()| test());
        move || wrapped(())
    }

    /// Like [`wrap`](Self::wrap), for tests that take arguments. Several
    /// arguments are passed as a tuple.
    ///
    /// 与 [`wrap`](Self::wrap) 相同，用于带参数的测试。多个参数以元组形式传入。
    pub fn wrap_with_args<A, D, F, R>(
        &self,
        id: &str,
        description: D,
        mut test: F,
    ) -> impl FnMut(A) -> R + use<A, D, F, R>
    where
        D: Into<Description>,
        F: FnMut(A) -> R,
        R: TrackedReturn,
    {
        lock_store(&self.store).attach(id, description.into());

        let store = self.store.clone();
        let id = id.to_string();
        move |args: A| match panic::catch_unwind(AssertUnwindSafe(|| test(args))) {
            Ok(result) => {
                match result.error_message() {
                    None => record(&store, &id, Outcome::Passed, String::new()),
                    Some(message) => record(
                        &store,
                        &id,
                        Outcome::Failed,
                        format!("{ERROR_PREFIX}{message}"),
                    ),
                }
                result
            }
            Err(payload) => {
                record(&store, &id, Outcome::Failed, panic_message(&*payload));
                panic::resume_unwind(payload)
            }
        }
    }
}

// A conflicting outcome leaves the first recording, and its assertion text, in place.
fn record(store: &SharedStore, id: &str, outcome: Outcome, assertion: String) {
    let mut store = lock_store(store);
    if !matches!(store.record_outcome(id, outcome), Recorded::Conflict { .. }) {
        store.set_assertion(id, assertion);
    }
}
