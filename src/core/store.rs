//! # Result Store Module / 结果存储模块
//!
//! In-memory bookkeeping for one test session: the three insertion-ordered
//! outcome buckets and the metadata attached to individual tests. Nothing in
//! here performs I/O.
//!
//! 单个测试会话的内存记录：三个按插入顺序排列的结果桶，
//! 以及附加到各个测试的元数据。此处不执行任何 I/O。

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::models::{AttachedMetadata, Description, Outcome};

/// A store shared between the recorder and any number of assertion trackers.
/// 在记录器和任意数量的断言跟踪器之间共享的存储。
pub type SharedStore = Arc<Mutex<ResultStore>>;

/// Locks a shared store. A poisoned lock still holds consistent data, since
/// no user code ever runs while it is held, so the guard is recovered.
pub fn lock_store(store: &SharedStore) -> MutexGuard<'_, ResultStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

/// What happened to a `record_outcome` call.
/// `record_outcome` 调用的处理结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recorded {
    /// The id was appended to its bucket.
    Inserted,
    /// The id was already in the same bucket; nothing changed.
    Duplicate,
    /// The id was already in a different bucket. The first outcome is kept.
    Conflict { existing: Outcome },
}

/// Outcome buckets plus attached metadata for a single session.
/// 单个会话的结果桶及附加元数据。
#[derive(Debug, Default, Clone)]
pub struct ResultStore {
    passed: Vec<String>,
    failed: Vec<String>,
    skipped: Vec<String>,
    /// Which bucket each recorded id landed in.
    assigned: HashMap<String, Outcome>,
    attached: HashMap<String, AttachedMetadata>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a fresh store for sharing with trackers.
    pub fn shared() -> SharedStore {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Records `id` into the bucket for `outcome`.
    ///
    /// Recording is idempotent: a repeated (id, outcome) pair leaves the
    /// bucket untouched. When `id` already sits in another bucket the first
    /// outcome wins and the conflict is reported back.
    ///
    /// 将 `id` 记录到 `outcome` 对应的桶中。
    /// 记录是幂等的：重复的 (id, outcome) 不会改变桶。
    /// 如果 `id` 已经在另一个桶中，则保留第一个结果并返回冲突。
    pub fn record_outcome(&mut self, id: &str, outcome: Outcome) -> Recorded {
        match self.assigned.get(id) {
            Some(existing) if *existing == outcome => Recorded::Duplicate,
            Some(existing) => Recorded::Conflict {
                existing: *existing,
            },
            None => {
                self.assigned.insert(id.to_string(), outcome);
                self.bucket_mut(outcome).push(id.to_string());
                Recorded::Inserted
            }
        }
    }

    /// Creates or replaces the metadata for `id`, clearing any assertion text.
    pub fn attach(&mut self, id: &str, description: Description) {
        self.attached
            .insert(id.to_string(), AttachedMetadata::new(description));
    }

    /// Sets the assertion text on an already attached `id`.
    /// Returns `false`, changing nothing, when `id` was never attached.
    pub fn set_assertion(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.attached.get_mut(id) {
            Some(metadata) => {
                metadata.assertion = Some(text.into());
                true
            }
            None => false,
        }
    }

    /// The ids in one bucket, in the order they were recorded.
    pub fn bucket(&self, outcome: Outcome) -> &[String] {
        match outcome {
            Outcome::Passed => &self.passed,
            Outcome::Failed => &self.failed,
            Outcome::Skipped => &self.skipped,
        }
    }

    fn bucket_mut(&mut self, outcome: Outcome) -> &mut Vec<String> {
        match outcome {
            Outcome::Passed => &mut self.passed,
            Outcome::Failed => &mut self.failed,
            Outcome::Skipped => &mut self.skipped,
        }
    }

    pub fn outcome_of(&self, id: &str) -> Option<Outcome> {
        self.assigned.get(id).copied()
    }

    pub fn metadata(&self, id: &str) -> Option<&AttachedMetadata> {
        self.attached.get(id)
    }

    /// Number of recorded ids per bucket, as (passed, failed, skipped).
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.passed.len(), self.failed.len(), self.skipped.len())
    }

    /// Total number of recorded ids across all buckets.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}
