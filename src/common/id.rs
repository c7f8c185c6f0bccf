//! Process-unique element identifiers.
//!
//! Every element instance is stamped with an [`ElementId`] drawn from an
//! [`IdAllocator`]. Ids are strictly increasing and never reused. The
//! allocator is passed explicitly into containers; [`IdAllocator::global`]
//! hands out the process-wide counter, which is created on first use and
//! never reset, so ids stay distinguishable across documents built in the
//! same run.
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static GLOBAL_COUNTER: Lazy<Arc<AtomicU64>> = Lazy::new(|| Arc::new(AtomicU64::new(0)));

/// Unique identifier of an element instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u64);

impl ElementId {
    /// Raw numeric value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shared, thread-safe identity counter.
///
/// Cloning the allocator clones the handle, not the counter: every clone
/// draws from the same sequence.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    counter: Arc<AtomicU64>,
}

impl IdAllocator {
    /// Allocator with its own counter starting at 1.
    ///
    /// Its ids overlap those of every other counter, so it is only used where
    /// a tree never meets elements from another allocator.
    #[cfg(test)]
    pub(crate) fn isolated() -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Handle to the process-wide counter. Every public way of obtaining an
    /// allocator ends up here, so ids never repeat within a process.
    pub fn global() -> Self {
        Self {
            counter: Arc::clone(&GLOBAL_COUNTER),
        }
    }

    /// Allocate the next identifier. The first id handed out is 1.
    #[inline]
    pub fn next(&self) -> ElementId {
        ElementId(self.counter.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Last identifier handed out, or 0 if none yet.
    pub fn last(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    /// Whether two handles draw from the same counter.
    pub fn shares_counter_with(&self, other: &IdAllocator) -> bool {
        Arc::ptr_eq(&self.counter, &other.counter)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::global()
    }
}
