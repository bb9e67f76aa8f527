//! Opaque identities for pattern entries.

use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide source of identities. Never rewinds, so an identity is
/// never handed out twice, even across matchers.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of one pattern entry.
///
/// Only a `Matcher` can mint one, when a case is appended. Identities carry
/// no ordering: use `Matcher::ids` for evaluation order.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct PatternId(NonZeroU64);

impl PatternId {
    /// Mint an identity that has never been returned before.
    pub(crate) fn fresh() -> Self {
        let raw = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        PatternId(NonZeroU64::MIN.saturating_add(raw))
    }

    /// Get the raw value, for logging.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PatternId({})", self.0)
    }
}
