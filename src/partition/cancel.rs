use std::{sync::{atomic::{AtomicBool, Ordering}, Arc}, time::{Duration, Instant}};

use crate::error::{Error, Result};

/// Externally controlled stop condition for a running enumeration.
///
/// Combines an optional shared flag (set from another thread) with an optional
/// deadline. The search consults it once per step and stops with [`Error::Cancelled`].
#[derive(Clone, Debug, Default)]
pub struct Cancellation {
    flag: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl Cancellation {
    /// A cancellation that never fires.
    #[inline] pub fn never() -> Self { Self::default() }

    /// Attach a shared flag; storing `true` into it cancels the search.
    pub fn with_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.flag = Some(flag);
        self
    }

    /// Cancel once `deadline` has passed.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Cancel once `timeout` has elapsed from now.
    #[inline] pub fn with_timeout(self, timeout: Duration) -> Self { self.with_deadline(Instant::now() + timeout) }

    /// Check whether the search should stop.
    pub fn is_cancelled(&self) -> bool {
        self.flag.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed))
            || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Fail with [`Error::Cancelled`] if the search should stop.
    #[inline]
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() { Err(Error::Cancelled) } else { Ok(()) }
    }
}
