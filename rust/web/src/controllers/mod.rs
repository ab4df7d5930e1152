//! Page controllers.
//!
//! Each controller turns one user action into one backend request and, on
//! success, updates exactly one display concern. Every failure is logged and
//! surfaced as a notification; nothing the caller owns is mutated on failure.
//!
//! - [`road_map::RoadMapController`]: history, results, shoe changes
//! - [`formula::FormulaController`]: formula-only prediction and its details
//! - [`combined::CombinedController`]: model training and combined prediction

pub mod combined;
pub mod formula;
pub mod road_map;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::ClientError;
use crate::notifications::{NotificationLevel, Notifier};

/// Stand-in for disabling a button while its request is outstanding.
#[derive(Debug, Default)]
pub struct ActionLatch {
    busy: AtomicBool,
}

/// Releases its latch when dropped.
#[derive(Debug)]
pub struct LatchGuard<'a> {
    latch: &'a ActionLatch,
}

impl ActionLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self, action: &'static str) -> Result<LatchGuard<'_>, ClientError> {
        match self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => Ok(LatchGuard { latch: self }),
            Err(_) => {
                tracing::debug!(action, "request already outstanding, ignoring trigger");
                Err(ClientError::Busy { action })
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for LatchGuard<'_> {
    fn drop(&mut self) {
        self.latch.busy.store(false, Ordering::Release);
    }
}

/// Log, notify and hand the error back.
pub(crate) fn report<T>(
    notifier: &Notifier,
    action: &str,
    error: ClientError,
    level: NotificationLevel,
) -> Result<T, ClientError> {
    error.log(action);
    notifier.show(level, error.user_message(action));
    Err(error)
}
