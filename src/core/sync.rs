//! Lock helpers for append-only shared state
//!
//! A poisoned lock only means some thread panicked while holding it. For data
//! that is only ever appended to, the contents are still valid, so the guard is
//! recovered and the poisoning reported once per acquisition.

use std::sync::{LockResult, PoisonError, RwLockReadGuard, RwLockWriteGuard};

/// Recover a read guard from a possibly poisoned RwLock
pub fn recover_read<'a, T>(
    result: LockResult<RwLockReadGuard<'a, T>>,
    context: &str,
) -> RwLockReadGuard<'a, T> {
    result.unwrap_or_else(|poison_err: PoisonError<_>| {
        log::warn!(
            "Recovered poisoned RwLock (read) in {}: a panic occurred while holding the write lock",
            context
        );
        poison_err.into_inner()
    })
}

/// Recover a write guard from a possibly poisoned RwLock
pub fn recover_write<'a, T>(
    result: LockResult<RwLockWriteGuard<'a, T>>,
    context: &str,
) -> RwLockWriteGuard<'a, T> {
    result.unwrap_or_else(|poison_err: PoisonError<_>| {
        log::warn!(
            "Recovered poisoned RwLock (write) in {}: a panic occurred while holding the lock",
            context
        );
        poison_err.into_inner()
    })
}
