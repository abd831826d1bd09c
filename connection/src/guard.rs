use std::sync::{Mutex, MutexGuard, TryLockError};
use std::thread;

use common::err::engine_error::SqliteError;
use common::err::CResult;

/// Per-handle mutex. Regular operations acquire with `try` and surface a
/// threading violation on contention; teardown paths spin with a yield so
/// cleanup is never skipped.
#[derive(Default)]
pub(crate) struct HandleGuard {
    lock: Mutex<()>,
}

impl HandleGuard {
    pub fn new() -> Self {
        HandleGuard::default()
    }

    pub fn try_acquire(&self) -> CResult<MutexGuard<'_, ()>> {
        match self.lock.try_lock() {
            Ok(guard) => Ok(guard),
            Err(TryLockError::Poisoned(poisoned)) => Ok(poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => Err(SqliteError::ThreadingViolation),
        }
    }

    pub fn acquire_yielding(&self) -> MutexGuard<'_, ()> {
        loop {
            match self.lock.try_lock() {
                Ok(guard) => return guard,
                Err(TryLockError::Poisoned(poisoned)) => return poisoned.into_inner(),
                Err(TryLockError::WouldBlock) => thread::yield_now(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contention_is_a_threading_violation() {
        let guard = HandleGuard::new();
        let held = guard.try_acquire().unwrap();
        assert!(matches!(
            guard.try_acquire(),
            Err(SqliteError::ThreadingViolation)
        ));
        drop(held);
        assert!(guard.try_acquire().is_ok());
    }
}
