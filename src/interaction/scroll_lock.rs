use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// The document viewport a [`ScrollLock`] pins and restores.
pub trait Viewport {
    /// Current vertical scroll offset in pixels.
    fn scroll_offset(&self) -> f64;
    /// Freeze the document at `offset` so background content cannot scroll.
    fn pin(&self, offset: f64);
    /// Undo [`Viewport::pin`].
    fn unpin(&self);
    /// Jump to `offset` without a smooth-scroll animation.
    fn restore(&self, offset: f64);
}

#[derive(Debug)]
struct LockState<V> {
    viewport: V,
    holders: usize,
    offset: f64,
}

/// Reference-counted lock over the page scroll position.
///
/// The first [`ScrollLock::acquire`] captures the offset and pins the
/// viewport; releasing the last guard unpins and jumps back to that offset.
/// Guards taken while the lock is already held never recapture, so
/// overlapping modals cannot overwrite the restore point.
#[derive(Debug)]
pub struct ScrollLock<V> {
    inner: Arc<Mutex<LockState<V>>>,
}

impl<V> Clone for ScrollLock<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

fn lock_state<V>(inner: &Mutex<LockState<V>>) -> MutexGuard<'_, LockState<V>> {
    // a panic while holding the lock leaves the counters intact
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<V: Viewport> ScrollLock<V> {
    pub fn new(viewport: V) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LockState {
                viewport,
                holders: 0,
                offset: 0.0,
            })),
        }
    }

    pub fn acquire(&self) -> ScrollLockGuard<V> {
        let mut state = lock_state(&self.inner);
        if state.holders == 0 {
            state.offset = state.viewport.scroll_offset();
            state.viewport.pin(state.offset);
        }
        state.holders += 1;
        ScrollLockGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    pub fn holders(&self) -> usize {
        lock_state(&self.inner).holders
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// Offset captured by the outermost acquire, if the lock is held.
    pub fn captured_offset(&self) -> Option<f64> {
        let state = lock_state(&self.inner);
        (state.holders > 0).then_some(state.offset)
    }
}

/// Scoped hold on a [`ScrollLock`]; released on drop.
#[derive(Debug)]
pub struct ScrollLockGuard<V: Viewport> {
    inner: Arc<Mutex<LockState<V>>>,
}

impl<V: Viewport> Drop for ScrollLockGuard<V> {
    fn drop(&mut self) {
        let mut state = lock_state(&self.inner);
        state.holders = state.holders.saturating_sub(1);
        if state.holders == 0 {
            state.viewport.unpin();
            state.viewport.restore(state.offset);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Call {
        Pin(f64),
        Unpin,
        Restore(f64),
    }

    /// Records every viewport mutation; `scroll` is what the page reports.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct FakeViewport {
        pub scroll: Arc<Mutex<f64>>,
        pub calls: Arc<Mutex<Vec<Call>>>,
    }

    impl FakeViewport {
        pub fn scroll_to(&self, y: f64) {
            *self.scroll.lock().unwrap() = y;
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_offset(&self) -> f64 {
            *self.scroll.lock().unwrap()
        }

        fn pin(&self, offset: f64) {
            self.calls.lock().unwrap().push(Call::Pin(offset));
        }

        fn unpin(&self) {
            self.calls.lock().unwrap().push(Call::Unpin);
        }

        fn restore(&self, offset: f64) {
            self.scroll_to(offset);
            self.calls.lock().unwrap().push(Call::Restore(offset));
        }
    }

    #[test]
    fn test_acquire_pins_and_release_restores() {
        let viewport = FakeViewport::default();
        viewport.scroll_to(640.0);
        let lock = ScrollLock::new(viewport.clone());

        let guard = lock.acquire();
        assert!(lock.is_locked());
        assert_eq!(lock.captured_offset(), Some(640.0));
        assert_eq!(viewport.calls(), vec![Call::Pin(640.0)]);

        drop(guard);
        assert!(!lock.is_locked());
        assert_eq!(lock.captured_offset(), None);
        assert_eq!(
            viewport.calls(),
            vec![Call::Pin(640.0), Call::Unpin, Call::Restore(640.0)]
        );
        assert_eq!(viewport.scroll_offset(), 640.0);
    }

    #[test]
    fn test_nested_guards_keep_first_offset() {
        let viewport = FakeViewport::default();
        viewport.scroll_to(120.0);
        let lock = ScrollLock::new(viewport.clone());

        let first = lock.acquire();
        // the page reports a different offset while pinned
        viewport.scroll_to(0.0);
        let second = lock.acquire();
        assert_eq!(lock.holders(), 2);

        drop(first);
        assert!(lock.is_locked());
        assert_eq!(viewport.calls(), vec![Call::Pin(120.0)]);

        drop(second);
        assert_eq!(viewport.scroll_offset(), 120.0);
        assert_eq!(
            viewport.calls(),
            vec![Call::Pin(120.0), Call::Unpin, Call::Restore(120.0)]
        );
    }

    #[test]
    fn test_lock_is_reusable_after_release() {
        let viewport = FakeViewport::default();
        let lock = ScrollLock::new(viewport.clone());

        viewport.scroll_to(50.0);
        drop(lock.acquire());
        viewport.scroll_to(900.0);
        drop(lock.acquire());

        assert_eq!(viewport.scroll_offset(), 900.0);
        assert_eq!(
            viewport.calls().last(),
            Some(&Call::Restore(900.0)),
            "second acquisition should capture the new offset"
        );
    }

    #[test]
    fn test_clones_share_state() {
        let lock = ScrollLock::new(FakeViewport::default());
        let other = lock.clone();
        let _guard = other.acquire();
        assert!(lock.is_locked());
    }
}
