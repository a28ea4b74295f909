//! Request identity for fetch-on-mount views
//!
//! A view issues a token per load. Starting a newer load, or tearing the
//! view down, invalidates every earlier token so late responses can be
//! dropped instead of overwriting newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    generation: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load; all previously issued tokens become stale.
    pub fn begin(&self) -> RequestToken {
        let issued = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        RequestToken {
            issued,
            generation: Arc::clone(&self.generation),
        }
    }

    /// Invalidate every outstanding token (view teardown).
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Clone, Debug)]
pub struct RequestToken {
    issued: u64,
    generation: Arc<AtomicU64>,
}

impl RequestToken {
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.issued
    }
}

/// Holds a loading flag up for its lifetime.
///
/// The flag is raised on construction and lowered on drop, so every exit
/// path of the owning task clears it, including early returns and the task
/// being dropped mid-await.
pub struct LoadingGuard<F: FnMut(bool)> {
    set_loading: F,
}

impl<F: FnMut(bool)> LoadingGuard<F> {
    pub fn new(mut set_loading: F) -> Self {
        set_loading(true);
        Self { set_loading }
    }
}

impl<F: FnMut(bool)> Drop for LoadingGuard<F> {
    fn drop(&mut self) {
        (self.set_loading)(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::sync::Mutex;

    #[test]
    fn newer_load_invalidates_older_token() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        assert!(first.is_current());

        let second = tracker.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn cancel_invalidates_everything() {
        let tracker = RequestTracker::new();
        let token = tracker.begin();

        tracker.cancel();

        assert!(!token.is_current());
    }

    #[test]
    fn clones_share_generation() {
        let tracker = RequestTracker::new();
        let token = tracker.begin();

        tracker.clone().begin();

        assert!(!token.is_current());
    }

    #[test]
    fn loading_guard_raises_then_lowers() {
        let log = RefCell::new(Vec::new());
        {
            let _guard = LoadingGuard::new(|v| log.borrow_mut().push(v));
            assert_eq!(*log.borrow(), vec![true]);
        }
        assert_eq!(*log.borrow(), vec![true, false]);
    }

    #[test]
    fn loading_guard_lowers_on_early_return() {
        fn load(log: &RefCell<Vec<bool>>, fail: bool) -> Result<(), ()> {
            let _guard = LoadingGuard::new(|v| log.borrow_mut().push(v));
            if fail {
                return Err(());
            }
            Ok(())
        }

        let log = RefCell::new(Vec::new());
        assert!(load(&log, true).is_err());
        assert_eq!(*log.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn loading_guard_lowers_when_task_is_aborted_mid_request() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (started_tx, started_rx) = tokio::sync::oneshot::channel();

        let handle = tokio::spawn({
            let log = Arc::clone(&log);
            async move {
                let _guard = LoadingGuard::new(move |v| log.lock().unwrap().push(v));
                let _ = started_tx.send(());
                std::future::pending::<()>().await;
            }
        });

        started_rx.await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec![true]);

        handle.abort();
        assert!(handle.await.unwrap_err().is_cancelled());
        assert_eq!(*log.lock().unwrap(), vec![true, false]);
    }
}
