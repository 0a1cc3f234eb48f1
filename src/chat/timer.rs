use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};
use futures::FutureExt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerState {
    Pending,
    Fired,
    Cancelled,
}

/// Handle to a one-shot timer. Cancelling after it fired is a no-op.
#[derive(Clone, Debug)]
pub struct TimerHandle {
    abort: AbortHandle,
    state: Rc<Cell<TimerState>>,
}

impl TimerHandle {
    pub fn cancel(&self) {
        if self.state.get() == TimerState::Pending {
            self.state.set(TimerState::Cancelled);
            self.abort.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state.get() == TimerState::Pending
    }

    pub fn has_fired(&self) -> bool {
        self.state.get() == TimerState::Fired
    }
}

/// Something that can run a callback once after a delay.
pub trait Timer {
    fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Wraps `wait` and `callback` into a single abortable task. The returned future
/// resolves without running the callback once the handle is cancelled.
pub(crate) fn arm<W>(wait: W, callback: Box<dyn FnOnce()>) -> (TimerHandle, impl Future<Output = ()>)
where
    W: Future<Output = ()> + 'static,
{
    let (abort, registration) = AbortHandle::new_pair();
    let state = Rc::new(Cell::new(TimerState::Pending));
    let handle = TimerHandle {
        abort,
        state: state.clone(),
    };
    let task = Abortable::new(
        async move {
            wait.await;
            if state.get() == TimerState::Pending {
                state.set(TimerState::Fired);
                callback();
            }
        },
        registration,
    )
    .map(|_| ());
    (handle, task)
}

/// Timer backed by Yew's local executor; in the browser this is `setTimeout`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let (handle, task) = arm(yew::platform::time::sleep(delay), callback);
        yew::platform::spawn_local(task);
        handle
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use std::cell::RefCell;
    use std::pin::Pin;

    use futures::future;

    use super::*;

    struct Entry {
        due: Duration,
        seq: u64,
        task: Pin<Box<dyn Future<Output = ()>>>,
    }

    #[derive(Default)]
    struct Inner {
        now: Duration,
        next_seq: u64,
        entries: Vec<Entry>,
    }

    /// Deterministic timer driven by `advance`.
    #[derive(Clone, Default)]
    pub struct ManualTimer {
        inner: Rc<RefCell<Inner>>,
    }

    impl ManualTimer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn scheduled(&self) -> usize {
            self.inner.borrow().entries.len()
        }

        /// Moves the clock forward and runs every task that has come due, in due order.
        pub fn advance(&self, by: Duration) {
            let now = {
                let mut inner = self.inner.borrow_mut();
                inner.now += by;
                inner.now
            };
            loop {
                let mut due: Vec<Entry> = {
                    let mut inner = self.inner.borrow_mut();
                    let (ready, waiting) = inner.entries.drain(..).partition(|e| e.due <= now);
                    inner.entries = waiting;
                    ready
                };
                if due.is_empty() {
                    break;
                }
                due.sort_by_key(|e| (e.due, e.seq));
                for entry in due {
                    // the wait future is already resolved, so one poll finishes the task
                    let _ = entry.task.now_or_never();
                }
            }
        }
    }

    impl Timer for ManualTimer {
        fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
            let (handle, task) = arm(future::ready(()), callback);
            let mut inner = self.inner.borrow_mut();
            let entry = Entry {
                due: inner.now + delay,
                seq: inner.next_seq,
                task: Box::pin(task),
            };
            inner.next_seq += 1;
            inner.entries.push(entry);
            handle
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::manual::ManualTimer;
    use super::*;

    #[test]
    fn test_fires_once_after_delay() {
        let timer = ManualTimer::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let handle = timer.schedule_once(
            Duration::from_millis(1000),
            Box::new(move || counter.set(counter.get() + 1)),
        );

        timer.advance(Duration::from_millis(999));
        assert_eq!(hits.get(), 0);
        assert!(handle.is_pending());

        timer.advance(Duration::from_millis(1));
        assert_eq!(hits.get(), 1);
        assert!(handle.has_fired());

        timer.advance(Duration::from_millis(5000));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let timer = ManualTimer::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let handle = timer.schedule_once(
            Duration::from_millis(10),
            Box::new(move || counter.set(counter.get() + 1)),
        );
        handle.cancel();
        assert!(!handle.is_pending());

        timer.advance(Duration::from_millis(10));
        assert_eq!(hits.get(), 0);
        assert!(!handle.has_fired());
        assert_eq!(timer.scheduled(), 0);
    }

    #[test]
    fn test_cancel_after_fire_is_noop() {
        let timer = ManualTimer::new();
        let handle = timer.schedule_once(Duration::ZERO, Box::new(|| {}));
        timer.advance(Duration::ZERO);
        handle.cancel();
        assert!(handle.has_fired());
    }

    #[test]
    fn test_fires_in_due_order() {
        let timer = ManualTimer::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for (label, delay) in [("slow", 30), ("fast", 10), ("tie", 10)] {
            let order = order.clone();
            timer.schedule_once(
                Duration::from_millis(delay),
                Box::new(move || order.borrow_mut().push(label)),
            );
        }
        timer.advance(Duration::from_millis(100));
        assert_eq!(*order.borrow(), vec!["fast", "tie", "slow"]);
    }
}
