use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::{Condvar, Mutex, MutexGuard};
use tracing::{debug, trace, warn};

use crate::error::GameResult;
use crate::formatter;

#[derive(Debug, Default)]
struct TimerState {
    running: bool,
    shutdown: bool,
}

struct TimerShared {
    state: Mutex<TimerState>,
    wakeup: Condvar,
    delay: Duration,
}

/// Runs an action on a background thread every `delay` while started.
///
/// The thread is parked on a condition variable while stopped, so starting and
/// stopping are cheap and immediate. Stopping never interrupts an action that is
/// already running; [`Timer::shutdown`] waits for it.
pub struct Timer {
    name: String,
    shared: Arc<TimerShared>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Timer {
    pub fn new(name: impl Into<String>, delay: Duration, action: impl Fn() + Send + 'static) -> GameResult<Self> {
        let name = name.into();
        let shared = Arc::new(TimerShared {
            state: Mutex::new(TimerState::default()),
            wakeup: Condvar::new(),
            delay,
        });

        let thread_shared = Arc::clone(&shared);
        let handle = thread::Builder::new()
            .name(name.clone())
            .spawn(move || run(&thread_shared, action))?;

        debug!(timer = %name, ?delay, "Timer created");
        Ok(Self {
            name,
            shared,
            handle: Mutex::new(Some(handle)),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn delay(&self) -> Duration {
        self.shared.delay
    }

    pub fn is_running(&self) -> bool {
        self.shared.state.lock().running
    }

    pub fn start(&self) {
        let mut state = self.shared.state.lock();
        if state.shutdown {
            warn!(timer = %self.name, "Cannot start a timer that has been shut down");
            return;
        }
        state.running = true;
        self.shared.wakeup.notify_all();
        trace!(timer = %self.name, "Timer started");
    }

    pub fn stop(&self) {
        let mut state = self.shared.state.lock();
        state.running = false;
        self.shared.wakeup.notify_all();
        trace!(timer = %self.name, "Timer stopped");
    }

    /// Stops the timer for good and waits for its thread to finish.
    pub fn shutdown(&self) {
        {
            let mut state = self.shared.state.lock();
            state.running = false;
            state.shutdown = true;
            self.shared.wakeup.notify_all();
        }

        let Some(handle) = self.handle.lock().take() else {
            return;
        };
        // A timer dropped from within its own action cannot wait for itself.
        if handle.thread().id() == thread::current().id() {
            return;
        }
        if handle.join().is_err() {
            warn!(timer = %self.name, "Timer thread panicked");
        }
        debug!(timer = %self.name, "Timer shut down");
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run(shared: &TimerShared, action: impl Fn()) {
    let mut state = shared.state.lock();
    loop {
        if state.shutdown {
            break;
        }
        if !state.running {
            shared.wakeup.wait(&mut state);
            continue;
        }

        // Being woken early means someone started, stopped or shut us down; re-check.
        if !shared.wakeup.wait_for(&mut state, shared.delay).timed_out() {
            continue;
        }
        if !state.running || state.shutdown {
            continue;
        }

        formatter::increment_tick();
        MutexGuard::unlocked(&mut state, &action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_timer_ticks_only_while_running() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ticks);
        let timer = Timer::new("test", Duration::from_millis(2), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        thread::sleep(Duration::from_millis(30));
        assert_eq!(ticks.load(Ordering::SeqCst), 0);

        timer.start();
        thread::sleep(Duration::from_millis(60));
        timer.stop();
        thread::sleep(Duration::from_millis(20));

        let after_stop = ticks.load(Ordering::SeqCst);
        assert!(after_stop > 0);
        thread::sleep(Duration::from_millis(40));
        assert_eq!(ticks.load(Ordering::SeqCst), after_stop);
    }
}
