//! Call coalescing with a restarting delay window.
//!
//! [`Debouncer`] is the state machine: synchronous, clock-agnostic, driven
//! by whatever loop owns it (callers pass `now` in). [`TaskDebouncer`]
//! drives the same semantics with tokio timers for callers that just want a
//! handler to fire after a quiet period.
//!
//! Invariant for both: at most one scheduled firing exists per instance. A
//! new call while one is pending replaces the deadline and the stored
//! arguments; the superseded firing never executes.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use capsule_types::DebounceConfig;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::trace;

#[derive(Debug)]
enum DebounceState<T> {
    Idle,
    Pending { deadline: Instant, args: T },
}

/// Coalesces bursts of calls into one deferred firing with the last call's
/// arguments.
///
/// The wrapper holds the pending arguments itself rather than scheduling
/// anything; the owning loop calls [`Debouncer::poll`] with the current
/// time and invokes its handler when `poll` yields the coalesced arguments.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    state: DebounceState<T>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: DebounceState::Idle,
        }
    }

    #[must_use]
    pub fn from_config(config: &DebounceConfig) -> Self {
        Self::new(config.delay())
    }

    /// Record a call at `now`.
    ///
    /// Restarts the delay window and replaces any previously stored
    /// arguments, so a pending firing from an earlier call can never
    /// execute.
    pub fn call(&mut self, args: T, now: Instant) {
        let deadline = now + self.delay;
        if matches!(self.state, DebounceState::Pending { .. }) {
            trace!(?deadline, "debounce restarted");
        } else {
            trace!(?deadline, "debounce scheduled");
        }
        self.state = DebounceState::Pending { deadline, args };
    }

    /// Fire if the quiet period has elapsed by `now`.
    ///
    /// Returns the latest arguments exactly once per burst; afterwards the
    /// debouncer is idle again.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.state {
            DebounceState::Pending { deadline, .. } if now >= *deadline => {
                match std::mem::replace(&mut self.state, DebounceState::Idle) {
                    DebounceState::Pending { args, .. } => {
                        trace!("debounce fired");
                        Some(args)
                    }
                    DebounceState::Idle => None,
                }
            }
            _ => None,
        }
    }

    /// Drop any pending firing without invoking it. Returns whether one was
    /// pending.
    pub fn cancel(&mut self) -> bool {
        match std::mem::replace(&mut self.state, DebounceState::Idle) {
            DebounceState::Pending { .. } => {
                trace!("debounce cancelled");
                true
            }
            DebounceState::Idle => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

type SharedHandler<T> = Arc<Mutex<Box<dyn FnMut(T) + Send>>>;

/// Tokio-driven debouncer owning its handler.
///
/// Each call aborts the in-flight sleep task (if any) and schedules a new
/// one, so the handler runs once per burst with the last call's arguments
/// after `delay` of quiet. All timers share the runtime's single logical
/// timer queue; nothing here spawns extra threads.
pub struct TaskDebouncer<T> {
    delay: Duration,
    handler: SharedHandler<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> TaskDebouncer<T> {
    /// Must be created (and called) within a tokio runtime.
    #[must_use]
    pub fn new(delay: Duration, handler: impl FnMut(T) + Send + 'static) -> Self {
        Self {
            delay,
            handler: Arc::new(Mutex::new(Box::new(handler))),
            pending: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &DebounceConfig, handler: impl FnMut(T) + Send + 'static) -> Self {
        Self::new(config.delay(), handler)
    }

    /// Record a call, restarting the delay window with `args`.
    pub fn call(&mut self, args: T) {
        if let Some(task) = self.pending.take() {
            // the superseded firing must never run
            task.abort();
        }
        let delay = self.delay;
        let handler = Arc::clone(&self.handler);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            trace!("debounce fired");
            if let Ok(mut handler) = handler.lock() {
                (handler)(args);
            }
        }));
    }

    /// Abort any pending firing. Returns whether one was scheduled and had
    /// not yet run.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(task) if !task.is_finished() => {
                task.abort();
                trace!("debounce cancelled");
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
