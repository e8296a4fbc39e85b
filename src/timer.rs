//! Poll-driven timers over injected time sources.
//!
//! A timer here owns two closures, a time source and an action, plus a
//! fixed period. It does nothing on its own: the owner calls [`Timer::update`]
//! in a loop (tight, rate-limited, or event-driven; any cadence works), and
//! the action runs on the first poll where a full period has elapsed since
//! the baseline. No background thread, no OS timer, no scheduling.

use std::ops::Sub;

/// Control surface shared by [`RepeatingTimer`] and [`SingleShotTimer`].
///
/// All three operations are infallible: they either take effect or are a
/// no-op by design. A timer starts out stopped.
pub trait Timer {
    /// Begin (or restart) the interval: marks the timer running and captures
    /// the current time as the new baseline. Calling `start` on a running
    /// timer is allowed and simply restarts the interval from now.
    fn start(&mut self);

    /// Stop the timer. Idempotent. A stopped timer never fires, regardless
    /// of how much time elapses before the next `start`.
    fn stop(&mut self);

    /// Poll the timer. If it is running and at least one full period has
    /// elapsed since the baseline, the action is invoked synchronously;
    /// otherwise this is a no-op. Stopped (and, for one-shots, already
    /// fired) timers skip the time-source read entirely.
    fn update(&mut self);
}

/// A timer that fires every time at least one full period has elapsed since
/// the last firing (or since `start`), indefinitely.
///
/// The elapsed-time check uses a fixed baseline: on a firing poll the
/// baseline becomes the time read *at that poll*, before the action ran,
/// so the action's own execution time does not stretch the interval, and
/// firings are not aligned to fixed multiples of the period when polls are
/// irregular. A poll that arrives long past the deadline still produces
/// exactly one firing.
///
/// `T` is the time-point type produced by the clock closure, `P` the period
/// type their difference compares against. `std::time::Instant` with
/// `Duration`, integer tick counts, and `chrono::DateTime<Utc>` with
/// `TimeDelta` all satisfy the bounds.
pub struct RepeatingTimer<T, P, C, A> {
    /// Time of the last firing (or of `start`). `None` while stopped.
    baseline: Option<T>,
    period: P,
    clock: C,
    action: A,
}

impl<T, P, C, A> RepeatingTimer<T, P, C, A>
where
    T: Copy + Sub<T, Output = P>,
    P: PartialOrd + Default,
    C: FnMut() -> T,
    A: FnMut(),
{
    /// Build a stopped repeating timer.
    ///
    /// The period must be strictly positive; a zero or negative period is a
    /// contract violation caught by `debug_assert!`. Release builds leave
    /// the invariant unchecked, and a non-positive period makes every poll
    /// fire (elapsed time is always >= a non-positive threshold).
    pub fn new(clock: C, period: P, action: A) -> Self {
        debug_assert!(
            period > P::default(),
            "repeating timer period must be positive"
        );
        Self {
            baseline: None,
            period,
            clock,
            action,
        }
    }
}

impl<T, P, C, A> Timer for RepeatingTimer<T, P, C, A>
where
    T: Copy + Sub<T, Output = P>,
    P: PartialOrd + Default,
    C: FnMut() -> T,
    A: FnMut(),
{
    fn start(&mut self) {
        self.baseline = Some((self.clock)());
        tracing::debug!("[timer] started");
    }

    fn stop(&mut self) {
        self.baseline = None;
        tracing::debug!("[timer] stopped");
    }

    fn update(&mut self) {
        let baseline = match self.baseline {
            Some(t) => t,
            None => return,
        };
        let now = (self.clock)();
        if now - baseline < self.period {
            return;
        }
        (self.action)();
        self.baseline = Some(now);
        tracing::trace!("[timer] fired");
    }
}

/// A timer that fires exactly once, the first time a full period has elapsed
/// since `start`, and never again.
///
/// Firing is permanent: once the action has run, every later poll is a
/// no-op, even across subsequent `stop`/`start` cycles. Stopping and
/// restarting *before* the firing re-arms the interval from the restart
/// time, same as the repeating variant.
pub struct SingleShotTimer<T, P, C, A> {
    fired: bool,
    /// Time of `start`. `None` while stopped.
    baseline: Option<T>,
    period: P,
    clock: C,
    action: A,
}

impl<T, P, C, A> SingleShotTimer<T, P, C, A>
where
    T: Copy + Sub<T, Output = P>,
    P: PartialOrd,
    C: FnMut() -> T,
    A: FnMut(),
{
    /// Build a stopped one-shot timer.
    ///
    /// Unlike [`RepeatingTimer::new`] there is no positivity check on the
    /// period: a zero or negative period is accepted and makes the timer
    /// fire on the first poll after `start`. The missing check is also why
    /// this constructor does not need `P: Default`: there is no zero value
    /// to compare against.
    pub fn new(clock: C, period: P, action: A) -> Self {
        Self {
            fired: false,
            baseline: None,
            period,
            clock,
            action,
        }
    }
}

impl<T, P, C, A> Timer for SingleShotTimer<T, P, C, A>
where
    T: Copy + Sub<T, Output = P>,
    P: PartialOrd,
    C: FnMut() -> T,
    A: FnMut(),
{
    fn start(&mut self) {
        self.baseline = Some((self.clock)());
        tracing::debug!("[timer] started");
    }

    fn stop(&mut self) {
        self.baseline = None;
        tracing::debug!("[timer] stopped");
    }

    fn update(&mut self) {
        if self.fired {
            return;
        }
        let baseline = match self.baseline {
            Some(t) => t,
            None => return,
        };
        let now = (self.clock)();
        if now - baseline < self.period {
            return;
        }
        (self.action)();
        self.fired = true;
        tracing::trace!("[timer] fired (single-shot)");
    }
}

/// Build a repeating timer and hand back sole ownership behind the [`Timer`]
/// trait.
///
/// `clock` is read once per `start` and once per running `update`; `action`
/// runs synchronously on every firing. Both closures are moved into the
/// timer and owned by it for its entire lifetime. Same period contract as
/// [`RepeatingTimer::new`].
pub fn make_timer<'a, T, P, C, A>(clock: C, period: P, action: A) -> Box<dyn Timer + 'a>
where
    T: Copy + Sub<T, Output = P> + 'a,
    P: PartialOrd + Default + 'a,
    C: FnMut() -> T + 'a,
    A: FnMut() + 'a,
{
    Box::new(RepeatingTimer::new(clock, period, action))
}

/// Build a one-shot timer and hand back sole ownership behind the [`Timer`]
/// trait. Same period behavior as [`SingleShotTimer::new`]: no positivity
/// check.
pub fn make_single_shot_timer<'a, T, P, C, A>(
    clock: C,
    period: P,
    action: A,
) -> Box<dyn Timer + 'a>
where
    T: Copy + Sub<T, Output = P> + 'a,
    P: PartialOrd + 'a,
    C: FnMut() -> T + 'a,
    A: FnMut() + 'a,
{
    Box::new(SingleShotTimer::new(clock, period, action))
}
