//! Ready-made time sources for the timers.
//!
//! The timers accept any `FnMut() -> T` closure as a time source; this
//! module just packages the usual three: a monotonic millisecond tick
//! counter for production intervals, a manually-advanced clock for
//! deterministic tests and simulations, and a wall-clock source for code
//! that genuinely wants calendar time.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic millisecond tick counter, anchored at creation.
///
/// Backed by `std::time::Instant`, so ticks never go backwards and are
/// immune to wall-clock adjustments. `Copy`: `source()` hands out
/// independent closures that all read from the same anchor.
#[derive(Clone, Copy, Debug)]
pub struct TickClock {
    epoch: Instant,
}

impl TickClock {
    /// Anchor a new tick counter at the current instant (tick 0).
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    /// Milliseconds elapsed since this clock was created.
    pub fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    /// Time-source closure reading this clock. The closure copies the
    /// anchor, so it stays valid after the `TickClock` value is dropped.
    pub fn source(&self) -> impl FnMut() -> u64 {
        let clock = *self;
        move || clock.now_ms()
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Manually-advanced clock for deterministic tests and simulations.
///
/// A `ManualClock` is a shared handle: clones and the closures from
/// [`source`](ManualClock::source) all observe `advance`/`set` made through
/// any handle. Time only moves when the owner says so, which is what makes
/// elapsed-time behavior testable without sleeping. Single-threaded by
/// construction (the handle is an `Rc`).
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    /// New clock reading 0.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// New clock reading `start`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Move the clock forward by `ticks`.
    pub fn advance(&self, ticks: u64) {
        self.now.set(self.now.get() + ticks);
    }

    /// Jump the clock to an absolute reading.
    pub fn set(&self, now: u64) {
        self.now.set(now);
    }

    /// Current reading.
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    /// Time-source closure reading this clock. Shares the underlying
    /// reading with the handle it came from and with every other source.
    pub fn source(&self) -> impl FnMut() -> u64 {
        let now = Rc::clone(&self.now);
        move || now.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Wall-clock time source: milliseconds since the Unix epoch.
///
/// Wall time can jump (NTP steps, manual adjustment), so interval work
/// should normally prefer [`TickClock`]; this exists for timers that must
/// follow calendar time.
pub fn wall_millis() -> impl FnMut() -> i64 {
    || chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::make_timer;

    // 2020-01-01T00:00:00Z; any sane wall clock reads later than this.
    const Y2020_MS: i64 = 1_577_836_800_000;

    #[test]
    fn test_manual_clock_starts_at_zero() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), 0);
    }

    #[test]
    fn test_manual_clock_advance_accumulates() {
        let clock = ManualClock::starting_at(5);
        clock.advance(10);
        clock.advance(3);
        assert_eq!(clock.now(), 18);

        clock.set(100);
        assert_eq!(clock.now(), 100);
    }

    #[test]
    fn test_manual_clock_sources_share_reading() {
        let clock = ManualClock::new();
        let mut a = clock.source();
        let mut b = clock.clone().source();

        clock.advance(7);
        assert_eq!(a(), 7);
        assert_eq!(b(), 7);

        // Advancing through a clone is visible everywhere.
        clock.clone().advance(3);
        assert_eq!(a(), 10);
        assert_eq!(clock.now(), 10);
    }

    #[test]
    fn test_tick_clock_is_monotonic() {
        let clock = TickClock::new();
        let mut source = clock.source();
        let a = clock.now_ms();
        let b = source();
        let c = clock.now_ms();
        assert!(a <= b && b <= c);
    }

    #[test]
    fn test_tick_clock_drives_a_timer() {
        let clock = TickClock::new();
        // Far-future deadline: the poll must be a clean no-op.
        let mut timer = make_timer(clock.source(), u64::MAX / 2, || {
            panic!("must not fire")
        });
        timer.start();
        timer.update();
    }

    #[test]
    fn test_wall_millis_reads_sane_epoch_time() {
        let mut wall = wall_millis();
        assert!(wall() > Y2020_MS);
    }

    #[test]
    fn test_wall_millis_drives_a_timer() {
        // One hour period: never due within the test.
        let mut timer = make_timer(wall_millis(), 3_600_000i64, || {
            panic!("must not fire")
        });
        timer.start();
        timer.update();
    }
}
