//! polltimer - poll-driven timers with injected time sources.
//!
//! A caller supplies a time source closure, a fixed period, and an action
//! closure; when polled, the timer runs the action once at least one full
//! period has elapsed since the baseline. There is no background thread and
//! no OS timer integration: nothing happens between polls, and any polling
//! cadence works, from a tight loop to sporadic event-driven checks.
//!
//! Two variants share the [`Timer`] control surface:
//! - [`RepeatingTimer`] fires on every elapsed period, indefinitely.
//! - [`SingleShotTimer`] fires once, then never again.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use polltimer::clock::ManualClock;
//! use polltimer::make_timer;
//!
//! let clock = ManualClock::new();
//! let fired = Rc::new(Cell::new(0u32));
//! let count = Rc::clone(&fired);
//!
//! let mut timer = make_timer(clock.source(), 100u64, move || count.set(count.get() + 1));
//! timer.start();
//!
//! clock.advance(99);
//! timer.update(); // 99 < 100: nothing yet
//! assert_eq!(fired.get(), 0);
//!
//! clock.advance(1);
//! timer.update(); // 100 >= 100: fires, baseline moves to 100
//! assert_eq!(fired.get(), 1);
//! ```

// ============================================
// Modules
// ============================================

/// Ready-made time sources (monotonic ticks, manual test clock, wall clock)
pub mod clock;
/// The timers: the `Timer` trait, both variants, and the boxed factories
pub mod timer;

pub use timer::{make_single_shot_timer, make_timer, RepeatingTimer, SingleShotTimer, Timer};
