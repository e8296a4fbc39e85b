//! Polling hot-path benches: `update()` is meant to sit in a caller's main
//! loop, so the no-op paths matter as much as the firing path.

use std::cell::Cell;
use std::hint::black_box;
use std::rc::Rc;

use criterion::{criterion_group, criterion_main, Criterion};
use polltimer::clock::{ManualClock, TickClock};
use polltimer::make_timer;

fn bench_update(c: &mut Criterion) {
    // Stopped timer: the cheapest possible poll, no clock read at all.
    c.bench_function("update_stopped", |b| {
        let mut timer = make_timer(TickClock::new().source(), u64::MAX / 2, || {});
        b.iter(|| timer.update());
    });

    // Running but never due: one clock read plus the elapsed comparison.
    c.bench_function("update_idle", |b| {
        let mut timer = make_timer(TickClock::new().source(), u64::MAX / 2, || {});
        timer.start();
        b.iter(|| timer.update());
    });

    // Firing on every poll: period 1 tick, clock advanced 1 per iteration.
    c.bench_function("update_firing", |b| {
        let clock = ManualClock::new();
        let fired = Rc::new(Cell::new(0u64));
        let inner = Rc::clone(&fired);
        let mut timer = make_timer(clock.source(), 1u64, move || inner.set(inner.get() + 1));
        timer.start();
        b.iter(|| {
            clock.advance(1);
            timer.update();
        });
        black_box(fired.get());
    });
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
