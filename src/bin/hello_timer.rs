//! Demonstration entry point: a repeating 3-second timer over the monotonic
//! clock, polled forever in a tight loop. Never exits on its own; Ctrl-C (or
//! any terminating signal) is the only way out.

use std::time::{Duration, Instant};

use polltimer::make_timer;

fn main() {
    tracing_subscriber::fmt()
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut timer = make_timer(Instant::now, Duration::from_secs(3), || {
        println!("Hello world!");
    });
    timer.start();

    tracing::info!("[hello_timer] polling a 3s repeating timer, Ctrl-C to exit");

    loop {
        timer.update();
    }
}
