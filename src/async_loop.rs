//! Timed loop over async benchmark bodies.

use crate::{Clock, MonotonicClock, Sink};
use std::future::Future;

/// Async counterpart of [`timed_loop`](crate::timed_loop) for a nullary body returning a future.
///
/// Each future is awaited to completion before the next one is created, so evaluations remain strictly
/// sequential. The elapsed time includes whatever time the futures spend suspended.
pub async fn timed_loop_async<C, S, F, Fut>(
    clock: &C,
    sink: &mut S,
    eval_count: i64,
    mut f: F,
) -> u64
where
    C: Clock + ?Sized,
    S: Sink<Fut::Output> + ?Sized,
    F: FnMut() -> Fut,
    Fut: Future,
{
    log::debug!("`timed_loop_async` start: eval_count={eval_count}");

    let start = clock.now();
    let mut remaining = eval_count;
    while remaining > 0 {
        sink.consume(f().await);
        remaining -= 1;
    }
    let elapsed = clock.now().saturating_sub(start);

    log::debug!("`timed_loop_async` end: eval_count={eval_count}, elapsed_nanos={elapsed}");
    elapsed
}

/// Times `eval_count` evaluations of the async body `f` on a dedicated current-thread [tokio] runtime.
///
/// The runtime is built before timing starts. Must not be called from within a tokio runtime.
pub fn loop_nullary_tokio<S, F, Fut>(sink: &mut S, eval_count: i64, f: F) -> u64
where
    S: Sink<Fut::Output> + ?Sized,
    F: FnMut() -> Fut,
    Fut: Future,
{
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("tokio runtime error on `loop_nullary_tokio`");
    let clock = MonotonicClock::new();
    rt.block_on(timed_loop_async(&clock, sink, eval_count, f))
}
