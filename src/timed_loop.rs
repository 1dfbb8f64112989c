//! The timed dispatch loop.

use crate::{Clock, EvalError, Invoke, MonotonicClock, Nullary, Sink, WithState};

/// Evaluates `callable` `eval_count` times, consuming each result with `sink`, and returns the elapsed
/// time of the whole loop in nanoseconds as read from `clock`.
///
/// A zero or negative `eval_count` performs no evaluations; the (near-zero) elapsed time is still
/// returned. Evaluations are strictly sequential, and `sink.consume` receives the results in
/// evaluation order, exactly once each.
///
/// The elapsed time saturates at zero should `clock` ever go backwards.
///
/// # Panics
///
/// A panic raised by `callable` or by `sink` unwinds through this function immediately; no elapsed
/// time is produced for the aborted loop.
pub fn timed_loop<C, S, I>(clock: &C, sink: &mut S, eval_count: i64, mut callable: I) -> u64
where
    C: Clock + ?Sized,
    S: Sink<I::Output> + ?Sized,
    I: Invoke,
{
    log::debug!("`timed_loop` start: eval_count={eval_count}");

    let start = clock.now();
    let mut remaining = eval_count;
    while remaining > 0 {
        sink.consume(callable.invoke());
        remaining -= 1;
    }
    let elapsed = clock.now().saturating_sub(start);

    log::debug!("`timed_loop` end: eval_count={eval_count}, elapsed_nanos={elapsed}");
    elapsed
}

/// Fallible counterpart of [`timed_loop`] for bodies returning [`Result`].
///
/// `Ok` values are consumed by `sink`. The first `Err` stops the loop at once: if it comes from
/// evaluation `k`, the callable has run `k` times, `sink` has consumed `k - 1` values, and the error
/// is returned wrapped in an [`EvalError`] without any elapsed time.
pub fn try_timed_loop<C, S, I, T, E>(
    clock: &C,
    sink: &mut S,
    eval_count: i64,
    mut callable: I,
) -> Result<u64, EvalError<E>>
where
    C: Clock + ?Sized,
    S: Sink<T> + ?Sized,
    I: Invoke<Output = Result<T, E>>,
{
    log::debug!("`try_timed_loop` start: eval_count={eval_count}");

    let start = clock.now();
    let mut remaining = eval_count;
    while remaining > 0 {
        let value = callable.invoke().map_err(|source| {
            // Only computed on failure.
            let evaluation = (eval_count - remaining + 1) as u64;
            log::debug!(
                "`try_timed_loop` aborted: evaluation={evaluation}, eval_count={eval_count}"
            );
            EvalError {
                evaluation,
                eval_count,
                source,
            }
        })?;
        sink.consume(value);
        remaining -= 1;
    }
    let elapsed = clock.now().saturating_sub(start);

    log::debug!("`try_timed_loop` end: eval_count={eval_count}, elapsed_nanos={elapsed}");
    Ok(elapsed)
}

/// Times `eval_count` evaluations of the nullary `f` on a [`MonotonicClock`].
pub fn loop_nullary<S, F, T>(sink: &mut S, eval_count: i64, f: F) -> u64
where
    S: Sink<T> + ?Sized,
    F: FnMut() -> T,
{
    timed_loop(&MonotonicClock::new(), sink, eval_count, Nullary(f))
}

/// Times `eval_count` evaluations of `f(state)` on a [`MonotonicClock`].
///
/// The same `state` reference is passed to every evaluation.
pub fn loop_with_state<S, St, F, T>(sink: &mut S, eval_count: i64, f: F, state: &St) -> u64
where
    S: Sink<T> + ?Sized,
    St: ?Sized,
    F: FnMut(&St) -> T,
{
    timed_loop(&MonotonicClock::new(), sink, eval_count, WithState::new(f, state))
}

/// Fallible counterpart of [`loop_nullary`]; see [`try_timed_loop`].
pub fn try_loop_nullary<S, F, T, E>(
    sink: &mut S,
    eval_count: i64,
    f: F,
) -> Result<u64, EvalError<E>>
where
    S: Sink<T> + ?Sized,
    F: FnMut() -> Result<T, E>,
{
    try_timed_loop(&MonotonicClock::new(), sink, eval_count, Nullary(f))
}

/// Fallible counterpart of [`loop_with_state`]; see [`try_timed_loop`].
pub fn try_loop_with_state<S, St, F, T, E>(
    sink: &mut S,
    eval_count: i64,
    f: F,
    state: &St,
) -> Result<u64, EvalError<E>>
where
    S: Sink<T> + ?Sized,
    St: ?Sized,
    F: FnMut(&St) -> Result<T, E>,
{
    try_timed_loop(
        &MonotonicClock::new(),
        sink,
        eval_count,
        WithState::new(f, state),
    )
}
