//! Pairing of a benchmark body with the construction of its state.

use crate::{
    timed_loop, try_timed_loop, Clock, EvalError, MonotonicClock, Nullary, Sink, WithState,
};
use std::time::Duration;

/// Result of one timed batch: how many evaluations were requested and how long the loop took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub eval_count: i64,
    pub elapsed_nanos: u64,
}

impl Sample {
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_nanos)
    }

    /// Number of evaluations actually performed, i.e. `max(eval_count, 0)`.
    pub fn evaluations(&self) -> u64 {
        self.eval_count.max(0) as u64
    }
}

/// A benchmark body evaluated against the state built for its batch.
pub trait Body<S: ?Sized> {
    type Output;

    fn call(&mut self, state: &S) -> Self::Output;
}

impl<F, T> Body<()> for Nullary<F>
where
    F: FnMut() -> T,
{
    type Output = T;

    #[inline]
    fn call(&mut self, _: &()) -> T {
        (self.0)()
    }
}

/// Body taking the batch state by reference.
#[derive(Debug, Clone, Copy)]
pub struct Stateful<F>(pub F);

impl<F, S, T> Body<S> for Stateful<F>
where
    F: FnMut(&S) -> T,
    S: ?Sized,
{
    type Output = T;

    #[inline]
    fn call(&mut self, state: &S) -> T {
        (self.0)(state)
    }
}

fn no_state() {}

/// A benchmark body together with the function that builds its state.
///
/// Each call to [`batch`](Measured::batch) builds a fresh state outside the timed region, then times
/// `eval_count` evaluations of the body, all of them receiving that same state.
///
/// The clock defaults to [`MonotonicClock`] and can be replaced with
/// [`with_clock`](Measured::with_clock).
pub struct Measured<SF, B, C = MonotonicClock> {
    state_fn: SF,
    body: B,
    clock: C,
}

impl<SF, F> Measured<SF, Stateful<F>> {
    /// Creates a [`Measured`] whose body `f` receives the state built by `state_fn`.
    pub fn new(state_fn: SF, f: F) -> Self {
        Self {
            state_fn,
            body: Stateful(f),
            clock: MonotonicClock::new(),
        }
    }
}

impl<F> Measured<fn(), Nullary<F>> {
    /// Creates a [`Measured`] with no state whose body `f` takes no arguments.
    pub fn nullary(f: F) -> Self {
        Self {
            state_fn: no_state as fn(),
            body: Nullary(f),
            clock: MonotonicClock::new(),
        }
    }
}

impl<SF, B, C> Measured<SF, B, C> {
    /// Creates a new [`Measured`] identical to `self` but timed with `clock`.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Measured<SF, B, C2> {
        Measured {
            state_fn: self.state_fn,
            body: self.body,
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<SF, B, C, S> Measured<SF, B, C>
where
    SF: FnMut() -> S,
    B: Body<S>,
    C: Clock,
{
    /// Builds the state, then times `eval_count` evaluations of the body, consuming each result with
    /// `sink`. See [`timed_loop`].
    pub fn batch<K>(&mut self, sink: &mut K, eval_count: i64) -> Sample
    where
        K: Sink<B::Output> + ?Sized,
    {
        let state = (self.state_fn)();
        let body = &mut self.body;
        let elapsed_nanos = timed_loop(
            &self.clock,
            sink,
            eval_count,
            WithState::new(|s: &S| body.call(s), &state),
        );
        log::trace!("`Measured::batch`: eval_count={eval_count}, elapsed_nanos={elapsed_nanos}");
        Sample {
            eval_count,
            elapsed_nanos,
        }
    }

    /// Fallible counterpart of [`batch`](Measured::batch) for bodies returning [`Result`].
    /// See [`try_timed_loop`].
    pub fn try_batch<K, T, E>(
        &mut self,
        sink: &mut K,
        eval_count: i64,
    ) -> Result<Sample, EvalError<E>>
    where
        B: Body<S, Output = Result<T, E>>,
        K: Sink<T> + ?Sized,
    {
        let state = (self.state_fn)();
        let body = &mut self.body;
        let elapsed_nanos = try_timed_loop(
            &self.clock,
            sink,
            eval_count,
            WithState::new(|s: &S| body.call(s), &state),
        )?;
        log::trace!(
            "`Measured::try_batch`: eval_count={eval_count}, elapsed_nanos={elapsed_nanos}"
        );
        Ok(Sample {
            eval_count,
            elapsed_nanos,
        })
    }
}
