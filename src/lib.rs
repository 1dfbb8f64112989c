//! This library provides the innermost primitive of a benchmarking harness: a timed dispatch loop.
//!
//! Given a callable and an evaluation count, the loop invokes the callable that many times, hands each
//! result to a [`Sink`] so the optimizer cannot discard the work, and returns the elapsed time of the
//! whole loop in **nanoseconds**, as read from a monotonic [`Clock`].
//!
//! The callable comes in two shapes, mirroring the two ways a benchmark body is usually written:
//! - a nullary closure ([`loop_nullary`], [`Nullary`]);
//! - a closure over a caller-owned state value, which is passed by reference, unchanged, to every
//!   evaluation ([`loop_with_state`], [`WithState`]).
//!
//! Everything else a benchmarking framework does (warm-up, choosing evaluation counts, statistics,
//! reporting) is left to the caller.
//!
//! ### Simple example
//!
//! ```rust
#![doc = include_str!("../demos/simple_loop.rs")]
//! ```
//!
//! ### Measured batches example
//!
//! ```rust
#![doc = include_str!("../demos/measured_batches.rs")]
//! ```
#![deny(clippy::unwrap_used)]

mod clock;
pub use clock::*;

mod sink;
pub use sink::*;

mod invoke;
pub use invoke::*;

mod error;
pub use error::*;

mod timed_loop;
pub use timed_loop::*;

mod measured;
pub use measured::*;

#[cfg(feature = "tokio")]
mod async_loop;
#[cfg(feature = "tokio")]
pub use async_loop::*;
