//! Consumption sinks ("black holes") that keep benchmarked results observable.

use std::hint::black_box;

/// Consumer of the values produced by a benchmarked callable.
///
/// The only contract is that `consume` observably uses its input, so that the optimizer cannot prove
/// the producing call dead and elide it. A sink that fails does so by panicking; the panic propagates
/// through the loop to its caller.
pub trait Sink<T> {
    fn consume(&mut self, value: T);
}

impl<T, S: Sink<T> + ?Sized> Sink<T> for &mut S {
    fn consume(&mut self, value: T) {
        (**self).consume(value)
    }
}

/// Default sink: passes every value through [`black_box`] and keeps a count of consumed values.
#[derive(Debug, Default)]
pub struct BlackHole {
    consumed: u64,
}

impl BlackHole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values consumed so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }
}

impl<T> Sink<T> for BlackHole {
    #[inline]
    fn consume(&mut self, value: T) {
        black_box(value);
        self.consumed = black_box(self.consumed + 1);
    }
}

/// Sink that counts consumed values without retaining them.
///
/// Unlike [`BlackHole`], the counter is a plain increment; values still go through [`black_box`].
#[derive(Debug, Default)]
pub struct CountingSink {
    count: u64,
}

impl CountingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl<T> Sink<T> for CountingSink {
    #[inline]
    fn consume(&mut self, value: T) {
        black_box(value);
        self.count += 1;
    }
}

/// Sink that records every consumed value, in consumption order.
///
/// Recording allocates, so timings taken with this sink include that cost. It is meant for
/// inspecting what a benchmark body produces rather than for measuring it.
#[derive(Debug, Clone)]
pub struct RecordingSink<T> {
    values: Vec<T>,
}

impl<T> RecordingSink<T> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Values consumed so far, oldest first.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> Default for RecordingSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sink<T> for RecordingSink<T> {
    fn consume(&mut self, value: T) {
        self.values.push(value);
    }
}
