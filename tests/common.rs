#![allow(dead_code)]

use measured_loop::{timed_loop, Clock, Invoke, RecordingSink};
use std::{cell::Cell, rc::Rc};

/// Deterministic [`Clock`] that advances by `step` nanoseconds every time it is read.
pub struct StepClock {
    next: Cell<u64>,
    step: u64,
}

impl StepClock {
    pub fn new(start: u64, step: u64) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }

    pub fn reads(&self, start: u64) -> u64 {
        (self.next.get() - start) / self.step
    }
}

impl Clock for StepClock {
    fn now(&self) -> u64 {
        let t = self.next.get();
        self.next.set(t + self.step);
        t
    }
}

/// [`Clock`] whose time only moves when a test moves it; clones share the same time.
#[derive(Clone, Default)]
pub struct ManualClock(Rc<Cell<u64>>);

impl ManualClock {
    pub fn advance(&self, nanos: u64) {
        self.0.set(self.0.get() + nanos);
    }

    pub fn set(&self, nanos: u64) {
        self.0.set(nanos);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.0.get()
    }
}

/// Shared counter of callable invocations.
#[derive(Clone, Default)]
pub struct CallCounter(Rc<Cell<u64>>);

impl CallCounter {
    pub fn hit(&self) -> u64 {
        let n = self.0.get() + 1;
        self.0.set(n);
        n
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

pub struct LoopTestCase<T> {
    pub case_name: &'static str,
    pub eval_count: i64,
    pub expected_calls: u64,
    pub expected_values: Vec<T>,
}

/// Runs `callable` through [`timed_loop`] on a [`StepClock`] and checks calls, consumed values and
/// the elapsed time, which must be exactly one clock step since the clock is read twice.
pub fn run_loop_test<I, T>(callable: I, calls: &CallCounter, test_case: LoopTestCase<T>)
where
    I: Invoke<Output = T>,
    T: PartialEq + std::fmt::Debug,
{
    let LoopTestCase {
        case_name,
        eval_count,
        expected_calls,
        expected_values,
    } = test_case;

    let clock = StepClock::new(1_000, 7);
    let mut sink = RecordingSink::new();
    let elapsed = timed_loop(&clock, &mut sink, eval_count, callable);

    assert_eq!(calls.get(), expected_calls, "{case_name}: number of calls");
    assert_eq!(
        sink.values(),
        expected_values.as_slice(),
        "{case_name}: consumed values"
    );
    assert_eq!(elapsed, 7, "{case_name}: elapsed nanos");
    assert_eq!(clock.reads(1_000), 2, "{case_name}: clock reads");
}
