//! Shapes of benchmarked callables.
//!
//! A benchmark body is either nullary or takes a caller-owned state value. The shape is fixed by the
//! type passed to the loop, so the dispatch happens once, at compile time, not on every evaluation.

/// A callable the timed loop can evaluate repeatedly.
pub trait Invoke {
    type Output;

    fn invoke(&mut self) -> Self::Output;
}

/// Zero-argument callable.
#[derive(Debug, Clone, Copy)]
pub struct Nullary<F>(pub F);

impl<F, T> Invoke for Nullary<F>
where
    F: FnMut() -> T,
{
    type Output = T;

    #[inline]
    fn invoke(&mut self) -> T {
        (self.0)()
    }
}

/// One-argument callable bound to a state value.
///
/// Every evaluation receives the very same `&S`; the state is neither copied nor updated between
/// evaluations. Whatever interior mutability `S` offers is the callable's business.
#[derive(Debug)]
pub struct WithState<'s, F, S: ?Sized> {
    f: F,
    state: &'s S,
}

impl<'s, F, S: ?Sized> WithState<'s, F, S> {
    pub fn new(f: F, state: &'s S) -> Self {
        Self { f, state }
    }

    pub fn state(&self) -> &'s S {
        self.state
    }
}

impl<'s, F, S, T> Invoke for WithState<'s, F, S>
where
    F: FnMut(&S) -> T,
    S: ?Sized,
{
    type Output = T;

    #[inline]
    fn invoke(&mut self) -> T {
        (self.f)(self.state)
    }
}

impl<I: Invoke + ?Sized> Invoke for &mut I {
    type Output = I::Output;

    #[inline]
    fn invoke(&mut self) -> I::Output {
        (**self).invoke()
    }
}
