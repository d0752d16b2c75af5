//! Single-input, single-output transformation stages and their composition
//!
//! Stages run strictly in order; the first failing stage ends the run.

mod chain;
pub mod stages;

pub use chain::ProcessorChain;

use crate::Result;
use std::marker::PhantomData;

/// A transformation from `I` to `O`
pub trait Processor<I, O>: Send + Sync {
    fn process(&self, input: I) -> Result<O>;
}

impl<I, O, P: Processor<I, O> + ?Sized> Processor<I, O> for Box<P> {
    fn process(&self, input: I) -> Result<O> {
        (**self).process(input)
    }
}

impl<I, O, P: Processor<I, O> + ?Sized> Processor<I, O> for std::sync::Arc<P> {
    fn process(&self, input: I) -> Result<O> {
        (**self).process(input)
    }
}

/// A processor backed by a function
pub struct FnProcessor<F, I, O> {
    function: F,
    _marker: PhantomData<fn(I) -> O>,
}

impl<F, I, O> FnProcessor<F, I, O>
where
    F: Fn(I) -> Result<O> + Send + Sync,
{
    pub fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<F, I, O> Processor<I, O> for FnProcessor<F, I, O>
where
    F: Fn(I) -> Result<O> + Send + Sync,
{
    fn process(&self, input: I) -> Result<O> {
        (self.function)(input)
    }
}

/// Wrap a function as a processor
pub fn from_fn<F, I, O>(function: F) -> FnProcessor<F, I, O>
where
    F: Fn(I) -> Result<O> + Send + Sync,
{
    FnProcessor::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_processor() {
        let double = from_fn(|x: i64| Ok(x * 2));
        assert_eq!(double.process(21).unwrap(), 42);
    }

    #[test]
    fn test_boxed_processor() {
        let boxed: Box<dyn Processor<i64, i64>> = Box::new(from_fn(|x: i64| Ok(x + 1)));
        assert_eq!(boxed.process(1).unwrap(), 2);
    }
}
