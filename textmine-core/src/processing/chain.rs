use super::Processor;
use crate::Result;

/// An ordered composition of processors, itself a processor
///
/// The output of each stage is the input of the next. Chains can be
/// appended to other chains.
pub struct ProcessorChain<I, O> {
    processor: Box<dyn Processor<I, O>>,
    stages: usize,
}

struct Composed<I, M, O> {
    first: Box<dyn Processor<I, M>>,
    second: Box<dyn Processor<M, O>>,
}

impl<I, M, O> Processor<I, O> for Composed<I, M, O> {
    fn process(&self, input: I) -> Result<O> {
        self.second.process(self.first.process(input)?)
    }
}

struct Identity;

impl<T> Processor<T, T> for Identity {
    fn process(&self, input: T) -> Result<T> {
        Ok(input)
    }
}

impl<I: 'static> ProcessorChain<I, I> {
    /// A chain without stages, returning its input unchanged
    pub fn identity() -> Self {
        Self {
            processor: Box::new(Identity),
            stages: 0,
        }
    }
}

impl<I: 'static, O: 'static> ProcessorChain<I, O> {
    /// A chain consisting of a single stage
    pub fn create<P>(processor: P) -> Self
    where
        P: Processor<I, O> + 'static,
    {
        Self {
            processor: Box::new(processor),
            stages: 1,
        }
    }

    /// Append a stage consuming this chain's output
    pub fn append<T, P>(self, processor: P) -> ProcessorChain<I, T>
    where
        T: 'static,
        P: Processor<O, T> + 'static,
    {
        ProcessorChain {
            processor: Box::new(Composed {
                first: self.processor,
                second: Box::new(processor),
            }),
            stages: self.stages + 1,
        }
    }

    /// Number of appended stages; an appended chain counts as one
    pub fn stages(&self) -> usize {
        self.stages
    }
}

impl<I, O> Processor<I, O> for ProcessorChain<I, O> {
    fn process(&self, input: I) -> Result<O> {
        self.processor.process(input)
    }
}

impl<I, O> std::fmt::Debug for ProcessorChain<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorChain")
            .field("stages", &self.stages)
            .finish()
    }
}
