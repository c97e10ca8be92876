use super::{BoxedSource, PullSource};
use crate::{error::Result, transform::Transform};
use core::marker::PhantomData;

pub(crate) struct Map<'a, T, R, F> {
    upstream: BoxedSource<'a, T>,
    transform: F,
    phantom: PhantomData<fn() -> R>,
}

impl<'a, T, R, F> Map<'a, T, R, F>
where
    F: Transform<T, R>,
{
    pub(crate) fn new(upstream: BoxedSource<'a, T>, transform: F) -> Self {
        Self {
            upstream,
            transform,
            phantom: PhantomData,
        }
    }
}

impl<'a, T, R, F> PullSource<R> for Map<'a, T, R, F>
where
    F: Transform<T, R>,
{
    #[inline(always)]
    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn pull(&mut self) -> Result<R> {
        let t = self.upstream.pull()?;
        Ok(self.transform.apply(t))
    }

    fn next_value(&mut self) -> Option<R> {
        let t = self.upstream.next_value()?;
        Some(self.transform.apply(t))
    }
}
