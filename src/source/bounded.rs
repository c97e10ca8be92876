use super::{BoxedSource, PullSource};
use crate::error::{Error, Result};

/// Yields at most `remaining` more upstream elements.
///
/// Once the bound is reached the upstream is never probed again.
pub(crate) struct Bounded<'a, T> {
    upstream: BoxedSource<'a, T>,
    remaining: usize,
}

impl<'a, T> Bounded<'a, T> {
    pub(crate) fn new(upstream: BoxedSource<'a, T>, max_len: usize) -> Self {
        Self {
            upstream,
            remaining: max_len,
        }
    }
}

impl<'a, T> PullSource<T> for Bounded<'a, T> {
    fn has_next(&mut self) -> bool {
        self.remaining > 0 && self.upstream.has_next()
    }

    fn pull(&mut self) -> Result<T> {
        match self.remaining {
            0 => Err(Error::Exhausted),
            _ => {
                let t = self.upstream.pull()?;
                self.remaining -= 1;
                Ok(t)
            }
        }
    }

    fn next_value(&mut self) -> Option<T> {
        match self.remaining {
            0 => None,
            _ => {
                let t = self.upstream.next_value()?;
                self.remaining -= 1;
                Some(t)
            }
        }
    }
}
