use super::PullSource;
use crate::error::{Error, Result};
use core::iter::Fuse;

/// Source over any iterator, with a one-element lookahead to answer `has_next`.
pub(crate) struct Plain<I: Iterator> {
    iter: Fuse<I>,
    peeked: Option<I::Item>,
}

impl<I: Iterator> Plain<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter: iter.fuse(),
            peeked: None,
        }
    }
}

impl<I: Iterator> PullSource<I::Item> for Plain<I> {
    fn has_next(&mut self) -> bool {
        if self.peeked.is_none() {
            self.peeked = self.iter.next();
        }
        self.peeked.is_some()
    }

    fn pull(&mut self) -> Result<I::Item> {
        self.next_value().ok_or(Error::Exhausted)
    }

    #[inline(always)]
    fn next_value(&mut self) -> Option<I::Item> {
        self.peeked.take().or_else(|| self.iter.next())
    }
}
