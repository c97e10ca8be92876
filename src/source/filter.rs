use super::{BoxedSource, PullSource};
use crate::{
    error::{Error, Result},
    predicate::Predicate,
};

/// Keeps the upstream elements satisfying the predicate.
///
/// `has_next` must find the next match to answer, so the match found is kept in
/// `prefetched` until it is pulled.
pub(crate) struct Filter<'a, T, P> {
    upstream: BoxedSource<'a, T>,
    predicate: P,
    prefetched: Option<T>,
}

impl<'a, T, P> Filter<'a, T, P>
where
    P: Predicate<T>,
{
    pub(crate) fn new(upstream: BoxedSource<'a, T>, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            prefetched: None,
        }
    }

    fn find_next(&mut self) -> Option<T> {
        while let Some(t) = self.upstream.next_value() {
            if self.predicate.test(&t) {
                return Some(t);
            }
        }
        None
    }
}

impl<'a, T, P> PullSource<T> for Filter<'a, T, P>
where
    P: Predicate<T>,
{
    fn has_next(&mut self) -> bool {
        if self.prefetched.is_none() {
            self.prefetched = self.find_next();
        }
        self.prefetched.is_some()
    }

    fn pull(&mut self) -> Result<T> {
        self.next_value().ok_or(Error::Exhausted)
    }

    fn next_value(&mut self) -> Option<T> {
        match self.prefetched.take() {
            Some(t) => Some(t),
            None => self.find_next(),
        }
    }
}
