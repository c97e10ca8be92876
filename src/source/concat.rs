use super::{BoxedSource, PullSource};
use crate::{
    error::{Error, Result},
    seq::Seq,
};

/// Drains a sequence of sequences one after the other.
///
/// Only the sub-sequence currently being drained is held; it is dropped as soon
/// as it is exhausted and the next one is pulled from `parts`.
pub(crate) struct Concat<'a, T> {
    parts: BoxedSource<'a, Seq<'a, T>>,
    current: Option<Seq<'a, T>>,
}

impl<'a, T> Concat<'a, T> {
    pub(crate) fn new(parts: BoxedSource<'a, Seq<'a, T>>) -> Self {
        Self {
            parts,
            current: None,
        }
    }
}

impl<'a, T: 'a> PullSource<T> for Concat<'a, T> {
    fn has_next(&mut self) -> bool {
        loop {
            if let Some(current) = self.current.as_mut() {
                if current.has_next() {
                    return true;
                }
            }
            self.current = self.parts.next_value();
            if self.current.is_none() {
                return false;
            }
        }
    }

    fn pull(&mut self) -> Result<T> {
        self.next_value().ok_or(Error::Exhausted)
    }

    fn next_value(&mut self) -> Option<T> {
        match self.has_next() {
            true => self.current.as_mut().and_then(Seq::next_element),
            false => None,
        }
    }
}
