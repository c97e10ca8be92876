use crate::seq::Seq;
use core::iter::FusedIterator;

/// Iterator over the elements of a [`Seq`], created by its `into_iter` method.
///
/// This lets a sequence be drained with `for` loops and std iterator adapters.
/// The size hint is exact whenever the size of the sequence is known.
///
/// ```
/// use orx_lazy_seq::*;
///
/// let mut iter = seq![1, 2, 3].map(|x: i32| x * 2).into_iter();
/// assert_eq!(iter.size_hint(), (3, Some(3)));
/// assert_eq!(iter.next(), Some(2));
/// assert_eq!(iter.size_hint(), (2, Some(2)));
///
/// let rest: Vec<_> = iter.collect();
/// assert_eq!(rest, [4, 6]);
/// ```
pub struct SeqIter<'a, T> {
    seq: Seq<'a, T>,
}

impl<'a, T: 'a> IntoIterator for Seq<'a, T> {
    type Item = T;

    type IntoIter = SeqIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        SeqIter { seq: self }
    }
}

impl<'a, T: 'a> Iterator for SeqIter<'a, T> {
    type Item = T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.seq.next_element()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.size().size_hint()
    }
}

impl<'a, T: 'a> FusedIterator for SeqIter<'a, T> {}
