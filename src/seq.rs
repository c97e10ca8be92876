use crate::{
    Size,
    error::{Error, Result},
    predicate::Predicate,
    source::{Bounded, BoxedSource, Concat, Filter, Map, Plain, PullSource},
    transform::Transform,
};
use core::cmp::Ordering;
use tracing::{debug, trace};

/// A lazy, single-use sequence of elements of type `T`.
///
/// A `Seq` wraps a pull-source together with its [`Size`], which is either the
/// exact number of remaining elements or unknown.
///
/// * Intermediate operations such as [`map`], [`filter`], [`flat_map`] or
///   [`limit`] consume the sequence and return a new one wrapping an adapted
///   source. No element is pulled at this point.
/// * Terminal operations such as [`count`], [`any_match`] or [`to_list`] consume
///   the sequence and drive the pull-source until they know their result.
///
/// Since every operation takes `self` by value, a sequence can be traversed at
/// most once.
///
/// [`map`]: Seq::map
/// [`filter`]: Seq::filter
/// [`flat_map`]: Seq::flat_map
/// [`limit`]: Seq::limit
/// [`count`]: Seq::count
/// [`any_match`]: Seq::any_match
/// [`to_list`]: Seq::to_list
///
/// # Examples
///
/// ```
/// use orx_lazy_seq::*;
///
/// let evens = Seq::of(1..11)
///     .filter(|x: &i32| x % 2 == 0)
///     .map(|x: i32| x * 10)
///     .limit(3)
///     .unwrap()
///     .to_list();
///
/// assert_eq!(evens, [20, 40, 60]);
/// ```
pub struct Seq<'a, T> {
    source: BoxedSource<'a, T>,
    size: Size,
}

// construction

impl<'a, T: 'a> Seq<'a, T> {
    pub(crate) fn with_size(source: BoxedSource<'a, T>, size: Size) -> Self {
        Self { source, size }
    }

    /// Creates a sequence over the elements of a fixed collection, in its natural
    /// traversal order. The size of the sequence is known.
    ///
    /// ```
    /// use orx_lazy_seq::*;
    ///
    /// assert_eq!(Seq::of(vec!['a', 'b']).size(), Size::Known(2));
    /// assert_eq!(Seq::of([1, 2, 3]).size(), Size::Known(3));
    /// ```
    pub fn of<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>,
        C::IntoIter: ExactSizeIterator + 'a,
    {
        let iter = collection.into_iter();
        let len = iter.len();
        Self::with_size(Box::new(Plain::new(iter)), Size::Known(len))
    }

    /// Creates a sequence pulling its elements from an arbitrary iterator. The size
    /// of the sequence is unknown.
    ///
    /// ```
    /// use orx_lazy_seq::*;
    ///
    /// let seq = Seq::lazy((1..).map(|x| x * x));
    /// assert_eq!(seq.size(), Size::Unknown);
    /// assert_eq!(seq.limit(3).unwrap().to_list(), [1, 4, 9]);
    /// ```
    pub fn lazy<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self::with_size(Box::new(Plain::new(iter.into_iter())), Size::Unknown)
    }

    /// Creates a sequence pulling its elements from the given `source`. The size of
    /// the sequence is unknown.
    pub fn from_source<S>(source: S) -> Self
    where
        S: PullSource<T> + 'a,
    {
        Self::with_size(Box::new(source), Size::Unknown)
    }

    /// Creates an empty sequence.
    pub fn empty() -> Self {
        Self::of(Vec::new())
    }

    /// Size of the sequence; known only when it can be told without traversal.
    pub fn size(&self) -> Size {
        self.size
    }

    pub(crate) fn has_next(&mut self) -> bool {
        self.source.has_next()
    }

    pub(crate) fn next_element(&mut self) -> Option<T> {
        let t = self.source.next_value()?;
        if let Size::Known(len) = &mut self.size {
            *len = len.saturating_sub(1);
        }
        Some(t)
    }
}

impl<'a, T: 'a> Default for Seq<'a, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T: 'a> From<Vec<T>> for Seq<'a, T> {
    fn from(vec: Vec<T>) -> Self {
        Self::of(vec)
    }
}

/// Collects the elements first; the resulting sequence has a known size.
impl<'a, T: 'a> FromIterator<T> for Seq<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> core::fmt::Debug for Seq<'a, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Seq").field("size", &self.size).finish_non_exhaustive()
    }
}

// intermediate

impl<'a, T: 'a> Seq<'a, T> {
    /// Returns a sequence of the results of applying `transform` to the elements of
    /// this sequence. The size is preserved.
    pub fn map<R, F>(self, transform: F) -> Seq<'a, R>
    where
        R: 'a,
        F: Transform<T, R> + 'a,
    {
        let source = Map::new(self.source, transform);
        Seq::with_size(Box::new(source), self.size)
    }

    /// Returns a sequence of the elements of this sequence satisfying `predicate`.
    /// The size becomes unknown.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Predicate<T> + 'a,
    {
        let source = Filter::new(self.source, predicate);
        Self::with_size(Box::new(source), Size::Unknown)
    }

    /// Returns a sequence concatenating the sub-sequences that `transform` maps each
    /// element to, in element order. An element mapped to `None` contributes no
    /// elements.
    ///
    /// The sum of the sub-sequence sizes can only be known if the size of this
    /// sequence is known:
    /// * When this size is known, `transform` is applied to every element right
    ///   away. The resulting size is the sum of the sub-sequence sizes, or unknown
    ///   if any of them is unknown. Sub-sequences themselves are not traversed yet.
    /// * Otherwise, `transform` is applied lazily as elements are pulled and the
    ///   resulting size is unknown.
    ///
    /// Either way, sub-sequences are drained one at a time and each one is dropped
    /// once exhausted.
    ///
    /// ```
    /// use orx_lazy_seq::*;
    ///
    /// let all = seq![3, 0, 2]
    ///     .flat_map(|n: usize| (n > 0).then(|| Seq::of(0..n)))
    ///     .to_list();
    ///
    /// assert_eq!(all, [0, 1, 2, 0, 1]);
    /// ```
    pub fn flat_map<R, F>(mut self, mut transform: F) -> Seq<'a, R>
    where
        R: 'a,
        F: Transform<T, Option<Seq<'a, R>>> + 'a,
    {
        match self.size {
            Size::Known(num_parts) => {
                let mut parts = Vec::with_capacity(num_parts);
                let mut size = Size::Known(0);
                while let Some(t) = self.next_element() {
                    let part = transform.apply(t).unwrap_or_default();
                    size = size.add(part.size);
                    parts.push(part);
                }
                debug!(num_parts, ?size, "flat_map scheduled sub-sequences");
                let parts = Plain::new(parts.into_iter());
                Seq::with_size(Box::new(Concat::new(Box::new(parts))), size)
            }
            Size::Unknown => {
                let to_part = move |t: T| transform.apply(t).unwrap_or_default();
                let parts = Map::new(self.source, to_part);
                Seq::with_size(Box::new(Concat::new(Box::new(parts))), Size::Unknown)
            }
        }
    }

    /// Returns a sequence of the elements of this sequence followed by the elements
    /// of `other`. The size is the sum of both sizes when both are known.
    pub fn chain(self, other: Self) -> Self {
        let size = self.size.add(other.size);
        let parts = Plain::new([self, other].into_iter());
        Self::with_size(Box::new(Concat::new(Box::new(parts))), size)
    }

    /// Returns a sequence of at most `max_size` elements of this sequence.
    ///
    /// When the size of this sequence is known to be at most `max_size`, the
    /// sequence itself is returned. After `max_size` elements are pulled, the
    /// upstream is not probed again.
    ///
    /// Returns [`Error::NegativeCount`] if `max_size` is negative.
    pub fn limit(self, max_size: i64) -> Result<Self> {
        let max_len = Error::check_count("limit", max_size)?;
        let size = self.size;
        match size {
            Size::Known(len) if len <= max_len => {
                trace!(len, max_len, "limit covers the entire sequence");
                Ok(self)
            }
            _ => {
                let source = Bounded::new(self.source, max_len);
                Ok(Self::with_size(Box::new(source), size.cap(max_len)))
            }
        }
    }

    /// Discards the first `n` elements right away and returns the remaining
    /// sequence. If there are fewer than `n` elements, the result is empty.
    ///
    /// Unlike the other intermediate operations, the discarded elements are pulled
    /// at the time of the call.
    ///
    /// Returns [`Error::NegativeCount`] if `n` is negative.
    pub fn skip(mut self, n: i64) -> Result<Self> {
        let n = Error::check_count("skip", n)?;
        let mut num_skipped = 0;
        while num_skipped < n && self.next_element().is_some() {
            num_skipped += 1;
        }
        trace!(requested = n, num_skipped, "skip discarded elements");
        Ok(self)
    }

    /// Returns a sequence of the elements sorted by `compare`.
    ///
    /// All remaining elements are collected first. The sort is stable: elements
    /// that compare equal keep their relative order. The result has a known size.
    pub fn sorted_by<C>(self, compare: C) -> Self
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut list = self.to_list();
        trace!(len = list.len(), "sorting materialized sequence");
        list.sort_by(compare);
        Self::of(list)
    }

    /// Returns a sequence of the elements sorted by their natural order.
    ///
    /// ```
    /// use orx_lazy_seq::*;
    ///
    /// assert_eq!(seq![3, 1, 2].sorted().to_list(), [1, 2, 3]);
    /// ```
    pub fn sorted(self) -> Self
    where
        T: Ord,
    {
        self.sorted_by(Ord::cmp)
    }

    /// Returns a sequence of the elements sorted by their partial order.
    ///
    /// Returns [`Error::Incomparable`] if any two compared elements have no
    /// ordering, such as a `NaN` against a number.
    pub fn try_sorted(self) -> Result<Self>
    where
        T: PartialOrd,
    {
        let mut incomparable = false;
        let sorted = self.sorted_by(|a, b| {
            a.partial_cmp(b).unwrap_or_else(|| {
                incomparable = true;
                Ordering::Equal
            })
        });
        match incomparable {
            true => Err(Error::Incomparable),
            false => Ok(sorted),
        }
    }
}

/// Creates a [`Seq`] of the given values, in the given order.
///
/// ```
/// use orx_lazy_seq::*;
///
/// assert_eq!(seq![1, 2, 3].to_list(), [1, 2, 3]);
/// assert_eq!(seq![1, 2, 3].size(), Size::Known(3));
///
/// let empty: Seq<i32> = seq![];
/// assert_eq!(empty.count(), 0);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Seq::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Seq::of([$($value),+])
    };
}
