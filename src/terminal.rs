use crate::{
    Size,
    consumer::Consumer,
    error::{Error, Result},
    predicate::Predicate,
    seq::Seq,
    transform::Transform,
};
use core::{cmp::Ordering, hash::Hash};
use std::collections::{BTreeMap, HashMap};

impl<'a, T: 'a> Seq<'a, T> {
    /// Returns whether all elements satisfy `predicate`; true for an empty sequence.
    ///
    /// Stops at the first element that does not match.
    pub fn all_match<P>(mut self, mut predicate: P) -> bool
    where
        P: Predicate<T>,
    {
        while let Some(t) = self.next_element() {
            if !predicate.test(&t) {
                return false;
            }
        }
        true
    }

    /// Returns whether any element satisfies `predicate`; false for an empty sequence.
    ///
    /// Stops at the first element that matches.
    pub fn any_match<P>(mut self, mut predicate: P) -> bool
    where
        P: Predicate<T>,
    {
        while let Some(t) = self.next_element() {
            if predicate.test(&t) {
                return true;
            }
        }
        false
    }

    /// Returns whether no element satisfies `predicate`; true for an empty sequence.
    ///
    /// Stops at the first element that matches.
    pub fn none_match<P>(self, predicate: P) -> bool
    where
        P: Predicate<T>,
    {
        !self.any_match(predicate)
    }

    /// Returns the number of elements.
    ///
    /// If the size is known, it is returned without pulling any element.
    pub fn count(mut self) -> usize {
        match self.size() {
            Size::Known(len) => len,
            Size::Unknown => {
                let mut count = 0;
                while self.next_element().is_some() {
                    count += 1;
                }
                count
            }
        }
    }

    /// Returns the first element, or `None` if the sequence is empty.
    pub fn find_first(mut self) -> Option<T> {
        self.next_element()
    }

    /// Returns an element of the sequence, or `None` if it is empty.
    ///
    /// Traversal is sequential, so this is always the first element.
    pub fn find_any(self) -> Option<T> {
        self.find_first()
    }

    /// Applies `consumer` to every element in order.
    pub fn for_each<C>(mut self, mut consumer: C)
    where
        C: Consumer<T>,
    {
        while let Some(t) = self.next_element() {
            consumer.accept(&t);
        }
    }

    /// Moves every element to `matched` if it satisfies `predicate`, and to
    /// `unmatched` otherwise. Each sink receives its elements in traversal order.
    ///
    /// ```
    /// use orx_lazy_seq::*;
    ///
    /// let mut small = vec![];
    /// let mut large = vec![];
    /// seq![1, 5, 2, 7].partition_by(|x: &i32| *x < 3, &mut small, &mut large);
    ///
    /// assert_eq!(small, [1, 2]);
    /// assert_eq!(large, [5, 7]);
    /// ```
    pub fn partition_by<P, M, U>(mut self, mut predicate: P, matched: &mut M, unmatched: &mut U)
    where
        P: Predicate<T>,
        M: Extend<T>,
        U: Extend<T>,
    {
        while let Some(t) = self.next_element() {
            match predicate.test(&t) {
                true => matched.extend(Some(t)),
                false => unmatched.extend(Some(t)),
            }
        }
    }

    /// Groups the elements by the key that `classifier` computes for them.
    ///
    /// Order of the groups is unspecified; elements within each group are in
    /// traversal order.
    ///
    /// ```
    /// use orx_lazy_seq::*;
    ///
    /// let groups = seq!["ab", "ac", "bb"].group_by(|s: &&str| s.chars().next());
    ///
    /// assert_eq!(groups[&Some('a')], ["ab", "ac"]);
    /// assert_eq!(groups[&Some('b')], ["bb"]);
    /// ```
    pub fn group_by<K, F>(mut self, mut classifier: F) -> HashMap<K, Vec<T>>
    where
        K: Eq + Hash,
        F: for<'t> Transform<&'t T, K>,
    {
        let mut groups: HashMap<K, Vec<T>> = HashMap::new();
        while let Some(t) = self.next_element() {
            groups.entry(classifier.apply(&t)).or_default().push(t);
        }
        groups
    }

    /// Returns the greatest element by `compare`; the earliest one among equals.
    pub fn max_by<C>(self, mut compare: C) -> Option<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.best_by(|t, best| compare(t, best) == Ordering::Greater)
    }

    /// Returns the least element by `compare`; the earliest one among equals.
    pub fn min_by<C>(self, mut compare: C) -> Option<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.best_by(|t, best| compare(t, best) == Ordering::Less)
    }

    /// Returns the greatest element; the earliest one among equals.
    ///
    /// Note that this differs from [`Iterator::max`], which returns the last of
    /// equal maximums.
    pub fn max(self) -> Option<T>
    where
        T: Ord,
    {
        self.max_by(Ord::cmp)
    }

    /// Returns the least element; the earliest one among equals.
    pub fn min(self) -> Option<T>
    where
        T: Ord,
    {
        self.min_by(Ord::cmp)
    }

    /// Returns the greatest element by partial order.
    ///
    /// Returns [`Error::Incomparable`] as soon as an element cannot be compared with
    /// the greatest element so far.
    pub fn try_max(self) -> Result<Option<T>>
    where
        T: PartialOrd,
    {
        self.try_best_by(Ordering::Greater)
    }

    /// Returns the least element by partial order.
    ///
    /// Returns [`Error::Incomparable`] as soon as an element cannot be compared with
    /// the least element so far.
    pub fn try_min(self) -> Result<Option<T>>
    where
        T: PartialOrd,
    {
        self.try_best_by(Ordering::Less)
    }

    /// Collects the elements into a vector, in traversal order.
    pub fn to_list(mut self) -> Vec<T> {
        let mut list = Vec::with_capacity(self.size().capacity_hint());
        while let Some(t) = self.next_element() {
            list.push(t);
        }
        list
    }

    /// Collects the elements into a map keyed by `key`. A later element replaces an
    /// earlier one with the same key.
    pub fn to_map<K, F>(self, key: F) -> HashMap<K, T>
    where
        K: Eq + Hash,
        F: for<'t> Transform<&'t T, K>,
    {
        let mut map = HashMap::with_capacity(self.size().capacity_hint());
        self.to_map_into(key, &mut map);
        map
    }

    /// Collects the elements into a map ordered by the keys computed by `key`. A
    /// later element replaces an earlier one with the same key.
    pub fn to_sorted_map<K, F>(self, key: F) -> BTreeMap<K, T>
    where
        K: Ord,
        F: for<'t> Transform<&'t T, K>,
    {
        let mut map = BTreeMap::new();
        self.to_map_into(key, &mut map);
        map
    }

    /// Inserts every element, keyed by `key`, into the given `map`, in traversal
    /// order.
    ///
    /// ```
    /// use orx_lazy_seq::*;
    /// use std::collections::HashMap;
    ///
    /// let mut by_len = HashMap::from([(0, "")]);
    /// seq!["a", "bc", "d"].to_map_into(|s: &&str| s.len(), &mut by_len);
    ///
    /// assert_eq!(by_len, HashMap::from([(0, ""), (1, "d"), (2, "bc")]));
    /// ```
    pub fn to_map_into<K, F, M>(mut self, mut key: F, map: &mut M)
    where
        F: for<'t> Transform<&'t T, K>,
        M: Extend<(K, T)>,
    {
        while let Some(t) = self.next_element() {
            let k = key.apply(&t);
            map.extend(Some((k, t)));
        }
    }

    fn best_by<B>(mut self, mut is_better: B) -> Option<T>
    where
        B: FnMut(&T, &T) -> bool,
    {
        let mut best = self.next_element()?;
        while let Some(t) = self.next_element() {
            if is_better(&t, &best) {
                best = t;
            }
        }
        Some(best)
    }

    fn try_best_by(mut self, better: Ordering) -> Result<Option<T>>
    where
        T: PartialOrd,
    {
        let Some(mut best) = self.next_element() else {
            return Ok(None);
        };
        while let Some(t) = self.next_element() {
            match t.partial_cmp(&best) {
                Some(ordering) if ordering == better => best = t,
                Some(_) => {}
                None => return Err(Error::Incomparable),
            }
        }
        Ok(Some(best))
    }
}
