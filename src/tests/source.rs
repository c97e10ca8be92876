use crate::{
    Error, PullSource, Result, Seq, Size,
    source::{Bounded, Concat, Filter, Map, Plain},
};
use std::{cell::Cell, rc::Rc};

/// Yields `0, 1, ..., len - 1`, counting every call to `has_next`.
struct Counter {
    next: u32,
    len: u32,
    probes: Rc<Cell<usize>>,
}

impl Counter {
    fn new(len: u32) -> (Self, Rc<Cell<usize>>) {
        let probes = Rc::new(Cell::new(0));
        let counter = Self {
            next: 0,
            len,
            probes: probes.clone(),
        };
        (counter, probes)
    }
}

impl PullSource<u32> for Counter {
    fn has_next(&mut self) -> bool {
        self.probes.set(self.probes.get() + 1);
        self.next < self.len
    }

    fn pull(&mut self) -> Result<u32> {
        match self.next < self.len {
            true => {
                self.next += 1;
                Ok(self.next - 1)
            }
            false => Err(Error::Exhausted),
        }
    }
}

/// Always reports another element, but fails to produce the third one.
struct Overpromising(u32);

impl PullSource<u32> for Overpromising {
    fn has_next(&mut self) -> bool {
        true
    }

    fn pull(&mut self) -> Result<u32> {
        self.0 += 1;
        match self.0 {
            3 => Err(Error::Exhausted),
            n => Ok(n),
        }
    }
}

#[test]
fn custom_source() {
    let (counter, _) = Counter::new(4);
    let seq = Seq::from_source(counter);
    assert_eq!(seq.size(), Size::Unknown);
    assert_eq!(seq.to_list(), [0, 1, 2, 3]);
}

#[test]
fn custom_source_through_operations() {
    let (counter, _) = Counter::new(10);
    let all = Seq::from_source(counter)
        .filter(|x: &u32| x % 3 == 0)
        .map(|x: u32| x * 10)
        .to_list();
    assert_eq!(all, [0, 30, 60, 90]);
}

#[test]
fn next_value() {
    let (mut counter, _) = Counter::new(2);
    assert_eq!(counter.next_value(), Some(0));
    assert_eq!(counter.next_value(), Some(1));
    assert_eq!(counter.next_value(), None);
}

#[test]
fn boxed_source() {
    let (counter, _) = Counter::new(2);
    let mut boxed: Box<dyn PullSource<u32>> = Box::new(counter);
    assert!(boxed.has_next());
    assert_eq!(boxed.pull(), Ok(0));
    assert_eq!(boxed.next_value(), Some(1));
    assert!(!boxed.has_next());
}

#[test]
fn plain_probing_does_not_lose_elements() {
    let mut plain = Plain::new([1, 2].into_iter());
    assert!(plain.has_next());
    assert!(plain.has_next());
    assert_eq!(plain.pull(), Ok(1));
    assert_eq!(plain.pull(), Ok(2));
    assert!(!plain.has_next());
}

#[test]
fn plain_pull_on_exhausted() {
    let mut plain = Plain::new(core::iter::once('x'));
    assert_eq!(plain.pull(), Ok('x'));
    assert_eq!(plain.pull(), Err(Error::Exhausted));
    assert!(!plain.has_next());
    assert!(!plain.has_next());
    assert_eq!(plain.pull(), Err(Error::Exhausted));
}

#[test]
fn plain_stays_exhausted() {
    // yields 1, then None, then 3 if it were not fused
    let mut calls = 0;
    let flaky = core::iter::from_fn(move || {
        calls += 1;
        match calls {
            2 => None,
            n => Some(n),
        }
    });
    let mut plain = Plain::new(flaky);
    assert_eq!(plain.next_value(), Some(1));
    assert!(!plain.has_next());
    assert_eq!(plain.next_value(), None);
    assert!(!plain.has_next());
}

#[test]
fn map_pull_on_exhausted() {
    let mut map = Map::new(Box::new(Plain::new(0..1)), |x: i32| x + 1);
    assert_eq!(map.pull(), Ok(1));
    assert_eq!(map.pull(), Err(Error::Exhausted));
    assert!(!map.has_next());
}

#[test]
fn filter_pull_on_exhausted() {
    let mut filter = Filter::new(Box::new(Plain::new(0..5)), |x: &i32| *x == 3);
    assert_eq!(filter.pull(), Ok(3));
    assert!(!filter.has_next());
    assert_eq!(filter.pull(), Err(Error::Exhausted));
}

#[test]
fn filter_prefetched_element_is_pulled_once() {
    let mut filter = Filter::new(Box::new(Plain::new(0..5)), |x: &i32| x % 2 == 1);
    assert!(filter.has_next());
    assert_eq!(filter.pull(), Ok(1));
    assert!(filter.has_next());
    assert!(filter.has_next());
    assert_eq!(filter.next_value(), Some(3));
    assert_eq!(filter.next_value(), None);
}

#[test]
fn bounded_never_probes_beyond_bound() {
    let (counter, probes) = Counter::new(100);
    let mut bounded = Bounded::new(Box::new(counter), 2);
    assert_eq!(bounded.next_value(), Some(0));
    assert_eq!(bounded.next_value(), Some(1));
    let probes_at_bound = probes.get();

    assert!(!bounded.has_next());
    assert_eq!(bounded.next_value(), None);
    assert_eq!(bounded.pull(), Err(Error::Exhausted));
    assert_eq!(probes.get(), probes_at_bound);
}

#[test]
fn bounded_by_zero() {
    let (counter, probes) = Counter::new(100);
    let mut bounded = Bounded::new(Box::new(counter), 0);
    assert!(!bounded.has_next());
    assert_eq!(bounded.pull(), Err(Error::Exhausted));
    assert_eq!(probes.get(), 0);
}

#[test]
fn concat_skips_empty_parts() {
    let parts = vec![Seq::empty(), Seq::of([1, 2]), Seq::empty(), Seq::lazy([3])];
    let mut concat = Concat::new(Box::new(Plain::new(parts.into_iter())));
    assert_eq!(concat.next_value(), Some(1));
    assert_eq!(concat.next_value(), Some(2));
    assert!(concat.has_next());
    assert_eq!(concat.pull(), Ok(3));
    assert!(!concat.has_next());
    assert_eq!(concat.pull(), Err(Error::Exhausted));
}

#[test]
fn concat_of_no_parts() {
    let parts: Vec<Seq<i32>> = vec![];
    let mut concat = Concat::new(Box::new(Plain::new(parts.into_iter())));
    assert!(!concat.has_next());
    assert_eq!(concat.next_value(), None);
}

#[test]
#[should_panic(expected = "pull failed right after has_next reported an element")]
fn failed_pull_after_has_next_is_not_end_of_sequence() {
    let seq = Seq::from_source(Overpromising(0)).limit(5).unwrap();
    _ = seq.to_list();
}

#[test]
fn failed_pull_after_has_next_keeps_pulled_elements() {
    let mut source = Overpromising(0);
    assert_eq!(source.next_value(), Some(1));
    assert_eq!(source.next_value(), Some(2));
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| source.next_value()));
    assert!(result.is_err());
}

#[test]
#[should_panic(expected = "pulled from an exhausted source")]
fn failed_pull_through_adapters_reports_the_error() {
    _ = Seq::from_source(Overpromising(0))
        .map(|x: u32| x * 2)
        .filter(|x: &u32| *x > 0)
        .count();
}
