/// A boolean-valued function of one borrowed argument.
///
/// Every `FnMut(&T) -> bool` closure is a predicate.
///
/// # Examples
///
/// ```
/// use orx_lazy_seq::*;
///
/// let gt4 = |x: &i32| *x > 4;
/// let lt2 = |x: &i32| *x < 2;
///
/// let mut not234 = gt4.or(lt2);
/// assert!(not234.test(&1));
/// assert!(!not234.test(&3));
/// assert!(not234.test(&5));
///
/// let mut lt5 = gt4.negate();
/// assert!(lt5.test(&1));
/// assert!(!lt5.test(&6));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Evaluates the predicate on `t`.
    fn test(&mut self, t: &T) -> bool;

    /// Returns the logical negation of this predicate.
    fn negate(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }

    /// Returns the short-circuiting logical AND of this predicate and `other`.
    ///
    /// `other` is not evaluated when this predicate is false.
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        And(self, other)
    }

    /// Returns the short-circuiting logical OR of this predicate and `other`.
    ///
    /// `other` is not evaluated when this predicate is true.
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        Or(self, other)
    }
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: FnMut(&T) -> bool,
{
    #[inline(always)]
    fn test(&mut self, t: &T) -> bool {
        self(t)
    }
}

/// Predicate created by [`Predicate::negate`].
pub struct Not<P>(P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    fn test(&mut self, t: &T) -> bool {
        !self.0.test(t)
    }
}

/// Predicate created by [`Predicate::and`].
pub struct And<P, Q>(P, Q);

impl<T: ?Sized, P: Predicate<T>, Q: Predicate<T>> Predicate<T> for And<P, Q> {
    fn test(&mut self, t: &T) -> bool {
        self.0.test(t) && self.1.test(t)
    }
}

/// Predicate created by [`Predicate::or`].
pub struct Or<P, Q>(P, Q);

impl<T: ?Sized, P: Predicate<T>, Q: Predicate<T>> Predicate<T> for Or<P, Q> {
    fn test(&mut self, t: &T) -> bool {
        self.0.test(t) || self.1.test(t)
    }
}

/// Predicate created by [`is_equal`].
#[derive(Debug, Clone)]
pub struct IsEqual<T>(Option<T>);

impl<T: PartialEq> Predicate<Option<T>> for IsEqual<T> {
    fn test(&mut self, t: &Option<T>) -> bool {
        match (t, &self.0) {
            (Some(t), Some(target)) => t == target,
            (None, None) => true,
            _ => false,
        }
    }
}

/// Returns a predicate testing whether an optional value equals `target`.
///
/// Two absent values are equal to each other; an absent and a present value
/// never are.
///
/// ```
/// use orx_lazy_seq::*;
///
/// let mut equals_a = is_equal(Some("a"));
/// let mut equals_none = is_equal::<&str>(None);
///
/// assert!(equals_a.test(&Some("a")));
/// assert!(!equals_a.test(&Some("b")));
/// assert!(!equals_a.test(&None));
/// assert!(!equals_none.test(&Some("a")));
/// assert!(equals_none.test(&None));
/// ```
pub fn is_equal<T: PartialEq>(target: Option<T>) -> IsEqual<T> {
    IsEqual(target)
}
