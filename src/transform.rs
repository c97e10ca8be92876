use core::marker::PhantomData;

/// A unary function from `T` to `R`.
///
/// Every `FnMut(T) -> R` closure is a transform. Transforms compose with
/// [`then`] and [`compose`], and panics raised in either leg of a composition
/// reach the caller unchanged.
///
/// [`then`]: Transform::then
/// [`compose`]: Transform::compose
///
/// # Examples
///
/// ```
/// use orx_lazy_seq::*;
///
/// let x2 = |x: i32| x * 2;
/// let plus1 = |x: i32| x + 1;
///
/// assert_eq!(x2.then(plus1).apply(2), 5);
/// assert_eq!(x2.compose(plus1).apply(2), 6);
/// ```
pub trait Transform<T, R> {
    /// Applies the transform to `t`.
    fn apply(&mut self, t: T) -> R;

    /// Returns a transform that first applies `self` and then `after` to the result.
    fn then<V, G>(self, after: G) -> Then<Self, G, R>
    where
        Self: Sized,
        G: Transform<R, V>,
    {
        Then {
            first: self,
            after,
            phantom: PhantomData,
        }
    }

    /// Returns a transform that first applies `before` and then `self` to the result.
    fn compose<V, G>(self, before: G) -> Compose<Self, G, T>
    where
        Self: Sized,
        G: Transform<V, T>,
    {
        Compose {
            last: self,
            before,
            phantom: PhantomData,
        }
    }
}

impl<T, R, F> Transform<T, R> for F
where
    F: FnMut(T) -> R,
{
    #[inline(always)]
    fn apply(&mut self, t: T) -> R {
        self(t)
    }
}

/// Transform created by [`Transform::then`].
pub struct Then<F, G, R> {
    first: F,
    after: G,
    phantom: PhantomData<fn() -> R>,
}

impl<T, R, V, F, G> Transform<T, V> for Then<F, G, R>
where
    F: Transform<T, R>,
    G: Transform<R, V>,
{
    fn apply(&mut self, t: T) -> V {
        let r = self.first.apply(t);
        self.after.apply(r)
    }
}

/// Transform created by [`Transform::compose`].
pub struct Compose<F, G, T> {
    last: F,
    before: G,
    phantom: PhantomData<fn() -> T>,
}

impl<V, T, R, F, G> Transform<V, R> for Compose<F, G, T>
where
    F: Transform<T, R>,
    G: Transform<V, T>,
{
    fn apply(&mut self, v: V) -> R {
        let t = self.before.apply(v);
        self.last.apply(t)
    }
}

/// Transform returning its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<T> Transform<T, T> for Identity {
    #[inline(always)]
    fn apply(&mut self, t: T) -> T {
        t
    }
}

/// Returns a transform that always returns its input.
///
/// ```
/// use orx_lazy_seq::*;
///
/// assert_eq!(identity().apply(1), 1);
/// assert_eq!(identity().apply("a"), "a");
/// ```
pub fn identity() -> Identity {
    Identity
}
