/// A side-effecting operation on one borrowed argument.
///
/// Every `FnMut(&T)` closure is a consumer.
pub trait Consumer<T: ?Sized> {
    /// Performs the operation on `t`.
    fn accept(&mut self, t: &T);

    /// Returns a consumer that performs `self` and then `after` on the same input.
    ///
    /// If `self` panics, `after` does not run.
    ///
    /// ```
    /// use orx_lazy_seq::*;
    ///
    /// let mut first = Vec::new();
    /// let mut second = Vec::new();
    /// {
    ///     let mut both = (|x: &i32| first.push(*x)).and_then(|x: &i32| second.push(*x * 10));
    ///     both.accept(&1);
    ///     both.accept(&2);
    /// }
    /// assert_eq!(first, [1, 2]);
    /// assert_eq!(second, [10, 20]);
    /// ```
    fn and_then<C>(self, after: C) -> AndThen<Self, C>
    where
        Self: Sized,
        C: Consumer<T>,
    {
        AndThen(self, after)
    }
}

impl<T: ?Sized, F> Consumer<T> for F
where
    F: FnMut(&T),
{
    #[inline(always)]
    fn accept(&mut self, t: &T) {
        self(t)
    }
}

/// Consumer created by [`Consumer::and_then`].
pub struct AndThen<C, D>(C, D);

impl<T: ?Sized, C: Consumer<T>, D: Consumer<T>> Consumer<T> for AndThen<C, D> {
    fn accept(&mut self, t: &T) {
        self.0.accept(t);
        self.1.accept(t);
    }
}
