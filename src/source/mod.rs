mod bounded;
mod concat;
mod filter;
mod map;
mod plain;

pub(crate) use bounded::Bounded;
pub(crate) use concat::Concat;
pub(crate) use filter::Filter;
pub(crate) use map::Map;
pub(crate) use plain::Plain;

use crate::error::Result;
use tracing::warn;

/// A pull-based producer of elements.
///
/// Elements are produced one at a time on demand:
/// * [`has_next`] tells whether another element can be pulled, and
/// * [`pull`] produces it.
///
/// Probing with `has_next` may advance the state of the source; for instance a
/// filtering source searches its upstream for the next match and keeps it until
/// it is pulled. It is therefore not free of cost, but it never loses elements.
///
/// Once a source reports exhaustion it keeps reporting exhaustion. Calling `pull`
/// on an exhausted source returns [`Error::Exhausted`], which is distinct from
/// the normal `has_next() == false` end of the sequence.
///
/// [`has_next`]: PullSource::has_next
/// [`pull`]: PullSource::pull
/// [`Error::Exhausted`]: crate::Error::Exhausted
///
/// # Examples
///
/// ```
/// use orx_lazy_seq::*;
///
/// struct Countdown(u32);
///
/// impl PullSource<u32> for Countdown {
///     fn has_next(&mut self) -> bool {
///         self.0 > 0
///     }
///
///     fn pull(&mut self) -> Result<u32> {
///         match self.0 {
///             0 => Err(Error::Exhausted),
///             n => {
///                 self.0 -= 1;
///                 Ok(n)
///             }
///         }
///     }
/// }
///
/// let all = Seq::from_source(Countdown(3)).to_list();
/// assert_eq!(all, [3, 2, 1]);
/// ```
pub trait PullSource<T> {
    /// Returns whether another element can be pulled.
    fn has_next(&mut self) -> bool;

    /// Produces the next element; [`Error::Exhausted`] if there is none.
    ///
    /// [`Error::Exhausted`]: crate::Error::Exhausted
    fn pull(&mut self) -> Result<T>;

    /// Pulls the next element if there is one.
    ///
    /// # Panics
    ///
    /// Panics if `has_next` reports an element but `pull` then fails to produce
    /// it; the failure is never mistaken for the end of the sequence.
    #[allow(clippy::panic)]
    fn next_value(&mut self) -> Option<T> {
        match self.has_next() {
            true => match self.pull() {
                Ok(t) => Some(t),
                Err(error) => {
                    warn!(%error, "pull failed right after has_next reported an element");
                    panic!("pull failed right after has_next reported an element: {error}")
                }
            },
            false => None,
        }
    }
}

impl<T, S> PullSource<T> for Box<S>
where
    S: PullSource<T> + ?Sized,
{
    #[inline(always)]
    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    #[inline(always)]
    fn pull(&mut self) -> Result<T> {
        (**self).pull()
    }

    #[inline(always)]
    fn next_value(&mut self) -> Option<T> {
        (**self).next_value()
    }
}

pub(crate) type BoxedSource<'a, T> = Box<dyn PullSource<T> + 'a>;
