/// Number of remaining elements of a sequence, when it can be told without traversal.
///
/// A known size is never a guess: whenever a sequence reports `Known(n)`, exactly
/// `n` elements are left to be pulled from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    /// The sequence has exactly this many remaining elements.
    Known(usize),
    /// The number of remaining elements can only be found by traversing.
    #[default]
    Unknown,
}

impl Size {
    /// Returns the exact length, if known.
    pub fn known(self) -> Option<usize> {
        match self {
            Self::Known(n) => Some(n),
            Self::Unknown => None,
        }
    }

    /// Returns whether or not the size is known.
    pub fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Sum of two sizes; unknown if either one is unknown.
    pub fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Known(a), Self::Known(b)) => Self::Known(a.saturating_add(b)),
            _ => Self::Unknown,
        }
    }

    /// Size after discarding `n` elements; never goes below zero.
    pub fn sub(self, n: usize) -> Self {
        match self {
            Self::Known(len) => Self::Known(len.saturating_sub(n)),
            Self::Unknown => Self::Unknown,
        }
    }

    /// Size after truncating to at most `n` elements.
    pub fn cap(self, n: usize) -> Self {
        match self {
            Self::Known(len) => Self::Known(len.min(n)),
            Self::Unknown => Self::Unknown,
        }
    }

    pub(crate) fn capacity_hint(self) -> usize {
        self.known().unwrap_or(crate::UNKNOWN_SIZE_CAPACITY)
    }

    pub(crate) fn size_hint(self) -> (usize, Option<usize>) {
        match self {
            Self::Known(n) => (n, Some(n)),
            Self::Unknown => (0, None),
        }
    }
}

impl From<usize> for Size {
    fn from(len: usize) -> Self {
        Self::Known(len)
    }
}

impl From<Option<usize>> for Size {
    fn from(len: Option<usize>) -> Self {
        len.map(Self::Known).unwrap_or_default()
    }
}
