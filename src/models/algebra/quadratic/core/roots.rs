use std::fmt;

/// Real roots of a quadratic or degenerate linear equation.
///
/// The variant carries the classification explicitly, so callers match on it
/// exhaustively instead of decoding a root count.
///
/// In [`Roots::Two`] the smaller root always comes first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots<T = f64> {
    /// The equation has no real roots.
    None,
    /// Every real number is a root (the equation reduces to `0 = 0`).
    Infinite,
    /// Exactly one real root, either a linear root or a double root.
    One(T),
    /// Two distinct real roots, in ascending order.
    Two(T, T),
}

impl<T: Copy + PartialOrd> Roots<T> {
    /// Constructs a [`Roots::Two`] with the roots in ascending order.
    ///
    /// Values that cannot be ordered (`NaN`) keep the order they were given in.
    #[must_use]
    pub fn two(x1: T, x2: T) -> Self {
        if x2 < x1 {
            Self::Two(x2, x1)
        } else {
            Self::Two(x1, x2)
        }
    }

    /// Returns the number of roots, or `None` if every real number is a root.
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::None => Some(0),
            Self::One(_) => Some(1),
            Self::Two(..) => Some(2),
            Self::Infinite => None,
        }
    }

    /// Returns an iterator over the finite list of roots.
    ///
    /// Yields nothing for [`Roots::None`] and [`Roots::Infinite`].
    pub fn values(&self) -> impl Iterator<Item = T> {
        let (first, second) = match *self {
            Self::None | Self::Infinite => (None, None),
            Self::One(x) => (Some(x), None),
            Self::Two(x1, x2) => (Some(x1), Some(x2)),
        };
        first.into_iter().chain(second)
    }

    /// Short label for the classification, used in log output.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::None => "no roots",
            Self::Infinite => "infinite roots",
            Self::One(_) => "one root",
            Self::Two(..) => "two roots",
        }
    }
}

/// Renders the short form: `no roots`, `infinite roots`, `one root: x`,
/// or `two roots: x1, x2`.
impl<T: fmt::Display> fmt::Display for Roots<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("no roots"),
            Self::Infinite => f.write_str("infinite roots"),
            Self::One(x) => write!(f, "one root: {x}"),
            Self::Two(x1, x2) => write!(f, "two roots: {x1}, {x2}"),
        }
    }
}
