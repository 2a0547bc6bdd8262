//! Inclusive/exclusive range filters over ordered scalars.

use crate::predicate::Predicate;
use crate::specification::Specification;

/// An optional lower/upper bound pair over an ordered scalar (numbers,
/// dates).
///
/// Each bound participates only when present; both absent means the
/// range is empty and matches everything. No ordering is enforced
/// between `from` and `to` — an inverted range simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter<T> {
    /// Lower bound (`None` means unbounded).
    pub from: Option<T>,
    /// If true, `value >= from`; otherwise `value > from`.
    pub from_inclusive: bool,
    /// Upper bound (`None` means unbounded).
    pub to: Option<T>,
    /// If true, `value <= to`; otherwise `value < to`.
    pub to_inclusive: bool,
}

impl<T> Default for RangeFilter<T> {
    fn default() -> Self {
        Self {
            from: None,
            from_inclusive: true,
            to: None,
            to_inclusive: true,
        }
    }
}

impl<T> RangeFilter<T> {
    /// Create a range with both bounds inclusive.
    pub fn new(from: Option<T>, to: Option<T>) -> Self {
        Self {
            from,
            to,
            ..Self::default()
        }
    }

    /// Returns true when neither bound is present.
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

impl<T: PartialOrd> RangeFilter<T> {
    /// Check whether a value is within the configured range.
    ///
    /// Both bounds are checked independently; an absent bound always
    /// passes.
    pub fn contains(&self, value: &T) -> bool {
        if let Some(from) = &self.from {
            let pass = if self.from_inclusive {
                value >= from
            } else {
                value > from
            };
            if !pass {
                return false;
            }
        }
        if let Some(to) = &self.to {
            let pass = if self.to_inclusive {
                value <= to
            } else {
                value < to
            };
            if !pass {
                return false;
            }
        }
        true
    }
}

impl<T> RangeFilter<T>
where
    T: PartialOrd + Clone + Send + Sync + 'static,
{
    /// Turn the range into a predicate over an entity, using `selector`
    /// to extract the scalar being bounded.
    ///
    /// An empty range yields the constant `true` predicate.
    pub fn to_predicate<E, S>(&self, selector: S) -> Predicate<E>
    where
        E: 'static,
        S: Fn(&E) -> T + Send + Sync + 'static,
    {
        if self.is_empty() {
            return Predicate::always();
        }
        let range = self.clone();
        Predicate::new(move |entity| range.contains(&selector(entity)))
    }
}

impl<E: 'static> Predicate<E> {
    /// AND-compose a range filter onto this predicate.
    pub fn and_range<T, S>(&self, range: &RangeFilter<T>, selector: S) -> Self
    where
        T: PartialOrd + Clone + Send + Sync + 'static,
        S: Fn(&E) -> T + Send + Sync + 'static,
    {
        self.and(&range.to_predicate(selector))
    }
}

impl<E: 'static> Specification<E> {
    /// Apply a range filter to the specification by AND-composing it
    /// with the current criteria. Empty ranges are a no-op.
    pub fn apply_range<T, S>(&mut self, range: RangeFilter<T>, selector: S) -> &mut Self
    where
        T: PartialOrd + Clone + Send + Sync + 'static,
        S: Fn(&E) -> T + Send + Sync + 'static,
    {
        if range.is_empty() {
            return self;
        }
        self.and_where(range.to_predicate(selector))
    }
}
