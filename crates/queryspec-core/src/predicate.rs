//! Predicate algebra for composable entity filters.
//!
//! A [`Predicate`] is an opaque boolean test over a single entity,
//! represented as a shared closure. Because combination happens by
//! invoking both closures on the same call-time argument, no parameter
//! rebinding is needed to keep two fragments aligned on one entity.

use std::fmt;
use std::sync::Arc;

/// A composable boolean test over `T`.
///
/// Cloning is cheap: the underlying closure is shared. Predicates are
/// `Send + Sync` so a finished query plan can cross thread boundaries
/// to an async execution provider.
pub struct Predicate<T>(Arc<dyn Fn(&T) -> bool + Send + Sync>);

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

impl<T> Predicate<T> {
    /// Wrap a closure as a predicate.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(test))
    }

    /// A predicate that matches every entity.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// A predicate that matches no entity.
    pub fn never() -> Self {
        Self::new(|_| false)
    }

    /// Evaluate the predicate against a single entity.
    pub fn eval(&self, entity: &T) -> bool {
        (self.0)(entity)
    }

    /// Combine with another predicate via logical AND.
    ///
    /// Both fragments are evaluated against the same entity; the result
    /// is a new predicate, the originals are left untouched.
    pub fn and(&self, other: &Self) -> Self
    where
        T: 'static,
    {
        let left = self.clone();
        let right = other.clone();
        Self::new(move |entity| left.eval(entity) && right.eval(entity))
    }

    /// Combine with another predicate via logical OR.
    pub fn or(&self, other: &Self) -> Self
    where
        T: 'static,
    {
        let left = self.clone();
        let right = other.clone();
        Self::new(move |entity| left.eval(entity) || right.eval(entity))
    }
}
