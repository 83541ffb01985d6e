use std::fmt;

use crate::Truthy;

/// Comparison argument of a query.
///
/// `Unset` means the caller passed nothing. `Value(x)` is always an explicit
/// argument, even when `x` is falsy or null-like (`Value(None)`,
/// `Value(Value::Nil)`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Argument<E> {
    Unset,
    Value(E),
}

impl<E> Default for Argument<E> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<E> Argument<E> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn as_value(&self) -> Option<&E> {
        match self {
            Self::Unset => None,
            Self::Value(value) => Some(value),
        }
    }

    pub fn into_value(self) -> Option<E> {
        match self {
            Self::Unset => None,
            Self::Value(value) => Some(value),
        }
    }
}

pub type Predicate<'p, E> = Box<dyn FnMut(&E) -> bool + 'p>;

/// The selection arguments attached to one query call.
///
/// At most one of the argument and the predicate is honored; when both are
/// present the argument wins.
pub struct Criterion<'p, E> {
    argument: Argument<E>,
    predicate: Option<Predicate<'p, E>>,
}

impl<E> Default for Criterion<'_, E> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<E> From<Argument<E>> for Criterion<'_, E> {
    fn from(argument: Argument<E>) -> Self {
        Self::new(argument, None)
    }
}

impl<E: fmt::Debug> fmt::Debug for Criterion<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Criterion")
            .field("argument", &self.argument)
            .field("predicate", &self.predicate.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl<'p, E> Criterion<'p, E> {
    pub fn new(argument: Argument<E>, predicate: Option<Predicate<'p, E>>) -> Self {
        Self {
            argument,
            predicate,
        }
    }

    pub fn unset() -> Self {
        Self::new(Argument::Unset, None)
    }

    pub fn value(target: E) -> Self {
        Self::new(Argument::Value(target), None)
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: FnMut(&E) -> bool + 'p,
    {
        Self::new(Argument::Unset, Some(Box::new(predicate)))
    }

    pub fn with_value(mut self, target: E) -> Self {
        self.argument = Argument::Value(target);
        self
    }

    pub fn with_predicate<F>(mut self, predicate: F) -> Self
    where
        F: FnMut(&E) -> bool + 'p,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    pub fn argument(&self) -> &Argument<E> {
        &self.argument
    }

    pub fn has_predicate(&self) -> bool {
        self.predicate.is_some()
    }

    /// Neither an argument nor a predicate was given.
    pub fn is_unset(&self) -> bool {
        self.argument.is_unset() && self.predicate.is_none()
    }

    /// Both an argument and a predicate were given.
    pub fn is_conflicting(&self) -> bool {
        !self.argument.is_unset() && self.predicate.is_some()
    }

    /// Picks the selection mode for a sequence of `len` elements.
    ///
    /// Supplying both an argument and a predicate always warns, even for an
    /// empty sequence. An empty sequence then resolves to `EmptySequence`.
    /// Otherwise an argument beats a predicate, a lone predicate is used
    /// as-is, and no criterion at all falls back to truthiness.
    pub fn resolve(self, len: usize) -> ResolvedMode<'p, E> {
        if self.is_conflicting() {
            tracing::warn!(len, "argument and predicate both given; predicate ignored");
        }

        let Self {
            argument,
            predicate,
        } = self;

        let mode = if len == 0 {
            ResolvedMode::EmptySequence
        } else {
            match (argument, predicate) {
                (Argument::Value(target), _) => ResolvedMode::ByEquality(target),
                (Argument::Unset, Some(predicate)) => ResolvedMode::ByPredicate(predicate),
                (Argument::Unset, None) => ResolvedMode::ByTruthiness,
            }
        };

        tracing::trace!(len, mode = mode.name(), "resolved selection mode");
        mode
    }
}

/// The single selection strategy active for one call.
pub enum ResolvedMode<'p, E> {
    EmptySequence,
    ByTruthiness,
    ByEquality(E),
    ByPredicate(Predicate<'p, E>),
}

impl<E> ResolvedMode<'_, E> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::EmptySequence => "empty_sequence",
            Self::ByTruthiness => "by_truthiness",
            Self::ByEquality(_) => "by_equality",
            Self::ByPredicate(_) => "by_predicate",
        }
    }

    pub fn is_empty_sequence(&self) -> bool {
        matches!(self, Self::EmptySequence)
    }
}

impl<E: PartialEq + Truthy> ResolvedMode<'_, E> {
    /// Per-element test. Never called for `EmptySequence`, where it answers `false`.
    #[inline]
    pub fn test(&mut self, element: &E) -> bool {
        match self {
            Self::EmptySequence => false,
            Self::ByTruthiness => element.is_truthy(),
            Self::ByEquality(target) => element == target,
            Self::ByPredicate(predicate) => predicate(element),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for ResolvedMode<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySequence => f.write_str("EmptySequence"),
            Self::ByTruthiness => f.write_str("ByTruthiness"),
            Self::ByEquality(target) => f.debug_tuple("ByEquality").field(target).finish(),
            Self::ByPredicate(_) => f.write_str("ByPredicate(<fn>)"),
        }
    }
}
