use std::iter::FusedIterator;

use crate::{Criterion, ResolvedMode, Truthy};

/// Result of `index` / `rindex`.
///
/// - `NotFound`: the sequence is empty or nothing matched.
/// - `Found(i)`: position of the first (or last, for `rindex`) match.
/// - `Positions`: no criterion was given; enumerates every position instead.
#[derive(Clone, Debug)]
pub enum Location<'s, E> {
    NotFound,
    Found(usize),
    Positions(Positions<'s, E>),
}

impl<'s, E> Location<'s, E> {
    pub fn found(&self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(*index),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn into_positions(self) -> Option<Positions<'s, E>> {
        match self {
            Self::Positions(positions) => Some(positions),
            _ => None,
        }
    }
}

/// Lazy, restartable walk over `(position, element)` pairs.
///
/// Ascending for `index`, descending for `rindex`.
#[derive(Debug)]
pub struct Positions<'s, E> {
    elements: &'s [E],
    reversed: bool,
    front: usize,
    back: usize,
}

impl<E> Clone for Positions<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Positions<'_, E> {}

impl<'s, E> Positions<'s, E> {
    pub(crate) fn new(elements: &'s [E], reversed: bool) -> Self {
        Self {
            elements,
            reversed,
            front: 0,
            back: elements.len(),
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Rewinds to the first position.
    pub fn restart(&mut self) {
        self.front = 0;
        self.back = self.elements.len();
    }

    fn take_front(&mut self) -> Option<usize> {
        (self.front < self.back).then(|| {
            self.front += 1;
            self.front - 1
        })
    }

    fn take_back(&mut self) -> Option<usize> {
        (self.front < self.back).then(|| {
            self.back -= 1;
            self.back
        })
    }
}

impl<'s, E> Iterator for Positions<'s, E> {
    type Item = (usize, &'s E);

    fn next(&mut self) -> Option<Self::Item> {
        let index = if self.reversed {
            self.take_back()?
        } else {
            self.take_front()?
        };
        Some((index, &self.elements[index]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<E> DoubleEndedIterator for Positions<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = if self.reversed {
            self.take_front()?
        } else {
            self.take_back()?
        };
        Some((index, &self.elements[index]))
    }
}

impl<E> ExactSizeIterator for Positions<'_, E> {}

impl<E> FusedIterator for Positions<'_, E> {}

/// First position matching the criterion, scanning forward.
pub fn index<'s, E: PartialEq + Truthy>(
    elements: &'s [E],
    criterion: Criterion<'_, E>,
) -> Location<'s, E> {
    match criterion.resolve(elements.len()) {
        ResolvedMode::EmptySequence => Location::NotFound,
        ResolvedMode::ByTruthiness => Location::Positions(Positions::new(elements, false)),
        mut mode => elements
            .iter()
            .position(|element| mode.test(element))
            .map_or(Location::NotFound, Location::Found),
    }
}

/// Last position matching the criterion, scanning backward.
pub fn rindex<'s, E: PartialEq + Truthy>(
    elements: &'s [E],
    criterion: Criterion<'_, E>,
) -> Location<'s, E> {
    match criterion.resolve(elements.len()) {
        ResolvedMode::EmptySequence => Location::NotFound,
        ResolvedMode::ByTruthiness => Location::Positions(Positions::new(elements, true)),
        mut mode => elements
            .iter()
            .rposition(|element| mode.test(element))
            .map_or(Location::NotFound, Location::Found),
    }
}
