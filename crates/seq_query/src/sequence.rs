use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

use crate::{QueryConfig, SequenceError, SequenceQuery, Truthy, compare};

/// Growable sequence carrying its own [`QueryConfig`].
///
/// Storage is a plain `Vec<E>`; the mutators return `&mut Self` so calls can
/// be chained.
#[derive(Clone, Debug)]
pub struct Sequence<E> {
    elements: Vec<E>,
    config: QueryConfig,
}

impl<E> Default for Sequence<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Sequence<E> {
    pub fn new() -> Self {
        Self::with_config(Vec::new(), QueryConfig::default())
    }

    pub fn with_config(elements: Vec<E>, config: QueryConfig) -> Self {
        Self { elements, config }
    }

    pub fn set_config(&mut self, config: QueryConfig) -> &mut Self {
        self.config = config;
        self
    }

    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<E> {
        self.elements
    }

    pub fn append(&mut self, element: E) -> &mut Self {
        self.elements.push(element);
        self
    }

    pub fn prepend(&mut self, element: E) -> &mut Self {
        self.elements.insert(0, element);
        self
    }

    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, element: E) -> &mut Self {
        self.elements.insert(index, element);
        self
    }

    pub fn try_insert(&mut self, index: usize, element: E) -> Result<&mut Self, SequenceError> {
        let len = self.elements.len();
        if index > len {
            return Err(SequenceError::IndexOutOfBounds { index, len });
        }
        Ok(self.insert(index, element))
    }

    pub fn fetch(&self, index: usize) -> Result<&E, SequenceError> {
        self.elements
            .get(index)
            .ok_or(SequenceError::IndexOutOfBounds {
                index,
                len: self.elements.len(),
            })
    }
}

impl<E: PartialEq + Truthy> SequenceQuery for Sequence<E> {
    type Item = E;

    #[inline]
    fn as_elements(&self) -> &[E] {
        &self.elements
    }

    #[inline]
    fn config(&self) -> QueryConfig {
        self.config
    }
}

impl<E> Deref for Sequence<E> {
    type Target = [E];

    fn deref(&self) -> &[E] {
        &self.elements
    }
}

impl<E> DerefMut for Sequence<E> {
    fn deref_mut(&mut self) -> &mut [E] {
        &mut self.elements
    }
}

impl<E> From<Vec<E>> for Sequence<E> {
    fn from(elements: Vec<E>) -> Self {
        Self::with_config(elements, QueryConfig::default())
    }
}

impl<E> FromIterator<E> for Sequence<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<E> IntoIterator for Sequence<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Sequence<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<E: PartialEq> PartialEq for Sequence<E> {
    fn eq(&self, other: &Self) -> bool {
        compare::eql(&self.elements, &other.elements)
    }
}

impl<E: PartialOrd> PartialOrd for Sequence<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare::try_compare(&self.elements, &other.elements).ok()
    }
}
