/// How quantifiers walk the sequence once a criterion is resolved.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Traversal {
    /// Every element is tested, so a predicate observes the whole sequence.
    #[default]
    Exhaustive,
    /// Stop as soon as the result can no longer change.
    ShortCircuit,
}

/// Per-sequence query settings.
///
/// Locators always stop at the first match and `count` always visits every
/// element; `traversal` only affects `all`, `any`, `none` and `one`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct QueryConfig {
    pub traversal: Traversal,
}

pub const DEFAULT_CONFIG: QueryConfig = QueryConfig {
    traversal: Traversal::Exhaustive,
};

impl QueryConfig {
    pub const fn short_circuit() -> Self {
        Self {
            traversal: Traversal::ShortCircuit,
        }
    }

    #[inline]
    pub(crate) fn stops_early(&self) -> bool {
        self.traversal == Traversal::ShortCircuit
    }
}
