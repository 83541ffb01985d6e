mod aggregate;
mod compare;
mod config;
mod criterion;
mod error;
mod locate;
mod sequence;
mod truthy;
mod value;

use std::cmp::Ordering;

pub use aggregate::{all, any, count, none, one};
pub use compare::{compare, eql, try_compare};
pub use config::{DEFAULT_CONFIG, QueryConfig, Traversal};
pub use criterion::{Argument, Criterion, Predicate, ResolvedMode};
pub use error::SequenceError;
pub use locate::{Location, Positions, index, rindex};
pub use sequence::Sequence;
pub use truthy::Truthy;
pub use value::Value;

/// Query interface over an ordered, randomly accessible sequence.
///
/// - Every query takes a [`Criterion`]: nothing, a comparison value, or a predicate.
/// - Queries never mutate the sequence.
/// - Quantifiers walk the sequence according to [`SequenceQuery::config`];
///   locators stop at the first match in their direction.
pub trait SequenceQuery {
    type Item: PartialEq + Truthy;

    fn as_elements(&self) -> &[Self::Item];

    fn config(&self) -> QueryConfig {
        DEFAULT_CONFIG
    }

    fn length(&self) -> usize {
        self.as_elements().len()
    }

    fn size(&self) -> usize {
        self.length()
    }

    fn include(&self, item: &Self::Item) -> bool {
        self.as_elements().contains(item)
    }

    fn all(&self, criterion: Criterion<'_, Self::Item>) -> bool {
        aggregate::all(self.as_elements(), criterion, &self.config())
    }

    fn any(&self, criterion: Criterion<'_, Self::Item>) -> bool {
        aggregate::any(self.as_elements(), criterion, &self.config())
    }

    fn none(&self, criterion: Criterion<'_, Self::Item>) -> bool {
        aggregate::none(self.as_elements(), criterion, &self.config())
    }

    fn one(&self, criterion: Criterion<'_, Self::Item>) -> bool {
        aggregate::one(self.as_elements(), criterion, &self.config())
    }

    fn count(&self, criterion: Criterion<'_, Self::Item>) -> usize {
        aggregate::count(self.as_elements(), criterion)
    }

    fn index(&self, criterion: Criterion<'_, Self::Item>) -> Location<'_, Self::Item> {
        locate::index(self.as_elements(), criterion)
    }

    fn find_index(&self, criterion: Criterion<'_, Self::Item>) -> Location<'_, Self::Item> {
        self.index(criterion)
    }

    fn rindex(&self, criterion: Criterion<'_, Self::Item>) -> Location<'_, Self::Item> {
        locate::rindex(self.as_elements(), criterion)
    }

    fn eql(&self, other: &[Self::Item]) -> bool {
        compare::eql(self.as_elements(), other)
    }

    fn compare(&self, other: &[Self::Item]) -> Ordering
    where
        Self::Item: PartialOrd,
    {
        compare::compare(self.as_elements(), other)
    }

    fn try_compare(&self, other: &[Self::Item]) -> Result<Ordering, SequenceError>
    where
        Self::Item: PartialOrd,
    {
        compare::try_compare(self.as_elements(), other)
    }
}

impl<E: PartialEq + Truthy> SequenceQuery for [E] {
    type Item = E;

    #[inline]
    fn as_elements(&self) -> &[E] {
        self
    }
}

impl<E: PartialEq + Truthy> SequenceQuery for Vec<E> {
    type Item = E;

    #[inline]
    fn as_elements(&self) -> &[E] {
        self
    }
}


#[cfg(test)]
mod tests {
    use super::{Criterion, Location, SequenceQuery, Value};
    use crate::test_util::WarnCounter;
    use std::cmp::Ordering;

    fn strs(items: &[&str]) -> Vec<Value> {
        items.iter().map(|&s| Value::from(s)).collect()
    }

    #[test]
    fn quantifier_scenarios() {
        let seq = vec![Value::Int(0), Value::Nil, Value::Bool(true), Value::Int(5)];
        assert!(!seq.all(Criterion::unset()));
        assert!(seq.any(Criterion::unset()));
        assert!(!seq.one(Criterion::unset()));
        assert!(seq[..3].one(Criterion::unset()));

        assert!([1_i64, 1, 1, 1].all(Criterion::value(1)));
        let mixed = vec![
            Value::Int(1),
            Value::from("a"),
            Value::from("b"),
            Value::map(Vec::<(Value, Value)>::new()),
        ];
        assert!(!mixed.all(Criterion::value(Value::from("a"))));

        assert!(![1_i64, 25, 50, 75].one(Criterion::predicate(|x: &i64| *x > 20)));
        assert!([1_i64, 2, 3, 25].one(Criterion::predicate(|x: &i64| *x > 20)));
    }

    #[test]
    fn count_scenarios() {
        let falsy = vec![
            Value::list(Vec::<Value>::new()),
            Value::tuple(Vec::<Value>::new()),
            Value::map(Vec::<(Value, Value)>::new()),
            Value::set(Vec::<Value>::new()),
            Value::from(""),
            Value::Int(0),
            Value::Float(0.0),
            Value::Nil,
            Value::Bool(false),
        ];
        assert_eq!(falsy.count(Criterion::unset()), 9);
        assert!(!falsy.any(Criterion::unset()));
        assert!(falsy.none(Criterion::unset()));
        // `0`, `0.0` and `false` are all numerically equal to zero.
        assert_eq!(falsy.count(Criterion::value(Value::Int(0))), 3);
    }

    #[test]
    fn locator_scenarios() {
        let seq = vec![
            Value::from("foo"),
            Value::from("bar"),
            Value::Int(2),
            Value::from("bar"),
        ];
        assert_eq!(seq.index(Criterion::value(Value::from("bar"))).found(), Some(1));
        assert_eq!(seq.find_index(Criterion::value(Value::from("bar"))).found(), Some(1));
        assert_eq!(seq.rindex(Criterion::value(Value::from("bar"))).found(), Some(3));
        assert!(matches!(seq.index(Criterion::unset()), Location::Positions(_)));
        assert!(seq.index(Criterion::value(Value::Nil)).is_not_found());
    }

    #[test]
    fn comparison_scenarios() {
        let a = strs(&["a", "b"]);
        let b = strs(&["a", "c"]);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(a.compare(&a), Ordering::Equal);
        assert!(a.eql(&strs(&["a", "b"])));
        assert!(!a.eql(&b));
        assert_eq!(a.try_compare(&strs(&["a"])), Ok(Ordering::Greater));
    }

    #[test]
    fn conflicting_criteria_match_value_alone() {
        let seq = vec![1_i64, 0, 1, 2];
        let warnings = WarnCounter::default();
        warnings.watch(|| {
            let with = |v: i64| Criterion::value(v).with_predicate(|x: &i64| *x == 2);
            assert_eq!(seq.all(with(1)), seq.all(Criterion::value(1)));
            assert_eq!(seq.any(with(0)), seq.any(Criterion::value(0)));
            assert_eq!(seq.none(with(3)), seq.none(Criterion::value(3)));
            assert_eq!(seq.one(with(0)), seq.one(Criterion::value(0)));
            assert_eq!(seq.count(with(1)), seq.count(Criterion::value(1)));
            assert_eq!(
                seq.index(with(1)).found(),
                seq.index(Criterion::value(1)).found()
            );
            assert_eq!(
                seq.rindex(with(1)).found(),
                seq.rindex(Criterion::value(1)).found()
            );
        });
        assert_eq!(warnings.count(), 7);
    }
}
