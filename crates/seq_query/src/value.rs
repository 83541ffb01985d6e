use std::cmp::Ordering;

use crate::Truthy;

/// Dynamically typed element for heterogeneous sequences.
///
/// Equality is numeric across `Bool`, `Int` and `Float` (`true == 1`,
/// `0 == 0.0`). Maps and sets compare without regard to insertion order.
/// Ordering is only defined between numbers, between strings, between two
/// lists or two tuples (lexicographically), and between equal values.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Map(Vec<(Value, Value)>),
    Set(Vec<Value>),
}

#[derive(Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    fn partial_cmp(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a))
                if b.fract() == 0.0 && b >= i64::MIN as f64 && b < i64::MAX as f64 =>
            {
                // Exact integral floats compare as integers so large values keep precision.
                let ord = a.cmp(&(b as i64));
                Some(if matches!(self, Self::Int(_)) { ord } else { ord.reverse() })
            }
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl Value {
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn tuple<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Builds a map; a later entry replaces an earlier one with an equal key.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let mut out: Vec<(Value, Value)> = Vec::new();
        for (k, v) in entries {
            let (k, v) = (k.into(), v.into());
            match out.iter_mut().find(|(existing, _)| *existing == k) {
                Some(slot) => slot.1 = v,
                None => out.push((k, v)),
            }
        }
        Self::Map(out)
    }

    /// Builds a set; duplicates (by `==`) are dropped.
    pub fn set<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mut out: Vec<Value> = Vec::new();
        for item in items {
            let item = item.into();
            if !out.contains(&item) {
                out.push(item);
            }
        }
        Self::Set(out)
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    fn as_number(&self) -> Option<Number> {
        match *self {
            Self::Bool(b) => Some(Number::Int(i64::from(b))),
            Self::Int(i) => Some(Number::Int(i)),
            Self::Float(f) => Some(Number::Float(f)),
            _ => None,
        }
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Int(i) => i.is_truthy(),
            Self::Float(f) => f.is_truthy(),
            Self::Str(s) => s.is_truthy(),
            Self::List(items) | Self::Tuple(items) | Self::Set(items) => items.is_truthy(),
            Self::Map(entries) => entries.is_truthy(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) | (Self::Tuple(a), Self::Tuple(b)) => a == b,
            // Mutual containment, so raw variants holding duplicates still compare symmetrically.
            (Self::Map(a), Self::Map(b)) => covers(a, b) && covers(b, a),
            (Self::Set(a), Self::Set(b)) => covers(a, b) && covers(b, a),
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a.partial_cmp(b) == Some(Ordering::Equal),
                _ => false,
            },
        }
    }
}

fn covers<T: PartialEq>(outer: &[T], inner: &[T]) -> bool {
    inner.iter().all(|item| outer.contains(item))
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
            return a.partial_cmp(b);
        }
        match (self, other) {
            (Self::Str(a), Self::Str(b)) => Some(a.cmp(b)),
            (Self::List(a), Self::List(b)) | (Self::Tuple(a), Self::Tuple(b)) => {
                a.as_slice().partial_cmp(b.as_slice())
            }
            _ if self == other => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Nil
    }
}

#[cfg(test)]
mod tests {
    use super::Value;
    use crate::{Criterion, Truthy, count, index};
    use std::cmp::Ordering;

    #[test]
    fn numeric_equality_crosses_kinds() {
        assert_eq!(Value::Bool(true), Value::Int(1));
        assert_eq!(Value::Int(0), Value::Float(0.0));
        assert_eq!(Value::Float(-0.0), Value::Bool(false));
        assert_ne!(Value::Int(1), Value::from("1"));
        assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_ne!(Value::Nil, Value::Bool(false));
    }

    #[test]
    fn maps_and_sets_ignore_order() {
        let a = Value::map([("x", 1), ("y", 2)]);
        let b = Value::map([("y", 2), ("x", 1)]);
        assert_eq!(a, b);
        assert_eq!(Value::set([1, 2, 2, 3]), Value::set([3, 2, 1]));
        assert_ne!(Value::set([1, 2]), Value::list([1, 2]));
        assert_eq!(Value::map([("k", 1), ("k", 2)]), Value::map([("k", 2)]));
    }

    #[test]
    fn raw_sets_and_maps_compare_symmetrically() {
        let dup = Value::Set(vec![Value::Int(1), Value::Int(1)]);
        let pair = Value::Set(vec![Value::Int(1), Value::Int(2)]);
        assert_ne!(dup, pair);
        assert_ne!(pair, dup);
        assert_eq!(dup, Value::set([1]));
        assert_eq!(Value::set([1]), dup);

        let entry = |k: &str, v: i64| (Value::from(k), Value::Int(v));
        let dup = Value::Map(vec![entry("k", 1), entry("k", 1)]);
        let pair = Value::Map(vec![entry("k", 1), entry("j", 2)]);
        assert_ne!(dup, pair);
        assert_ne!(pair, dup);

        let seq = vec![
            Value::Set(vec![Value::Int(1), Value::Int(1)]),
            Value::set([1, 2]),
            Value::set([2, 1]),
        ];
        assert_eq!(count(&seq, Criterion::value(Value::set([1, 2]))), 2);
        assert_eq!(
            count(&seq, Criterion::value(Value::Set(vec![Value::Int(1), Value::Int(1)]))),
            1
        );
        assert_eq!(
            index(&seq, Criterion::value(Value::Set(vec![Value::Int(2), Value::Int(1)]))).found(),
            Some(1)
        );
    }

    #[test]
    fn nil_is_only_nil() {
        assert!(Value::Nil.is_nil());
        assert!(Value::default().is_nil());
        assert!(Value::from(()).is_nil());
        assert!(!Value::Bool(false).is_nil());
        assert!(!Value::Int(0).is_nil());
    }

    #[test]
    fn falsy_values() {
        let falsy = [
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
        for value in &falsy {
            assert!(value.is_falsy(), "{value:?}");
        }
        assert!(Value::list([Value::Nil]).is_truthy());
        assert!(Value::from("0").is_truthy());
    }

    #[test]
    fn ordering() {
        assert_eq!(Value::Int(1).partial_cmp(&Value::Float(1.5)), Some(Ordering::Less));
        assert_eq!(Value::from("b").partial_cmp(&Value::from("a")), Some(Ordering::Greater));
        assert_eq!(
            Value::list([1, 2]).partial_cmp(&Value::list([1, 2, 0])),
            Some(Ordering::Less)
        );
        assert_eq!(Value::Nil.partial_cmp(&Value::Nil), Some(Ordering::Equal));
        assert_eq!(Value::Int(1).partial_cmp(&Value::from("a")), None);
        assert_eq!(Value::list([1]).partial_cmp(&Value::tuple([1])), None);
        assert_eq!(
            Value::Int(i64::MAX).partial_cmp(&Value::Float(9.0e18)),
            Some(Ordering::Greater)
        );
    }
}
