use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Boolean interpretation of an element when no explicit criterion is given.
///
/// - Null-like values (`None`, `()`) are falsy.
/// - Zero-valued numerics are falsy (`0`, `0.0`, `-0.0`); NaN is truthy.
/// - Empty strings and empty containers are falsy.
/// - Everything else is truthy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;

    #[inline]
    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Truthy for $t {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        // NaN != 0.0, so NaN stays truthy.
        *self != 0.0
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for VecDeque<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> Truthy for HashMap<K, V, S> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Truthy for BTreeMap<K, V> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, S> Truthy for HashSet<T, S> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for BTreeSet<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
