use std::cmp::Ordering;

use crate::SequenceError;

/// Element-wise equality: same length and `a[i] == b[i]` for every `i`.
pub fn eql<E: PartialEq>(a: &[E], b: &[E]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

/// Three-way comparison: `Equal` when `eql`, `Less` when `a` sorts before `b`
/// lexicographically, `Greater` otherwise (including incomparable elements).
pub fn compare<E: PartialOrd>(a: &[E], b: &[E]) -> Ordering {
    if eql(a, b) {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Like [`compare`], but reports the first pair of elements without an ordering.
pub fn try_compare<E: PartialOrd>(a: &[E], b: &[E]) -> Result<Ordering, SequenceError> {
    for (index, (x, y)) in a.iter().zip(b).enumerate() {
        match x.partial_cmp(y) {
            Some(Ordering::Equal) => {}
            Some(ord) => return Ok(ord),
            None => return Err(SequenceError::Incomparable { index }),
        }
    }
    Ok(a.len().cmp(&b.len()))
}
