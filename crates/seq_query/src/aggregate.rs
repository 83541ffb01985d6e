use crate::{Criterion, QueryConfig, ResolvedMode, Truthy};

pub fn all<E: PartialEq + Truthy>(
    elements: &[E],
    criterion: Criterion<'_, E>,
    config: &QueryConfig,
) -> bool {
    let mut mode = criterion.resolve(elements.len());
    if mode.is_empty_sequence() {
        return true;
    }
    let mut result = true;
    for element in elements {
        if !mode.test(element) {
            result = false;
            if config.stops_early() {
                break;
            }
        }
    }
    result
}

pub fn any<E: PartialEq + Truthy>(
    elements: &[E],
    criterion: Criterion<'_, E>,
    config: &QueryConfig,
) -> bool {
    let mut mode = criterion.resolve(elements.len());
    if mode.is_empty_sequence() {
        return false;
    }
    let mut result = false;
    for element in elements {
        if mode.test(element) {
            result = true;
            if config.stops_early() {
                break;
            }
        }
    }
    result
}

/// Complement of [`any`], including its empty-sequence answer.
#[inline]
pub fn none<E: PartialEq + Truthy>(
    elements: &[E],
    criterion: Criterion<'_, E>,
    config: &QueryConfig,
) -> bool {
    !any(elements, criterion, config)
}

pub fn one<E: PartialEq + Truthy>(
    elements: &[E],
    criterion: Criterion<'_, E>,
    config: &QueryConfig,
) -> bool {
    let mut mode = criterion.resolve(elements.len());
    if mode.is_empty_sequence() {
        return false;
    }
    let mut hits = 0_usize;
    for element in elements {
        if mode.test(element) {
            hits += 1;
            // A second hit already rules out "exactly one".
            if hits == 2 && config.stops_early() {
                break;
            }
        }
    }
    hits == 1
}

/// Number of elements passing the criterion.
///
/// With no criterion at all this is the number of elements, not the number of
/// truthy ones: `count([0, 0, 0]) == 3`.
pub fn count<E: PartialEq + Truthy>(elements: &[E], criterion: Criterion<'_, E>) -> usize {
    if criterion.is_unset() {
        return elements.len();
    }
    let mut mode = criterion.resolve(elements.len());
    count_resolved(elements, &mut mode)
}

fn count_resolved<E: PartialEq + Truthy>(elements: &[E], mode: &mut ResolvedMode<'_, E>) -> usize {
    if mode.is_empty_sequence() {
        return 0;
    }
    let mut hits = 0;
    for element in elements {
        if mode.test(element) {
            hits += 1;
        }
    }
    hits
}
