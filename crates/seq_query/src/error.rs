use thiserror::Error as ThisError;

///
/// SequenceError
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum SequenceError {
    #[error("elements at index {index} have no defined ordering")]
    Incomparable { index: usize },

    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
