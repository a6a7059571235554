/// Errors that can occur when interacting with a [crate::BitVec].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The index does not refer to a bit of the vector.
    #[error("index out of range: {index} >= {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The range ends before it starts.
    #[error("invalid range: end ({end}) < start ({start})")]
    InvalidRange { start: isize, end: isize },
}
