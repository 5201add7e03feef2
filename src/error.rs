/// Errors produced by [`ArrayList`] operations and its cursors.
///
/// [`ArrayList`]: crate::ArrayList
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// A positional argument lies outside the valid range.
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The length of the list at the time of the call.
        len: usize,
    },

    /// A constructor or configuration argument is malformed.
    #[error("illegal argument: {0}")]
    IllegalArgument(&'static str),

    /// A required collection argument is absent.
    #[error("the collection argument is absent")]
    NullReference,

    /// The cursor has no element in the requested direction.
    #[error("the cursor has no element in the requested direction")]
    NoSuchElement,

    /// A cursor `remove`/`set` without an eligible preceding `next`/`previous`.
    #[error("illegal cursor state: {0}")]
    IllegalState(&'static str),

    /// The list was structurally modified through another handle.
    #[error("concurrent modification: cursor expected modification count {expected}, found {actual}")]
    ConcurrentModification {
        /// The cursor's snapshot.
        expected: usize,
        /// The live counter of the list.
        actual: usize,
    },

    /// An element cannot be stored in the element type of the target array.
    #[error("element at index {index} cannot be stored as `{target}`")]
    ArrayStoreIncompatibility {
        /// Index of the first incompatible element.
        index: usize,
        /// Name of the target element type.
        target: &'static str,
    },
}
