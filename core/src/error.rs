use thiserror::Error;

/// A value was absent where presence was required.
///
/// This is the only failure an [`Optional`](crate::Optional) raises by itself. Failures produced by caller-supplied
/// closures are never converted into this type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum EmptyValueError {
  /// Strict construction was given a falsy value.
  #[error("optional initialized with falsy value; use of_falsy() instead")]
  FalsyValue,
  /// A value was requested from an empty container.
  #[error("requested value from empty container")]
  EmptyContainer,
}
