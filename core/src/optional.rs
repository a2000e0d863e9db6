use crate::error::EmptyValueError;
use crate::truthy::Truthy;
use crate::util::trace::trace;

/// Container holding zero or one value.
///
/// Presence is decided by [truthiness](Truthy): an optional never holds a falsy value. [`of`](Self::of) rejects
/// falsy values, [`of_falsy`](Self::of_falsy) turns them into an empty optional, and [`empty`](Self::empty) creates
/// an empty optional directly. Optionals are immutable; combinators consume `self` and return a new optional.
///
/// Closures passed to combinators are called synchronously, at most once, and only in the state the combinator
/// documents. Their failures (`Err` values of the `try_*` combinators, or panics) propagate unmodified.
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct Optional<T> {
  data: Option<T>,
}

impl<T: Truthy> Optional<T> {
  /// Creates an optional holding `value`, failing with [`EmptyValueError::FalsyValue`] if `value` is falsy. Use
  /// [`of_falsy`](Self::of_falsy) for values that may be falsy.
  #[inline]
  pub fn of(value: T) -> Result<Self, EmptyValueError> {
    if !value.is_truthy() {
      trace!(value_type = std::any::type_name::<T>(), "rejected falsy value in strict construction");
      return Err(EmptyValueError::FalsyValue);
    }
    Ok(Self { data: Some(value) })
  }

  /// Creates an optional holding `value` if it is truthy, or an empty optional otherwise.
  #[inline]
  pub fn of_falsy(value: T) -> Self {
    Self::from(Some(value))
  }
}

impl<T> Optional<T> {
  #[inline]
  pub const fn empty() -> Self {
    Self { data: None }
  }


  #[inline]
  pub const fn is_present(&self) -> bool {
    self.data.is_some()
  }

  #[inline]
  pub const fn is_empty(&self) -> bool {
    !self.is_present()
  }


  /// Returns a reference to the value, or [`EmptyValueError::EmptyContainer`] if this optional is empty.
  ///
  /// Prefer [`or_else`](Self::or_else) or [`or_else_get`](Self::or_else_get) to extract values.
  #[inline]
  pub fn get(&self) -> Result<&T, EmptyValueError> {
    match &self.data {
      Some(value) => Ok(value),
      None => Err(Self::empty_container()),
    }
  }

  /// Owning version of [`get`](Self::get).
  #[inline]
  pub fn into_value(self) -> Result<T, EmptyValueError> {
    match self.data {
      Some(value) => Ok(value),
      None => Err(Self::empty_container()),
    }
  }

  /// Returns the value if present, otherwise `fallback`.
  #[inline]
  pub fn or_else(self, fallback: T) -> T {
    self.data.unwrap_or(fallback)
  }

  /// Returns the value if present, otherwise calls `supplier` and returns its result as-is.
  #[inline]
  pub fn or_else_get(self, supplier: impl FnOnce() -> T) -> T {
    self.data.unwrap_or_else(supplier)
  }

  /// Returns the value if present, otherwise returns the error created by `throwable`.
  #[inline]
  pub fn or_else_throw<E>(self, throwable: impl FnOnce() -> E) -> Result<T, E> {
    self.data.ok_or_else(throwable)
  }


  /// Applies `mapper` to the value if present, wrapping its result with [strict construction](Self::of).
  ///
  /// An empty optional maps to an empty optional without calling `mapper`. A falsy mapper result fails with
  /// [`EmptyValueError::FalsyValue`]; use [`map_falsy`](Self::map_falsy) to get an empty optional instead.
  #[inline]
  pub fn map<U: Truthy>(self, mapper: impl FnOnce(T) -> U) -> Result<Optional<U>, EmptyValueError> {
    match self.data {
      Some(value) => Optional::of(mapper(value)),
      None => Ok(Optional::empty()),
    }
  }

  /// Applies `mapper` to the value if present, wrapping its result with [permissive construction](Self::of_falsy).
  #[inline]
  pub fn map_falsy<U: Truthy>(self, mapper: impl FnOnce(T) -> U) -> Optional<U> {
    match self.data {
      Some(value) => Optional::of_falsy(mapper(value)),
      None => Optional::empty(),
    }
  }

  /// Like [`map`](Self::map) with a fallible `mapper`. Errors from `mapper` are returned unmodified; a falsy result
  /// is converted from [`EmptyValueError::FalsyValue`].
  #[inline]
  pub fn try_map<U: Truthy, E: From<EmptyValueError>>(
    self,
    mapper: impl FnOnce(T) -> Result<U, E>,
  ) -> Result<Optional<U>, E> {
    match self.data {
      Some(value) => Ok(Optional::of(mapper(value)?)?),
      None => Ok(Optional::empty()),
    }
  }

  /// Returns the optional created by `mapper` from the value if present, otherwise an empty optional.
  #[inline]
  pub fn flat_map<U>(self, mapper: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
    match self.data {
      Some(value) => mapper(value),
      None => Optional::empty(),
    }
  }

  #[inline]
  pub fn try_flat_map<U, E>(self, mapper: impl FnOnce(T) -> Result<Optional<U>, E>) -> Result<Optional<U>, E> {
    match self.data {
      Some(value) => mapper(value),
      None => Ok(Optional::empty()),
    }
  }

  /// Keeps the value if present and `predicate` holds for it, otherwise returns an empty optional.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    Self { data: self.data.filter(predicate) }
  }

  #[inline]
  pub fn try_filter<E>(self, predicate: impl FnOnce(&T) -> Result<bool, E>) -> Result<Self, E> {
    match self.data {
      Some(value) => Ok(if predicate(&value)? { Self { data: Some(value) } } else { Self::empty() }),
      None => Ok(Self::empty()),
    }
  }

  /// Returns `self` if a value is present, otherwise the optional created by `supplier`.
  #[inline]
  pub fn or(self, supplier: impl FnOnce() -> Self) -> Self {
    if self.is_present() { self } else { supplier() }
  }


  /// Calls `consumer` with the value if present, otherwise does nothing.
  #[inline]
  pub fn if_present(&self, consumer: impl FnOnce(&T)) {
    if let Some(value) = &self.data {
      consumer(value);
    }
  }

  /// Calls `consumer` with the value if present, otherwise calls `action`.
  #[inline]
  pub fn if_present_or_else(&self, consumer: impl FnOnce(&T), action: impl FnOnce()) {
    match &self.data {
      Some(value) => consumer(value),
      None => action(),
    }
  }


  #[inline]
  pub fn as_ref(&self) -> Optional<&T> {
    Optional { data: self.data.as_ref() }
  }

  #[inline]
  pub fn into_option(self) -> Option<T> {
    self.data
  }


  #[inline]
  fn empty_container() -> EmptyValueError {
    trace!(value_type = std::any::type_name::<T>(), "requested value from empty container");
    EmptyValueError::EmptyContainer
  }
}

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Self::empty() }
}

/// Permissive conversion: `Some` of a falsy value becomes an empty optional.
impl<T: Truthy> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(value: Option<T>) -> Self {
    Self { data: value.filter(Truthy::is_truthy) }
  }
}

impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self { optional.data }
}

impl<T> Truthy for Optional<T> {
  #[inline]
  fn is_truthy(&self) -> bool { self.is_present() }
}
