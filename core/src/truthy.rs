use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Truthiness test that decides whether a value counts as present.
///
/// Zero, NaN, the empty string, `false`, `None`, and `()` are falsy. Everything else is truthy, which is also what
/// the default method returns: `impl Truthy for MyType {}` makes `MyType` always truthy.
///
/// Truthiness must not change after a value is wrapped: an [`Optional`](crate::Optional) decides presence once, at
/// construction, and does not re-evaluate it.
pub trait Truthy {
  #[inline]
  fn is_truthy(&self) -> bool { true }
}

#[inline]
pub fn is_truthy<T: Truthy + ?Sized>(value: &T) -> bool {
  value.is_truthy()
}


impl Truthy for bool {
  #[inline]
  fn is_truthy(&self) -> bool { *self }
}

impl Truthy for () {
  #[inline]
  fn is_truthy(&self) -> bool { false }
}

impl Truthy for char {}

macro_rules! impl_truthy_int {
  ($($ty:ty),*) => {
    $(
      impl Truthy for $ty {
        #[inline]
        fn is_truthy(&self) -> bool { *self != 0 }
      }
    )*
  };
}
impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_float {
  ($($ty:ty),*) => {
    $(
      impl Truthy for $ty {
        #[inline]
        fn is_truthy(&self) -> bool { *self != 0.0 && !self.is_nan() }
      }
    )*
  };
}
impl_truthy_float!(f32, f64);

impl Truthy for str {
  #[inline]
  fn is_truthy(&self) -> bool { !self.is_empty() }
}
impl Truthy for String {
  #[inline]
  fn is_truthy(&self) -> bool { !self.is_empty() }
}
impl Truthy for Cow<'_, str> {
  #[inline]
  fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl<T: Truthy> Truthy for Option<T> {
  #[inline]
  fn is_truthy(&self) -> bool {
    self.as_ref().is_some_and(Truthy::is_truthy)
  }
}


impl<T: Truthy + ?Sized> Truthy for &T {
  #[inline]
  fn is_truthy(&self) -> bool { (**self).is_truthy() }
}
impl<T: Truthy + ?Sized> Truthy for &mut T {
  #[inline]
  fn is_truthy(&self) -> bool { (**self).is_truthy() }
}
impl<T: Truthy + ?Sized> Truthy for Box<T> {
  #[inline]
  fn is_truthy(&self) -> bool { (**self).is_truthy() }
}
impl<T: Truthy + ?Sized> Truthy for Rc<T> {
  #[inline]
  fn is_truthy(&self) -> bool { (**self).is_truthy() }
}
impl<T: Truthy + ?Sized> Truthy for Arc<T> {
  #[inline]
  fn is_truthy(&self) -> bool { (**self).is_truthy() }
}

// Collections are objects, and objects are truthy even when empty.
impl<T> Truthy for [T] {}
impl<T, const N: usize> Truthy for [T; N] {}
impl<T> Truthy for Vec<T> {}
impl<T> Truthy for VecDeque<T> {}
impl<K, V, S> Truthy for HashMap<K, V, S> {}
impl<T, S> Truthy for HashSet<T, S> {}
impl<K, V> Truthy for BTreeMap<K, V> {}
impl<T> Truthy for BTreeSet<T> {}

#[cfg(feature = "serde_json")]
impl Truthy for serde_json::Value {
  fn is_truthy(&self) -> bool {
    use serde_json::Value;
    match self {
      Value::Null => false,
      Value::Bool(b) => *b,
      Value::Number(n) => n.as_f64().is_some_and(|n| n.is_truthy()),
      Value::String(s) => s.is_truthy(),
      Value::Array(_) | Value::Object(_) => true,
    }
  }
}
