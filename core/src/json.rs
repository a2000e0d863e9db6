#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::optional::Optional;
use crate::truthy::Truthy;

/// JSON projection of an [`Optional`]: a record with a single `value` field that is `null` when the optional is
/// empty.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct JsonOptional<T> {
  pub value: Option<T>,
}
impl<T> JsonOptional<T> {
  #[inline]
  pub fn new(value: Option<T>) -> Self {
    Self { value }
  }
}

impl<T> Optional<T> {
  /// Returns the JSON projection of this optional, borrowing the value.
  #[inline]
  pub fn json(&self) -> JsonOptional<&T> {
    JsonOptional::new(self.as_ref().into_option())
  }

  #[inline]
  pub fn into_json(self) -> JsonOptional<T> {
    JsonOptional::new(self.into_option())
  }
}

impl<T: Truthy> From<JsonOptional<T>> for Optional<T> {
  #[inline]
  fn from(json: JsonOptional<T>) -> Self {
    Optional::from(json.value)
  }
}


#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for Optional<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.json().serialize(serializer)
  }
}

/// Decoded values go through permissive construction, so a falsy `value` yields an empty optional.
#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de> + Truthy> Deserialize<'de> for Optional<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    JsonOptional::<T>::deserialize(deserializer).map(Into::into)
  }
}

#[cfg(feature = "serde_json")]
impl<T: Serialize> Optional<T> {
  #[inline]
  pub fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(self.json())
  }

  #[inline]
  pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string(&self.json())
  }
}
