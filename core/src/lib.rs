//! Truthiness-aware container holding zero or one value.
//!
//! An [`Optional`] is present only when it holds a [truthy](Truthy) value. [`Optional::of`] rejects falsy values with
//! an [`EmptyValueError`], [`Optional::of_falsy`] turns them into an empty optional.

pub mod error;
pub mod json;
pub mod optional;
pub mod truthy;

mod util;

pub use error::EmptyValueError;
pub use json::JsonOptional;
pub use optional::Optional;
pub use truthy::{is_truthy, Truthy};
