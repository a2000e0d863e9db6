use std::cell::Cell;

use optional_core::{EmptyValueError, JsonOptional, Optional, Truthy};

#[test]
fn of_creates_present_optional() {
  let optional = Optional::of("xyz").unwrap();
  assert!(optional.is_present());
  assert!(!optional.is_empty());
}

#[test]
fn of_fails_on_falsy_value() {
  assert_eq!(Optional::of(None::<&str>), Err(EmptyValueError::FalsyValue));
}

#[test]
fn of_falsy_creates_present_optional() {
  let optional = Optional::of_falsy("abc");
  assert!(optional.is_present());
  assert!(!optional.is_empty());
}

#[test]
fn of_falsy_creates_empty_optional_from_falsy_value() {
  let optional = Optional::of_falsy(None::<&str>);
  assert!(!optional.is_present());
  assert!(optional.is_empty());
}

#[test]
fn empty_creates_empty_optional() {
  let optional = Optional::<String>::empty();
  assert!(!optional.is_present());
  assert!(optional.is_empty());
  assert_eq!(optional.get(), Err(EmptyValueError::EmptyContainer));
}

#[test]
fn get_on_empty_reports_message() {
  let error = Optional::of_falsy("").into_value().unwrap_err();
  assert_eq!(error.to_string(), "requested value from empty container");
}

#[test]
fn map() -> Result<(), EmptyValueError> {
  let value = Optional::of("abc")?.map(|s| format!("{s} def"))?.into_value()?;
  assert_eq!(value, "abc def");
  Ok(())
}

#[test]
fn map_on_empty() {
  let mapped = Optional::of_falsy(None::<&str>).map(|s| s.map(|s| format!("{s} def"))).unwrap();
  assert!(mapped.is_empty());
}

#[test]
fn map_to_falsy_value() {
  assert_eq!(Optional::of(7u32).unwrap().map(|n| n - 7), Err(EmptyValueError::FalsyValue));
}

#[test]
fn flat_map() {
  let value = Optional::of("abc")
    .unwrap()
    .flat_map(|s| Optional::of_falsy(format!("{s} def")))
    .or_else("nope".to_string());
  assert_eq!(value, "abc def");
}

#[test]
fn flat_map_on_empty() {
  let value = Optional::of_falsy(String::new())
    .flat_map(|s| Optional::of_falsy(format!("{s} def")))
    .or_else("me".to_string());
  assert_eq!(value, "me");
}

#[test]
fn flat_map_returns_mapper_result_directly() {
  let inner = Optional::<u8>::empty();
  assert_eq!(Optional::of(1u8).unwrap().flat_map(|_| inner), inner);
}

#[test]
fn or_else() {
  assert_eq!(Optional::of("abc").unwrap().or_else("else"), "abc");
  assert_eq!(Optional::of_falsy("").or_else("else"), "else");
}

#[test]
fn or_else_get() {
  assert_eq!(Optional::of("abc").unwrap().or_else_get(|| "x"), "abc");
  assert_eq!(Optional::from(None::<i32>).or_else_get(|| 3), 3);
}

#[derive(Debug, PartialEq)]
struct ThrowMe(&'static str);

#[test]
fn or_else_throw() {
  let called = Cell::new(false);
  let value = Optional::of("abc").unwrap().or_else_throw(|| {
    called.set(true);
    ThrowMe("should not throw")
  });
  assert_eq!(value, Ok("abc"));
  assert!(!called.get());
}

#[test]
fn or_else_throw_on_empty() {
  let value = Optional::of_falsy(None::<&str>).or_else_throw(|| ThrowMe("Throw me!"));
  assert_eq!(value, Err(ThrowMe("Throw me!")));
}

#[test]
fn filter_passing() {
  let value = Optional::of("abc").unwrap().filter(|s| *s == "abc").or_else("null");
  assert_eq!(value, "abc");
}

#[test]
fn filter_rejecting() {
  let value = Optional::of("abc").unwrap().filter(|s| *s != "abc").or_else("null");
  assert_eq!(value, "null");
}

#[test]
fn filter_on_empty() {
  let called = Cell::new(false);
  let value = Optional::of_falsy("")
    .filter(|_| {
      called.set(true);
      true
    })
    .or_else("null");
  assert_eq!(value, "null");
  assert!(!called.get());
}

#[test]
fn or() {
  let value = Optional::of_falsy("").or(|| Optional::of_falsy("def"));
  assert_eq!(value.get(), Ok(&"def"));
  let value = Optional::of("abc").unwrap().or(|| Optional::of_falsy("def"));
  assert_eq!(value.get(), Ok(&"abc"));
}

struct Counter {
  n: Cell<i32>,
}
impl Truthy for Counter {}

#[test]
fn if_present() {
  let value = Counter { n: Cell::new(1) };
  Optional::of(&value).unwrap().if_present(|v| v.n.set(2));
  assert_eq!(value.n.get(), 2);

  Optional::<&Counter>::empty().if_present(|v| v.n.set(3));
  assert_eq!(value.n.get(), 2);
}

#[test]
fn if_present_or_else() {
  let value = Counter { n: Cell::new(1) };
  let action_calls = Cell::new(0);
  Optional::of(&value).unwrap().if_present_or_else(
    |v| v.n.set(v.n.get() + 1),
    || action_calls.set(action_calls.get() + 1),
  );
  assert_eq!(value.n.get(), 2);
  assert_eq!(action_calls.get(), 0);
}

#[test]
fn if_present_or_else_on_empty() {
  let value = Cell::new(1);
  Optional::of_falsy("").if_present_or_else(
    |_| panic!("consumer must not run for an empty optional"),
    || value.set(value.get() + 1),
  );
  assert_eq!(value.get(), 2);
}

#[test]
fn json() {
  assert_eq!(Optional::of("abc").unwrap().into_json(), JsonOptional { value: Some("abc") });
  assert_eq!(Optional::of_falsy("").into_json(), JsonOptional { value: None });
}

#[cfg(feature = "serde_json")]
#[test]
fn json_serialization() {
  use serde_json::json;

  assert_eq!(serde_json::to_value(Optional::of("abc").unwrap().json()).unwrap(), json!({ "value": "abc" }));
  assert_eq!(serde_json::to_value(Optional::of_falsy("").json()).unwrap(), json!({ "value": null }));
  assert_eq!(serde_json::to_value(Optional::of(3u8).unwrap()).unwrap(), json!({ "value": 3 }));
}

#[test]
#[should_panic(expected = "mapper failure")]
fn mapper_panics_propagate() {
  let _ = Optional::of(1u8).unwrap().map(|_| -> u8 { panic!("mapper failure") });
}
