/// Emits a `tracing` trace event when the `tracing` feature is enabled, and expands to nothing otherwise.
macro_rules! trace {
  ($($arg:tt)*) => {
    #[cfg(feature = "tracing")] {
      ::tracing::trace!($($arg)*);
    }
  };
}

pub(crate) use trace;
