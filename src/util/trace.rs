/// Emits a `tracing` event at trace level when the `tracing` feature is enabled, otherwise expands
/// to nothing.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub(crate) use trace;
