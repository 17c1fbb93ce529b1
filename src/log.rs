//! Diagnostics for recovered failures.
//!
//! With the `tracing` feature these are `tracing`'s own macros. Without it
//! they swallow their arguments, so the placement path costs nothing extra.

#[cfg(feature = "tracing")]
pub use tracing::{debug, error, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, error, warn};
