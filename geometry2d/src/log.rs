//--------------------------------------------------------------------
// log.rs
//--------------------------------------------------------------------
// Conditional logging macros: forwarded to `tracing` when the
// feature is on, expanded to nothing otherwise
//--------------------------------------------------------------------

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

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
pub use crate::{debug, warn};
