//! Logging macros shared by this crate and `windowed-list-adapter`.
//!
//! With the `tracing` feature off they expand to nothing, so their arguments are never evaluated.
//! Events take the calling module's path as their target.

#[cfg(feature = "tracing")]
#[doc(hidden)]
#[macro_export]
macro_rules! vtrace {
    ($($tt:tt)*) => {
        $crate::__private::tracing::trace!($($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! vtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
#[doc(hidden)]
#[macro_export]
macro_rules! vdebug {
    ($($tt:tt)*) => {
        $crate::__private::tracing::debug!($($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! vdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
#[doc(hidden)]
#[macro_export]
macro_rules! vwarn {
    ($($tt:tt)*) => {
        $crate::__private::tracing::warn!($($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! vwarn {
    ($($tt:tt)*) => {};
}
