#[cfg(feature = "tracing")]
macro_rules! qtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "quickreturn", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! qtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! qdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "quickreturn", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! qdebug {
    ($($tt:tt)*) => {};
}
