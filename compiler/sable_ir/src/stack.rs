//! Stack growth for recursive tree walks.
//!
//! Trees are as deep as the source nests them, and desugaring makes them
//! deeper (`f a b c` is three applications, a long list literal built with
//! `::` is one node per element). Recursive walks over them go through
//! [`ensure_sufficient_stack`].

/// Grow the stack when less than this much is left.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment.
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first moving to a fresh stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
