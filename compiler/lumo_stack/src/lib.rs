//! On-demand stack growth for recursive parsing and evaluation.
//!
//! The parser and evaluator recurse once per nesting level and once per
//! closure call; there is no tail-call elimination. Wrapping each recursive
//! step in [`ensure_sufficient_stack`] moves the failure point from the
//! thread's fixed stack to available memory. Stack use is still proportional
//! to depth.
//!
//! - **Native targets**: `stacker::maybe_grow`
//! - **WASM targets**: direct call

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
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
