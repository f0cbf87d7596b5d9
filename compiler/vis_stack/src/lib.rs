//! Stack growth for deeply nested conditions.
//!
//! Both the parser and the interpreter recurse once per nesting level, and a
//! condition like `(not (not (not ... x)))` can be arbitrarily deep. Wrapping
//! each recursive step in [`ensure_sufficient_stack`] moves the recursion onto
//! a freshly allocated segment when the current one runs low.
//!
//! On `wasm32` the closure is called directly.

/// Remaining stack below which a new segment is allocated (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
