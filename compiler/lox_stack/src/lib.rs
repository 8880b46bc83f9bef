//! Stack growth for deeply nested Lox programs.
//!
//! The parser descends once per nesting level of grouping, unary and
//! assignment chains, and the evaluator descends once per expression and
//! block level. Source like `((((((...))))))` or `!!!!!!...x` would
//! otherwise overflow the native stack. Recursive entry points are wrapped
//! in [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! On `wasm32` the guard is a passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than `RED_ZONE` bytes remain.
///
/// ```text
/// fn unary(&mut self) -> Result<Expr, ParseError> {
///     ensure_sufficient_stack(|| {
///         // ... may call self.unary() again ...
///     })
/// }
/// ```
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
