//! Stack growth for deeply nested sol source.
//!
//! The expression grammar recurses once per nesting level (parentheses,
//! Pi chains, lambda bodies). Inputs such as `((((…))))` with thousands of
//! levels would overflow a default thread stack, so every recursive grammar
//! entry point runs inside [`ensure_sufficient_stack`].
//!
//! On `wasm32` the guard is a plain call.

/// Grow once less than this much stack remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// nearly exhausted.
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
mod tests {
    use super::ensure_sufficient_stack;

    fn nest(depth: u32) -> u32 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
    }

    #[test]
    fn passes_result_through() {
        let result: Result<u8, &str> = ensure_sufficient_stack(|| Ok(7));
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn survives_deep_nesting() {
        assert_eq!(nest(200_000), 200_000);
    }
}
