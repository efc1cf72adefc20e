//! Invariant Checks - "Roll Cage" for detector/integrator synchronisation
//!
//! In Debug mode: a broken invariant panics with a useful message
//! In Release mode: the violation is logged through `tracing` and the caller skips the work
//!
//! Usage:
//! ```rust
//! use rect_engine::engine_invariant;
//!
//! let present = true;
//! if engine_invariant!(present, "entity {} vanished mid-tick", 7) {
//!     // safe to proceed
//! }
//! ```

/// Check an internal invariant.
///
/// Evaluates to `true` when the condition holds.
///
/// - Debug: panics when the condition is false
/// - Release: logs at error level and evaluates to `false`
///
/// Never use this for conditions the caller can legitimately produce
/// (missing collisions, non-inertial entities in a filter); those are data.
#[macro_export]
macro_rules! engine_invariant {
    ($cond:expr, $($msg:tt)+) => {{
        let ok: bool = $cond;
        #[cfg(debug_assertions)]
        {
            if !ok {
                panic!("engine invariant violated: {}", format!($($msg)+));
            }
        }
        #[cfg(not(debug_assertions))]
        {
            if !ok {
                $crate::__tracing::error!("engine invariant violated: {}", format!($($msg)+));
            }
        }
        ok
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn holding_invariant_evaluates_true() {
        assert!(engine_invariant!(1 + 1 == 2, "math broke"));
    }

    #[test]
    #[should_panic(expected = "engine invariant violated: entity 3 missing")]
    #[cfg(debug_assertions)]
    fn broken_invariant_panics_in_debug() {
        let id = 3;
        let _ = engine_invariant!(false, "entity {} missing", id);
    }
}
