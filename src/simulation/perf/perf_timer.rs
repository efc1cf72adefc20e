//! Step stopwatch for `PerfStats`.
//!
//! Marks are `Date.now()` milliseconds in the browser and `Instant` natively;
//! everything above `now`/`ms_since` is target independent.

#[cfg(target_arch = "wasm32")]
type Mark = f64;
#[cfg(not(target_arch = "wasm32"))]
type Mark = std::time::Instant;

#[cfg(target_arch = "wasm32")]
#[inline]
fn now() -> Mark {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
fn now() -> Mark {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
#[inline]
fn ms_since(mark: Mark) -> f64 {
    (js_sys::Date::now() - mark).max(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
fn ms_since(mark: Mark) -> f64 {
    mark.elapsed().as_secs_f64() * 1000.0
}

/// Phase timer for one `step_physics` call.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    mark: Mark,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        Self { mark: now() }
    }

    /// Milliseconds since `start` or the last `lap_ms`.
    pub(crate) fn elapsed_ms(&self) -> f64 {
        ms_since(self.mark)
    }

    /// Time the phase that just ended and start timing the next one.
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let next = now();
        let phase = ms_since(self.mark);
        self.mark = next;
        phase
    }
}
