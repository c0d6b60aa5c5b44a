//! Keystroke debouncing on top of Zellij timers.
//!
//! Zellij timers (`set_timeout`) cannot be cancelled, so the debouncer counts
//! the timers it has armed instead. Every keystroke arms one more timer of the
//! same length; timers fire in the order they were armed, so the timer that
//! brings the count back to zero is the one armed by the latest keystroke,
//! and it fires exactly one quiet window after that keystroke.
//!
//! ```text
//! keys:    a   b   c                 (within 500 ms)
//! timers:  ├───┼───┼──── 500 ms ────▶ fire → fetch("abc")
//!          └── earlier timers fire while count > 0 → dropped
//! ```

/// Default quiet window before a typed query is sent.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Coalesces bursts of query edits into a single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    delay_ms: u64,
    /// Timers armed but not yet delivered.
    outstanding: usize,
    /// Text to fetch when the quiet window elapses; `None` once cancelled.
    pending: Option<String>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl Debouncer {
    #[must_use]
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            outstanding: 0,
            pending: None,
        }
    }

    /// Quiet window length in milliseconds.
    #[must_use]
    pub const fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Records `text` as the fetch to run and counts one more armed timer.
    ///
    /// Returns the delay the caller must arm a timer for.
    pub fn schedule(&mut self, text: String) -> u64 {
        self.outstanding += 1;
        self.pending = Some(text);
        self.delay_ms
    }

    /// Drops the pending fetch. Timers already armed still count down.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Handles one timer delivery.
    ///
    /// Returns the text to fetch when this was the last outstanding timer and
    /// a fetch is still pending.
    pub fn on_timer(&mut self) -> Option<String> {
        self.outstanding = self.outstanding.saturating_sub(1);
        if self.outstanding == 0 {
            self.pending.take()
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_of_keystrokes_fires_once_with_latest_text() {
        let mut debouncer = Debouncer::default();
        for text in ["d", "du", "dun", "dune"] {
            assert_eq!(debouncer.schedule(text.to_string()), DEFAULT_DEBOUNCE_MS);
        }

        assert_eq!(debouncer.on_timer(), None);
        assert_eq!(debouncer.on_timer(), None);
        assert_eq!(debouncer.on_timer(), None);
        assert_eq!(debouncer.on_timer().as_deref(), Some("dune"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn cancelled_fetch_never_fires() {
        let mut debouncer = Debouncer::new(300);
        debouncer.schedule("a".to_string());
        debouncer.cancel();
        assert_eq!(debouncer.on_timer(), None);
    }

    #[test]
    fn typing_after_cancel_waits_for_every_armed_timer() {
        let mut debouncer = Debouncer::default();
        debouncer.schedule("a".to_string());
        debouncer.cancel();
        debouncer.schedule("b".to_string());

        assert_eq!(debouncer.on_timer(), None);
        assert_eq!(debouncer.on_timer().as_deref(), Some("b"));
    }

    #[test]
    fn stray_timer_is_harmless() {
        let mut debouncer = Debouncer::default();
        assert_eq!(debouncer.on_timer(), None);
        debouncer.schedule("x".to_string());
        assert_eq!(debouncer.on_timer().as_deref(), Some("x"));
    }
}
