//! Debounce state for the panel buttons
//!
//! Each button toggles a latched boolean (its LED) on a falling edge, but
//! mechanical contacts bounce: a single press can produce a burst of
//! edges. Edges arriving within a quiet interval of the previously
//! accepted one are discarded.
//!
//! Timestamps are 32-bit microseconds and wrap roughly every 71 minutes;
//! all comparisons use wrapping arithmetic, mirroring the hardware
//! microsecond counter.

/// Quiet interval after an accepted edge (200 ms in microseconds).
pub const QUIET_INTERVAL_US: u32 = 200_000;

/// Latched toggle state for one debounced button.
///
/// `on_falling_edge` is constant-time and never blocks, so it is safe to
/// call from an edge-triggered context.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonToggle {
    state: bool,
    last_accepted_us: u32,
    quiet_us: u32,
}

impl ButtonToggle {
    /// Create a toggle in the released/off state with the default quiet
    /// interval.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_quiet_interval(QUIET_INTERVAL_US)
    }

    /// Create a toggle with a custom quiet interval.
    #[must_use]
    pub const fn with_quiet_interval(quiet_us: u32) -> Self {
        Self {
            state: false,
            last_accepted_us: 0,
            quiet_us,
        }
    }

    /// Current latched state.
    #[must_use]
    pub const fn state(&self) -> bool {
        self.state
    }

    /// Process a falling edge observed at `now_us`.
    ///
    /// Returns `Some(new_state)` if the edge was accepted and the state
    /// flipped, `None` if it fell inside the quiet interval and was
    /// discarded. Only accepted edges advance the quiet window.
    pub fn on_falling_edge(&mut self, now_us: u32) -> Option<bool> {
        if now_us.wrapping_sub(self.last_accepted_us) <= self.quiet_us {
            return None;
        }
        self.last_accepted_us = now_us;
        self.state = !self.state;
        Some(self.state)
    }
}

impl Default for ButtonToggle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Timestamps comfortably past the boot-time quiet window.
    const T0: u32 = 1_000_000;

    #[test]
    fn accepted_edge_flips_state() {
        let mut toggle = ButtonToggle::new();
        assert!(!toggle.state());

        assert_eq!(toggle.on_falling_edge(T0), Some(true));
        assert!(toggle.state());

        assert_eq!(toggle.on_falling_edge(T0 + QUIET_INTERVAL_US + 1), Some(false));
        assert!(!toggle.state());
    }

    #[test]
    fn bounce_within_quiet_interval_is_discarded() {
        let mut toggle = ButtonToggle::new();

        assert_eq!(toggle.on_falling_edge(T0), Some(true));
        // A burst of bounces right after the press
        assert_eq!(toggle.on_falling_edge(T0 + 500), None);
        assert_eq!(toggle.on_falling_edge(T0 + 5_000), None);
        assert_eq!(toggle.on_falling_edge(T0 + QUIET_INTERVAL_US), None);

        // State changed exactly once
        assert!(toggle.state());
    }

    #[test]
    fn boundary_is_exclusive() {
        let mut toggle = ButtonToggle::new();
        toggle.on_falling_edge(T0);

        // Exactly at the interval: still quiet
        let mut at_boundary = toggle;
        assert_eq!(at_boundary.on_falling_edge(T0 + QUIET_INTERVAL_US), None);

        // One past it: accepted
        assert_eq!(toggle.on_falling_edge(T0 + QUIET_INTERVAL_US + 1), Some(false));
    }

    #[test]
    fn discarded_edges_do_not_extend_the_window() {
        let mut toggle = ButtonToggle::new();
        toggle.on_falling_edge(T0);

        // Bounce near the end of the window...
        assert_eq!(toggle.on_falling_edge(T0 + QUIET_INTERVAL_US - 1), None);
        // ...must not push the window out: this edge is measured from T0.
        assert_eq!(toggle.on_falling_edge(T0 + QUIET_INTERVAL_US + 1), Some(false));
    }

    #[test]
    fn clock_wraparound_is_handled() {
        let mut toggle = ButtonToggle::new();
        let near_wrap = u32::MAX - 10_000;
        assert_eq!(toggle.on_falling_edge(near_wrap), Some(true));

        // 20_000 us later the counter has wrapped; elapsed is still ~20 ms.
        let after_wrap = near_wrap.wrapping_add(20_000);
        assert_eq!(toggle.on_falling_edge(after_wrap), None);

        // Well past the quiet interval, still post-wrap.
        let later = near_wrap.wrapping_add(QUIET_INTERVAL_US + 1_000);
        assert_eq!(toggle.on_falling_edge(later), Some(false));
    }

    proptest! {
        /// Over any increasing edge sequence, the latched state equals the
        /// parity of accepted edges, and accepted edges are always more
        /// than the quiet interval apart.
        #[test]
        fn state_tracks_accepted_parity(gaps in prop::collection::vec(1u32..1_000_000, 1..64)) {
            let mut toggle = ButtonToggle::new();
            let mut now = T0;
            let mut accepted = 0u32;
            let mut last_accepted_at = None::<u32>;

            for gap in gaps {
                now += gap;
                if let Some(state) = toggle.on_falling_edge(now) {
                    if let Some(prev) = last_accepted_at {
                        prop_assert!(now - prev > QUIET_INTERVAL_US);
                    }
                    last_accepted_at = Some(now);
                    accepted += 1;
                    prop_assert_eq!(state, accepted % 2 == 1);
                }
                prop_assert_eq!(toggle.state(), accepted % 2 == 1);
            }
        }
    }
}
