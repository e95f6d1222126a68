/// Default distance from the bottom, in viewport units, that counts as "near".
pub const DEFAULT_PROXIMITY_THRESHOLD: u32 = 300;

/// Scroll position of a viewport over its content, as reported by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    pub offset: u32,
    pub visible_height: u32,
    pub content_height: u32,
}

impl ScrollMetrics {
    pub fn is_near_bottom(&self, threshold: u32) -> bool {
        u64::from(self.offset) + u64::from(self.visible_height) + u64::from(threshold)
            >= u64::from(self.content_height)
    }
}

/// Edge-triggered "near bottom" detector.
///
/// Fires once when the viewport moves into the proximity band. It will not
/// fire again until the viewport leaves the band or the trigger is re-armed,
/// so a stationary scroll position cannot request the same page repeatedly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollTrigger {
    threshold: u32,
    armed: bool,
    pending: bool,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_PROXIMITY_THRESHOLD)
    }
}

impl ScrollTrigger {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            armed: true,
            pending: false,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn observe(&mut self, metrics: ScrollMetrics) {
        if metrics.is_near_bottom(self.threshold) {
            if self.armed {
                self.armed = false;
                self.pending = true;
            }
        } else {
            self.armed = true;
        }
    }

    /// Returns whether a signal is pending and clears it.
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn rearm(&mut self) {
        self.armed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset: u32) -> ScrollMetrics {
        ScrollMetrics {
            offset,
            visible_height: 700,
            content_height: 2000,
        }
    }

    #[test]
    fn near_bottom_uses_threshold() {
        assert!(!at(999).is_near_bottom(300));
        assert!(at(1000).is_near_bottom(300));
        assert!(at(1300).is_near_bottom(0));
    }

    #[test]
    fn fires_once_per_approach() {
        let mut trigger = ScrollTrigger::default();
        trigger.observe(at(100));
        assert!(!trigger.take_pending());

        trigger.observe(at(1100));
        trigger.observe(at(1150));
        assert!(trigger.take_pending());
        assert!(!trigger.take_pending());

        trigger.observe(at(1200));
        assert!(!trigger.take_pending());

        trigger.observe(at(200));
        trigger.observe(at(1100));
        assert!(trigger.take_pending());
    }

    #[test]
    fn rearm_allows_stationary_refire() {
        let mut trigger = ScrollTrigger::default();
        trigger.observe(at(1100));
        assert!(trigger.take_pending());

        trigger.rearm();
        trigger.observe(at(1100));
        assert!(trigger.take_pending());
    }
}
