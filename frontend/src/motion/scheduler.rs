//! Two scheduling gates used by the scroll effects.
//!
//! [`FrameGate`] coalesces bursts of scroll events into a single
//! `requestAnimationFrame` callback. [`Throttle`] defers evaluation to a
//! fixed wall-clock timer regardless of frame rate.

/// Pending flag for render-synced work.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the caller should schedule a frame callback.
    /// Further requests before [`FrameGate::complete`] return `false`.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called at the start of the frame callback, or when scheduling failed.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Pending flag for a trailing timer. The first event of a burst arms it
/// and starts a `Timeout`; later events are absorbed until the timer fires
/// and evaluates whatever state is current then, so the last event of a
/// burst is never lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    interval_ms: u32,
    armed: bool,
}

impl Throttle {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            armed: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Returns `true` when the caller should start a timer.
    pub fn try_arm(&mut self) -> bool {
        if self.armed {
            return false;
        }
        self.armed = true;
        true
    }

    /// Called first thing in the timer callback.
    pub fn fire(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_gate_coalesces_requests() {
        let mut gate = FrameGate::new();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.is_pending());
        gate.complete();
        assert!(gate.request());
    }

    #[test]
    fn throttle_arms_once_per_burst() {
        let mut throttle = Throttle::new(50);
        assert!(throttle.try_arm());
        assert!(!throttle.try_arm());
        assert!(!throttle.try_arm());
        assert!(throttle.is_armed());
        throttle.fire();
        assert!(!throttle.is_armed());
        assert!(throttle.try_arm());
        assert_eq!(throttle.interval_ms(), 50);
    }
}
