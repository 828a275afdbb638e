//! One-shot readiness gate for the external camera controller.
//!
//! The rendering engine constructs its orbit controller some frames after
//! startup; subscribing to viewport changes before it exists would be lost.
//! The gate is polled once per frame and resolves exactly once: the frame
//! that observes availability gets [`Readiness::JustReady`], which is the
//! single point where the change subscription is attached. Every later poll
//! reports `Ready`.
//!
//! Polling is bounded so a controller that never appears degrades to
//! [`Readiness::GaveUp`] instead of spinning forever.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Readiness {
    Waiting,
    /// Resolved on this poll; attach subscriptions now.
    JustReady,
    Ready,
    GaveUp,
}

#[derive(Debug)]
pub struct ReadinessGate {
    polls_left: u32,
    resolved: bool,
}

impl ReadinessGate {
    pub fn new(max_polls: u32) -> Self {
        Self {
            polls_left: max_polls,
            resolved: false,
        }
    }

    pub fn poll(&mut self, available: bool) -> Readiness {
        if self.resolved {
            return Readiness::Ready;
        }
        if available {
            self.resolved = true;
            return Readiness::JustReady;
        }
        if self.polls_left == 0 {
            return Readiness::GaveUp;
        }
        self.polls_left -= 1;
        Readiness::Waiting
    }

    pub fn is_ready(&self) -> bool {
        self.resolved
    }
}

#[cfg(test)]
mod tests {
    use super::{Readiness, ReadinessGate};

    #[test]
    fn resolves_exactly_once() {
        let mut gate = ReadinessGate::new(10);
        assert_eq!(gate.poll(false), Readiness::Waiting);
        assert_eq!(gate.poll(true), Readiness::JustReady);
        assert_eq!(gate.poll(true), Readiness::Ready);
        assert_eq!(gate.poll(false), Readiness::Ready);
        assert!(gate.is_ready());
    }

    #[test]
    fn gives_up_after_bounded_polls() {
        let mut gate = ReadinessGate::new(2);
        assert_eq!(gate.poll(false), Readiness::Waiting);
        assert_eq!(gate.poll(false), Readiness::Waiting);
        assert_eq!(gate.poll(false), Readiness::GaveUp);
        assert!(!gate.is_ready());
    }

    #[test]
    fn late_availability_within_bound_still_resolves() {
        let mut gate = ReadinessGate::new(3);
        assert_eq!(gate.poll(false), Readiness::Waiting);
        assert_eq!(gate.poll(false), Readiness::Waiting);
        assert_eq!(gate.poll(true), Readiness::JustReady);
    }
}
