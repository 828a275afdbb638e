use crate::event_bus::{Event, EventKind};

/// Coalesces viewport-change bursts into at most one visibility recompute
/// per rendered frame.
///
/// A notification marks the scheduler dirty; any further notifications in
/// the same frame window supersede nothing and queue nothing. The recompute
/// itself runs synchronously inside the frame and must finish there, which
/// holds as long as the filter stays an O(n) scan over one result page.
#[derive(Debug, Default)]
pub struct RecomputeScheduler {
    dirty: bool,
    notifications_seen: u64,
    recomputes_run: u64,
}

impl RecomputeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a recompute as wanted for the next frame.
    pub fn notify(&mut self) {
        self.dirty = true;
        self.notifications_seen += 1;
    }

    /// Folds a drained event batch into the dirty flag.
    pub fn observe(&mut self, events: &[Event]) {
        for event in events {
            match event.kind {
                EventKind::ViewportChanged | EventKind::MarkersReplaced => self.notify(),
                EventKind::PhaseChanged => {}
            }
        }
    }

    /// Runs `recompute` exactly once if anything is pending.
    ///
    /// Returns whether it ran.
    pub fn run_frame<F: FnOnce()>(&mut self, recompute: F) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;
        self.recomputes_run += 1;
        recompute();
        true
    }

    pub fn notifications_seen(&self) -> u64 {
        self.notifications_seen
    }

    pub fn recomputes_run(&self) -> u64 {
        self.recomputes_run
    }
}
