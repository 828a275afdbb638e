/// Events the frame loop reacts to.
///
/// Viewport changes fire continuously during drag, zoom, and scripted
/// animation; marker replacement fires once per resolved search.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventKind {
    ViewportChanged,
    MarkersReplaced,
    PhaseChanged,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Event {
    pub frame_index: u64,
    pub kind: EventKind,
}

/// Notification conduit between the controller/store and the frame loop.
///
/// Producers emit during a frame; the loop drains at the start of the next
/// one. Draining keeps burst sizes observable for the recompute scheduler.
#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<Event>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, frame_index: u64, kind: EventKind) {
        self.events.push(Event { frame_index, kind });
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::{EventBus, EventKind};

    #[test]
    fn records_events_with_frame_index() {
        let mut bus = EventBus::new();
        bus.emit(2, EventKind::ViewportChanged);
        assert_eq!(bus.events().len(), 1);
        assert_eq!(bus.events()[0].frame_index, 2);
    }

    #[test]
    fn drain_clears_events() {
        let mut bus = EventBus::new();
        bus.emit(0, EventKind::MarkersReplaced);
        let drained = bus.drain();
        assert_eq!(drained.len(), 1);
        assert!(bus.events().is_empty());
    }
}
