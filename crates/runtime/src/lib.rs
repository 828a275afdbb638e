pub mod event_bus;
pub mod frame;
pub mod readiness;
pub mod recompute;

pub use event_bus::*;
pub use frame::*;
pub use readiness::*;
pub use recompute::*;
