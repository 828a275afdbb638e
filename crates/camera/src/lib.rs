pub mod choreographer;
pub mod controller;
pub mod easing;
pub mod geolocation;
pub mod pose;
pub mod transition;

pub use choreographer::*;
pub use controller::*;
pub use pose::*;
