//! Best-effort device location.
//!
//! The host platform resolves geolocation asynchronously, once, near
//! startup; whatever command needs the fix reads the cache at dispatch
//! time. An unresolved cache is a normal state, not an error; commands
//! that need a fix degrade to silent no-ops.

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoFix {
    pub lat_deg: f64,
    pub lng_deg: f64,
}

#[derive(Debug, Default)]
pub struct LastKnownLocation {
    fix: Option<GeoFix>,
}

impl LastKnownLocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, fix: GeoFix) {
        self.fix = Some(fix);
    }

    pub fn get(&self) -> Option<GeoFix> {
        self.fix
    }

    pub fn is_resolved(&self) -> bool {
        self.fix.is_some()
    }
}
