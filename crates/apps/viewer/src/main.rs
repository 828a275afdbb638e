mod input;

use camera::geolocation::{GeoFix, LastKnownLocation};
use camera::{Choreographer, OrbitRig, ViewportController};
use foundation::time::TimeMs;
use runtime::{EventBus, EventKind, Frame, Readiness, ReadinessGate, RecomputeScheduler};
use scene::country::patched_iso3_for_admin;
use scene::ingest::ingest_json;
use scene::selection::{select_country, select_marker};
use scene::visibility::compute_visible;
use scene::{MarkerId, MarkerStore};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::input::{command_for_key, should_auto_return};

/// A canned GDELT-shaped result page so the headless viewer runs without a
/// backend. Two records are intentionally defective: one has no
/// coordinates, one carries a country code the mapping table does not know.
const SAMPLE_FEED: &str = r#"[
    {"lat": 48.8566, "lng": 2.3522, "country_code": "FR", "country": "France",
     "title": "Summit opens in Paris", "url": "https://example.com/paris"},
    {"lat": 52.52, "lng": 13.405, "country_code": "GM", "country": "Germany",
     "title": "Berlin transit strike ends"},
    {"lat": 35.6762, "lon": 139.6503, "country_code": "JA", "country": "Japan",
     "title": "Tokyo exchange rallies", "summary": "Stocks climbed for a third day."},
    {"country_code": "US", "country": "United States",
     "title": "Wire item without coordinates"},
    {"lat": -23.5505, "lng": -46.6333, "country_code": "BR", "country": "Brazil",
     "title": "Drought eases in Sao Paulo"},
    {"lat": -1.2921, "lng": 36.8219, "country_code": "KE", "country": "Kenya",
     "title": "Nairobi hosts climate talks"},
    {"lat": 42.6629, "lng": 21.1655, "country_code": "KV", "country": "Kosovo",
     "title": "Pristina marks anniversary"},
    {"lat": -33.8688, "lng": 151.2093, "country_code": "AS", "country": "Australia",
     "title": "Sydney ferry service expands"}
]"#;

const FRAME_DT_MS: f64 = 1000.0 / 60.0;
const TOTAL_FRAMES: u64 = 720; // 12 seconds
/// Frame at which the simulated engine finishes constructing its controller.
const CONTROLLER_READY_FRAME: u64 = 5;
const READINESS_MAX_POLLS: u32 = 50;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut store = MarkerStore::new();
    match ingest_json(SAMPLE_FEED) {
        Ok(markers) => store.replace(markers),
        Err(err) => warn!("sample feed rejected: {err}"),
    }
    info!("ingested {} of 8 records as markers", store.len());

    let mut rig = OrbitRig::new();
    let mut choreo = Choreographer::new();
    let mut bus = EventBus::new();
    let mut scheduler = RecomputeScheduler::new();
    let mut gate = ReadinessGate::new(READINESS_MAX_POLLS);

    // The platform resolves geolocation in the background; the demo fakes a
    // fix arriving shortly after startup. Until then "center on me" is a
    // silent no-op.
    let mut location = LastKnownLocation::new();

    let mut visible: Vec<MarkerId> = Vec::new();
    let mut frame = Frame::new(0, FRAME_DT_MS);

    while frame.index < TOTAL_FRAMES {
        // Startup race guard: nothing touches the controller until the
        // engine has built it.
        match gate.poll(frame.index >= CONTROLLER_READY_FRAME) {
            Readiness::Waiting => {
                frame = frame.next();
                continue;
            }
            Readiness::JustReady => {
                info!("controller ready at frame {}; subscribing", frame.index);
                bus.emit(frame.index, EventKind::MarkersReplaced);
                choreo.start_entrance(frame.at, &mut rig);
            }
            Readiness::Ready => {}
            Readiness::GaveUp => {
                warn!("controller never appeared; exiting");
                return;
            }
        }

        simulate_host(frame.index, &mut location, &mut choreo, &mut rig, frame.at);

        if rig.advance(frame.dt_ms) {
            bus.emit(frame.index, EventKind::ViewportChanged);
        }
        let out = choreo.step_frame(frame.at, &mut rig);
        if out.pose.is_some() {
            bus.emit(frame.index, EventKind::ViewportChanged);
        }
        if let Some(next) = out.next_phase {
            bus.emit(frame.index, EventKind::PhaseChanged);
            info!("phase -> {next:?} at frame {}", frame.index);
            if choreo.stranded_notice() {
                info!("no article found; press space to go back");
            }
        }

        scheduler.observe(&bus.drain());
        let ran = scheduler.run_frame(|| {
            visible = compute_visible(&store, rig.view_point());
        });
        if ran && frame.index % 60 == 0 {
            info!(
                "rendered {} / {} markers at {:?}",
                visible.len(),
                store.len(),
                rig.view_point()
            );
        }

        frame = frame.next();
    }

    info!(
        "done: {} viewport notifications coalesced into {} recomputes",
        scheduler.notifications_seen(),
        scheduler.recomputes_run()
    );

    // Clicks travel to the UI panels as selection payloads: a polygon click
    // carries the dataset's admin name, a marker click falls back to the
    // marker's own label when no polygon resolved.
    let iso3 = patched_iso3_for_admin("France").unwrap_or("FRA");
    let picked = select_country(iso3, "France");
    info!("country click -> {} ({})", picked.display_name, picked.iso3);

    if let Some(id) = visible.first() {
        if let Some(marker) = store.get(*id) {
            let selection = select_marker(marker, None);
            info!(
                "marker click -> {} ({}) -> {}",
                selection.display_name, selection.iso3, marker.title
            );
        }
    }
}

/// Scripted stand-in for the platform layer: geolocation resolution and the
/// keyboard.
fn simulate_host(
    frame_index: u64,
    location: &mut LastKnownLocation,
    choreo: &mut Choreographer,
    rig: &mut OrbitRig,
    now: TimeMs,
) {
    // Geolocation resolves ~1.5 s in.
    if frame_index == 90 {
        location.resolve(GeoFix {
            lat_deg: 59.3293,
            lng_deg: 18.0686,
        });
        info!("geolocation resolved");
    }

    // A search resolving while the camera is already close in: the
    // auto-return heuristic declines the flight.
    if frame_index == 240 {
        if should_auto_return(rig.view_point()) {
            choreo.dispatch(camera::Command::ReturnToEarth, now, location.get(), rig);
        } else {
            debug!("search resolved close in; no return flight needed");
        }
    }

    let key = match frame_index {
        120 => Some('c'), // center on me
        300 => Some('a'), // fly away
        540 => Some(' '), // return to earth
        _ => None,
    };
    let Some(key) = key else { return };
    let Some(cmd) = command_for_key(key) else {
        return;
    };

    if choreo.dispatch(cmd, now, location.get(), rig) {
        info!("key '{key}' -> {cmd:?}");
    } else {
        debug!("key '{key}' -> {cmd:?} dropped (phase {:?})", choreo.phase());
    }
}
