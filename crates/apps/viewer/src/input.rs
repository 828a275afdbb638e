use camera::Command;
use foundation::math::ViewPoint;

/// Altitude beyond which an automatic return flight is worth the trip.
const AUTO_RETURN_ALTITUDE: f64 = 4.0;

/// Maps a key press to a choreographer command.
///
/// The busy guard lives in the choreographer; the router stays a dumb
/// lookup.
pub fn command_for_key(key: char) -> Option<Command> {
    match key.to_ascii_lowercase() {
        'c' => Some(Command::CenterOnMe),
        's' => Some(Command::ToggleSpin),
        'a' => Some(Command::FlyAway),
        ' ' => Some(Command::ReturnToEarth),
        _ => None,
    }
}

/// App-level heuristic guarding redundant return flights when a new search
/// resolves: only fly back when the camera is actually far out.
pub fn should_auto_return(view: ViewPoint) -> bool {
    view.altitude > AUTO_RETURN_ALTITUDE
}
