//! Event-name binding resolved once at board creation.

use log::debug;

use super::events::TapPhase;

/// Touch event names, selected when the platform reports touch capability.
const TOUCH_NAMES: [&str; 3] = ["touchstart", "touchmove", "touchend"];

/// Mouse event names, the default family.
const MOUSE_NAMES: [&str; 3] = ["mousedown", "mousemove", "mouseup"];

/// Maps platform event names to tap phases.
///
/// The family (touch or mouse) is chosen once when the board is created and
/// never changes afterwards. Events named after the other family do not
/// resolve and are dropped by the board, mirroring handlers that were simply
/// never registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventBinding {
    names: [&'static str; 3],
}

impl EventBinding {
    /// Selects the event-name family for the given touch capability.
    pub fn for_touch(touch: bool) -> Self {
        let names = if touch { TOUCH_NAMES } else { MOUSE_NAMES };
        debug!(
            "Input binding: {} / {} / {}",
            names[0], names[1], names[2]
        );
        Self { names }
    }

    /// Resolves an event name to its tap phase, if it belongs to the
    /// selected family.
    pub fn resolve(&self, name: &str) -> Option<TapPhase> {
        if name == self.names[0] {
            Some(TapPhase::Start)
        } else if name == self.names[1] {
            Some(TapPhase::Move)
        } else if name == self.names[2] {
            Some(TapPhase::End)
        } else {
            None
        }
    }

    /// Returns true when this binding uses the touch family.
    pub fn is_touch(&self) -> bool {
        self.names == TOUCH_NAMES
    }
}

/// Probes platform touch capability once.
///
/// There is no portable capability query at this layer, so the probe honors
/// an environment override and otherwise assumes a pointer device. Hosts
/// that know better set the capability explicitly via `[input] touch` in the
/// config or pass it through [`crate::Board::with_config`].
pub fn detect_touch() -> bool {
    match std::env::var("INKBOARD_TOUCH") {
        Ok(value) => matches!(value.as_str(), "1" | "true" | "yes"),
        Err(_) => false,
    }
}
