// Feeds named pointer/touch events into the capture state machine and
// appends accepted segments to the current gesture.
use log::debug;

use crate::draw::Segment;
use crate::input::{TapEvent, TapPhase};

use super::Board;

impl Board {
    /// Dispatches a named platform event to the matching transition.
    ///
    /// Events whose name does not resolve against the binding chosen at
    /// creation (including the other input family's names) are dropped,
    /// as if no handler had been registered for them.
    pub fn dispatch(&mut self, event: &TapEvent<'_>) {
        match self.binding.resolve(event.name) {
            Some(TapPhase::Start) => self.on_tap_start(event.x, event.y),
            Some(TapPhase::Move) => self.on_tap_move(event.x, event.y),
            Some(TapPhase::End) => self.on_tap_end(),
            None => debug!("Ignoring unbound event '{}'", event.name),
        }
    }

    /// Begins a new gesture at the given surface-local position.
    ///
    /// Resets the current gesture's segment list and records the press
    /// point as the last committed point. Always succeeds.
    pub fn on_tap_start(&mut self, x: f64, y: f64) {
        self.drawing = true;
        self.paths.clear();
        self.last_x = x;
        self.last_y = y;
        debug!("Gesture started at ({x:.1}, {y:.1})");
    }

    /// Extends the current gesture toward the given position.
    ///
    /// No-op while not drawing. Accepted moves append one segment stamped
    /// with the current mode, advance the last committed point, and trigger
    /// a synchronous redraw; rejected moves mutate nothing.
    ///
    /// Acceptance uses the summed coordinate delta `|Δx + Δy|` against the
    /// jitter threshold, not Euclidean distance. Deltas of opposite sign
    /// cancel, so a diagonal move along x = -y can be rejected regardless
    /// of its length.
    pub fn on_tap_move(&mut self, x: f64, y: f64) {
        if !self.drawing {
            return;
        }

        if (x + y - self.last_x - self.last_y).abs() <= self.jitter_threshold {
            return;
        }

        let segment = Segment {
            mode: self.mode,
            start_x: self.last_x,
            start_y: self.last_y,
            end_x: x,
            end_y: y,
        };
        self.last_x = x;
        self.last_y = y;
        self.paths.push(segment);

        self.redraw();
    }

    /// Ends the current gesture and freezes it into history.
    ///
    /// The gesture is recorded even when empty (a tap with no accepted
    /// move). The current gesture is left in place so later redraws keep
    /// replaying it until the next gesture begins.
    pub fn on_tap_end(&mut self) {
        self.drawing = false;
        self.history.push(self.paths.clone());
        debug!(
            "Gesture ended with {} segments ({} in history)",
            self.paths.len(),
            self.history.len()
        );
    }
}
