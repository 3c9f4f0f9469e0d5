//! Listener contract for joystick gestures.

use serde::{Deserialize, Serialize};

use crate::geometry::Direction;

/// A callback-level event, as seen by closure listeners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum JoystickEvent {
    /// The user put a finger on the joystick.
    Touch,
    /// The thumb moved.
    Move(Direction),
    /// The user lifted the finger.
    Release,
}

/// Receives joystick gestures.
///
/// Every method defaults to a no-op, so implementors only override what they need.
pub trait JoystickListener {
    /// Called once per touch-down, before the first `on_move` of the gesture.
    fn on_touch(&mut self) {}

    /// Called on every move, and once right after `on_touch`.
    fn on_move(&mut self, _x: f64, _y: f64, _degrees: f64) {}

    /// Called when the user releases the joystick.
    fn on_release(&mut self) {}
}

impl<F> JoystickListener for F
where
    F: FnMut(JoystickEvent),
{
    fn on_touch(&mut self) {
        self(JoystickEvent::Touch);
    }

    fn on_move(&mut self, x: f64, y: f64, degrees: f64) {
        self(JoystickEvent::Move(Direction { x, y, degrees }));
    }

    fn on_release(&mut self) {
        self(JoystickEvent::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MoveCounter(usize);

    impl JoystickListener for MoveCounter {
        fn on_move(&mut self, _x: f64, _y: f64, _degrees: f64) {
            self.0 += 1;
        }
    }

    #[test]
    fn test_default_methods_are_noops() {
        let mut counter = MoveCounter(0);
        counter.on_touch();
        counter.on_release();
        counter.on_move(0.5, 0.5, 45.0);
        assert_eq!(counter.0, 1);
    }

    #[test]
    fn test_closure_listener() {
        let mut events = Vec::new();
        {
            let mut listener = |event: JoystickEvent| events.push(event);
            listener.on_touch();
            listener.on_move(1.0, 0.0, 0.0);
            listener.on_release();
        }
        assert_eq!(
            events,
            vec![
                JoystickEvent::Touch,
                JoystickEvent::Move(Direction { x: 1.0, y: 0.0, degrees: 0.0 }),
                JoystickEvent::Release,
            ]
        );
    }
}
