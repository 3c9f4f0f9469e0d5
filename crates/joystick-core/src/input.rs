//! Pointer events delivered by the host.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Kind of touch action, independent of how many pointers are down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event for the primary pointer, in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    Cancel,
}

impl PointerEvent {
    /// Build an event from a multi-pointer touch sample.
    ///
    /// Only the first (primary) pointer is used. Returns `None` when a
    /// positional action arrives without any pointer.
    pub fn from_pointers(action: TouchAction, pointers: &[Point]) -> Option<Self> {
        if action == TouchAction::Cancel {
            return Some(PointerEvent::Cancel);
        }
        let position = *pointers.first()?;
        Some(match action {
            TouchAction::Down => PointerEvent::Down { position },
            TouchAction::Move => PointerEvent::Move { position },
            TouchAction::Up => PointerEvent::Up { position },
            TouchAction::Cancel => PointerEvent::Cancel,
        })
    }

    /// The action of this event.
    pub fn action(&self) -> TouchAction {
        match self {
            PointerEvent::Down { .. } => TouchAction::Down,
            PointerEvent::Move { .. } => TouchAction::Move,
            PointerEvent::Up { .. } => TouchAction::Up,
            PointerEvent::Cancel => TouchAction::Cancel,
        }
    }

    /// Pointer position, if the event carries one.
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => Some(*position),
            PointerEvent::Cancel => None,
        }
    }

    /// Shift the event by `-origin`, turning window coordinates into
    /// widget-local ones.
    pub fn relative_to(self, origin: Point) -> Self {
        let local = |p: Point| Point::new(p.x - origin.x, p.y - origin.y);
        match self {
            PointerEvent::Down { position } => PointerEvent::Down { position: local(position) },
            PointerEvent::Move { position } => PointerEvent::Move { position: local(position) },
            PointerEvent::Up { position } => PointerEvent::Up { position: local(position) },
            PointerEvent::Cancel => PointerEvent::Cancel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_pointer_only() {
        let pointers = [Point::new(10.0, 20.0), Point::new(300.0, 400.0)];
        let event = PointerEvent::from_pointers(TouchAction::Move, &pointers).unwrap();
        assert_eq!(event, PointerEvent::Move { position: Point::new(10.0, 20.0) });
    }

    #[test]
    fn test_missing_pointer() {
        assert_eq!(PointerEvent::from_pointers(TouchAction::Down, &[]), None);
        assert_eq!(
            PointerEvent::from_pointers(TouchAction::Cancel, &[]),
            Some(PointerEvent::Cancel)
        );
    }

    #[test]
    fn test_action_and_position() {
        let event = PointerEvent::Up { position: Point::new(1.0, 2.0) };
        assert_eq!(event.action(), TouchAction::Up);
        assert_eq!(event.position(), Some(Point::new(1.0, 2.0)));
        assert_eq!(PointerEvent::Cancel.position(), None);
    }

    #[test]
    fn test_relative_to() {
        let event = PointerEvent::Down { position: Point::new(110.0, 60.0) };
        assert_eq!(
            event.relative_to(Point::new(100.0, 50.0)),
            PointerEvent::Down { position: Point::new(10.0, 10.0) }
        );
        assert_eq!(PointerEvent::Cancel.relative_to(Point::ZERO), PointerEvent::Cancel);
    }

    #[test]
    fn test_serde_shape() {
        let event: PointerEvent =
            serde_json::from_str(r#"{"down": {"position": {"x": 1.0, "y": 2.0}}}"#).unwrap();
        assert_eq!(event, PointerEvent::Down { position: Point::new(1.0, 2.0) });
    }
}
