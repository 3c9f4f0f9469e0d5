//! Touch phase of the joystick.

use serde::{Deserialize, Serialize};

/// Where the joystick is in a touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TouchPhase {
    /// No finger down, thumb at rest in the center.
    #[default]
    Idle,
    /// A finger is down and moving the thumb.
    Dragging,
    /// Finger lifted with static behavior; the thumb stays put.
    Held,
}

impl TouchPhase {
    /// Check if a gesture is in progress.
    pub fn is_dragging(self) -> bool {
        self == TouchPhase::Dragging
    }

    /// Check if the thumb is away from its resting place without a finger on it.
    pub fn is_held(self) -> bool {
        self == TouchPhase::Held
    }
}
