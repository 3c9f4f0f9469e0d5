//! egui widget shell for the on-screen joystick.
//!
//! - **JoystickWidget**: allocates space, forwards the primary pointer to a
//!   [`joystick_core::Joystick`] and paints it with the egui painter.

pub mod joystick;

pub use joystick::{paint, pointer_transition, to_color32, to_local, to_screen, JoystickWidget};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Default joystick side length when neither the caller nor the
    /// configuration pins one.
    pub const JOYSTICK: f32 = 120.0;
}
