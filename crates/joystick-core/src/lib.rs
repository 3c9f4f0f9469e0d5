//! Joystick Core Library
//!
//! Platform-agnostic touch tracking and geometry for an on-screen joystick.
//! Hosts forward resizes and primary-pointer events, and draw the outer ring
//! and thumb from the resulting state.

pub mod color;
pub mod config;
pub mod geometry;
pub mod input;
pub mod joystick;
pub mod layout;
pub mod listener;
pub mod state;

pub use color::{Argb, ParseColorError};
pub use config::{Appearance, Behavior, ConfigError, ConfigResult, JoystickConfig};
pub use geometry::{
    AngleConvention, Direction, GeometryError, GeometryResult, circle_line_intersection,
    clamp_to_circle, normalize,
};
pub use input::{PointerEvent, TouchAction};
pub use joystick::Joystick;
pub use layout::{INNER_RADIUS_RATIO, JoystickLayout};
pub use listener::{JoystickEvent, JoystickListener};
pub use state::TouchPhase;
