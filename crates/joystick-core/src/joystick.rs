//! The joystick control: layout, thumb tracking and listener dispatch.

use std::fmt;

use kurbo::{Point, Size};

use crate::config::{Behavior, JoystickConfig};
use crate::geometry::{clamp_to_circle, normalize, Direction, GeometryResult};
use crate::input::PointerEvent;
use crate::layout::JoystickLayout;
use crate::listener::JoystickListener;
use crate::state::TouchPhase;

/// An on-screen joystick.
///
/// The host forwards size changes through [`Joystick::resize`] and primary
/// pointer events through [`Joystick::handle_pointer_event`], then draws the
/// outer ring at [`Joystick::center`] and the thumb at [`Joystick::thumb`].
pub struct Joystick {
    config: JoystickConfig,
    layout: JoystickLayout,
    /// Center of the thumb.
    thumb: Point,
    phase: TouchPhase,
    /// Last direction reported to the listener.
    direction: Direction,
    listener: Option<Box<dyn JoystickListener>>,
}

impl fmt::Debug for Joystick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Joystick")
            .field("config", &self.config)
            .field("layout", &self.layout)
            .field("thumb", &self.thumb)
            .field("phase", &self.phase)
            .field("direction", &self.direction)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl Default for Joystick {
    fn default() -> Self {
        Self::new(JoystickConfig::default())
    }
}

impl Joystick {
    /// Create a joystick. It has no size until the first [`Joystick::resize`].
    pub fn new(config: JoystickConfig) -> Self {
        let layout = JoystickLayout::from_size(Size::ZERO, &config);
        Self {
            config,
            thumb: layout.center,
            layout,
            phase: TouchPhase::Idle,
            direction: Direction::CENTER,
            listener: None,
        }
    }

    /// Install the listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl JoystickListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the listener. Events are then dropped silently.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn with_listener(mut self, listener: impl JoystickListener + 'static) -> Self {
        self.set_listener(listener);
        self
    }

    pub fn config(&self) -> &JoystickConfig {
        &self.config
    }

    pub fn layout(&self) -> &JoystickLayout {
        &self.layout
    }

    /// Center of the outer ring.
    pub fn center(&self) -> Point {
        self.layout.center
    }

    /// Current thumb position.
    pub fn thumb(&self) -> Point {
        self.thumb
    }

    pub fn phase(&self) -> TouchPhase {
        self.phase
    }

    /// Last direction reported to the listener.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Size the host should allocate, if the configuration pins both radii.
    pub fn preferred_size(&self) -> Option<Size> {
        JoystickLayout::preferred_size(&self.config)
    }

    /// Recompute the layout for a new widget size.
    ///
    /// The thumb always returns to the new center; any previous offset is lost.
    pub fn resize(&mut self, size: Size) {
        self.layout = JoystickLayout::from_size(size, &self.config);
        self.thumb = self.layout.center;
        self.direction = Direction::CENTER;
        if self.phase.is_held() {
            self.phase = TouchPhase::Idle;
        }
        log::debug!(
            "Joystick resized to {}x{}: outer radius {}, inner radius {}",
            size.width,
            size.height,
            self.layout.outer_radius,
            self.layout.inner_radius
        );
    }

    /// Process a pointer event in widget-local coordinates.
    ///
    /// On error the thumb keeps its previous position.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> GeometryResult<()> {
        match event {
            PointerEvent::Down { position } => self.touch_down(position),
            PointerEvent::Move { position } => self.touch_move(position),
            PointerEvent::Up { position } => {
                self.touch_up(position);
                Ok(())
            }
            PointerEvent::Cancel => {
                log::debug!("Ignoring cancel event");
                Ok(())
            }
        }
    }

    /// Start a gesture: notify the listener, then snap the thumb to `position`.
    ///
    /// The phase switches to [`TouchPhase::Dragging`] and `on_touch` fires
    /// before the thumb moves, so both stand even when the move fails. A
    /// failed move leaves the thumb and direction untouched and sends no
    /// `on_move`.
    pub fn touch_down(&mut self, position: Point) -> GeometryResult<()> {
        self.phase = TouchPhase::Dragging;
        if let Some(listener) = self.listener.as_mut() {
            listener.on_touch();
        }
        self.move_thumb(position)
    }

    /// Follow the finger while dragging.
    pub fn touch_move(&mut self, position: Point) -> GeometryResult<()> {
        if !self.phase.is_dragging() {
            log::debug!("Ignoring move to {:?} outside of a gesture", position);
            return Ok(());
        }
        self.move_thumb(position)
    }

    /// End a gesture, applying the configured release behavior.
    pub fn touch_up(&mut self, _position: Point) {
        if !self.phase.is_dragging() {
            log::debug!("Ignoring release outside of a gesture");
            return;
        }

        match self.config.behavior {
            Behavior::Normal => {
                self.thumb = self.layout.center;
                self.direction = Direction::CENTER;
                self.phase = TouchPhase::Idle;
            }
            Behavior::Static => {
                self.phase = TouchPhase::Held;
            }
        }

        if let Some(listener) = self.listener.as_mut() {
            listener.on_release();
        }
    }

    fn move_thumb(&mut self, position: Point) -> GeometryResult<()> {
        let center = self.layout.center;
        let radius = self.layout.outer_radius;

        let thumb = clamp_to_circle(position, center, radius).inspect_err(|e| {
            log::warn!("Failed to clamp {:?} to joystick bounds: {}", position, e);
        })?;
        self.thumb = thumb;
        self.direction = normalize(thumb, center, radius, self.config.angle_convention);

        log::trace!("Thumb at ({:.1}, {:.1})", thumb.x, thumb.y);

        if let Some(listener) = self.listener.as_mut() {
            let Direction { x, y, degrees } = self.direction;
            listener.on_move(x, y, degrees);
        }
        Ok(())
    }
}
