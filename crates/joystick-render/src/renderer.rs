//! Renderer trait abstraction.

use joystick_core::{Appearance, Argb, Joystick, JoystickLayout};
use kurbo::{Circle, Line, Point};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// A single drawing operation, in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// A filled, anti-aliased circle.
    FillCircle { circle: Circle, color: Argb },
    /// A stroked line segment.
    StrokeLine { line: Line, width: f64, color: Argb },
}

/// Context for a single render frame.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Circle layout of the joystick.
    pub layout: JoystickLayout,
    /// Thumb center.
    pub thumb: Point,
    /// Which parts to draw.
    pub appearance: Appearance,
    pub outer_circle_color: Argb,
    pub inner_circle_color: Argb,
    pub line_color: Argb,
    pub line_width: f64,
    /// Draw the line from the thumb to the center.
    pub draw_connector: bool,
    /// Background color (for clearing).
    pub background_color: Color,
}

impl RenderContext {
    /// Create a render context from the joystick's current state.
    pub fn new(joystick: &Joystick) -> Self {
        let config = joystick.config();
        Self {
            layout: *joystick.layout(),
            thumb: joystick.thumb(),
            appearance: config.appearance,
            outer_circle_color: config.outer_circle_color,
            inner_circle_color: config.inner_circle_color,
            line_color: config.line_color,
            line_width: config.line_width,
            draw_connector: false,
            background_color: Color::TRANSPARENT,
        }
    }

    /// Enable or disable the connector line.
    pub fn with_connector(mut self, draw_connector: bool) -> Self {
        self.draw_connector = draw_connector;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Build the drawing operations for this frame, back to front.
    pub fn commands(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(3);

        if self.appearance.draws_outer_ring() {
            commands.push(DrawCommand::FillCircle {
                circle: self.layout.outer_circle(),
                color: self.outer_circle_color,
            });
        }

        if self.draw_connector && self.appearance.draws_connector() {
            commands.push(DrawCommand::StrokeLine {
                line: Line::new(self.thumb, self.layout.center),
                width: self.line_width,
                color: self.line_color,
            });
        }

        commands.push(DrawCommand::FillCircle {
            circle: self.layout.inner_circle(self.thumb),
            color: self.inner_circle_color,
        });

        commands
    }
}

/// Trait for rendering backends.
///
/// Implementations can use Vello, an immediate-mode painter, or other engines.
pub trait Renderer {
    /// Build the scene/command buffer for a frame.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

/// Renderer that keeps the commands of the last frame. Handy for hosts that
/// replay them onto their own canvas, and for tests.
#[derive(Debug, Default, Clone)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the last built frame.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Renderer for CommandRecorder {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        self.commands = ctx.commands();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joystick_core::JoystickConfig;
    use kurbo::Size;

    fn joystick(appearance: Appearance) -> Joystick {
        let mut joy = Joystick::new(JoystickConfig::default().with_appearance(appearance));
        joy.resize(Size::new(200.0, 200.0));
        joy
    }

    fn circles(commands: &[DrawCommand]) -> Vec<Circle> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillCircle { circle, .. } => Some(*circle),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_full_draws_outer_then_inner() {
        let mut joy = joystick(Appearance::Full);
        joy.touch_down(Point::new(130.0, 100.0)).unwrap();

        let commands = RenderContext::new(&joy).commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands[0],
            DrawCommand::FillCircle {
                circle: Circle::new(Point::new(100.0, 100.0), joy.layout().outer_radius),
                color: Argb::BLACK,
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::FillCircle {
                circle: Circle::new(Point::new(130.0, 100.0), joy.layout().inner_radius),
                color: Argb::RED,
            }
        );
    }

    #[test]
    fn test_connector_disabled_by_default() {
        let joy = joystick(Appearance::Full);
        let commands = RenderContext::new(&joy).commands();
        assert!(!commands.iter().any(|c| matches!(c, DrawCommand::StrokeLine { .. })));
    }

    #[test]
    fn test_connector_when_enabled() {
        let mut joy = joystick(Appearance::NoOuterRing);
        joy.touch_down(Point::new(100.0, 60.0)).unwrap();

        let commands = RenderContext::new(&joy).with_connector(true).commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands[0],
            DrawCommand::StrokeLine {
                line: Line::new(Point::new(100.0, 60.0), Point::new(100.0, 100.0)),
                width: 2.0,
                color: Argb::BLUE,
            }
        );
        assert_eq!(circles(&commands).len(), 1);
    }

    #[test]
    fn test_inner_only() {
        let joy = joystick(Appearance::InnerOnly);
        let commands = RenderContext::new(&joy).with_connector(true).commands();
        assert_eq!(commands.len(), 1);
        assert_eq!(circles(&commands)[0].center, joy.center());
    }

    #[test]
    fn test_recorder() {
        let joy = joystick(Appearance::Full);
        let ctx = RenderContext::new(&joy).with_background(Color::WHITE);
        let mut recorder = CommandRecorder::new();
        recorder.build_scene(&ctx).unwrap();
        assert_eq!(recorder.commands().len(), 2);
        assert_eq!(recorder.commands(), ctx.commands().as_slice());
    }
}
