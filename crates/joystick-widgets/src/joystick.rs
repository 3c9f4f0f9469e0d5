//! Joystick widget: forwards egui pointer input to a [`Joystick`] and paints it.

use egui::{pos2, vec2, Color32, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, Widget};
use joystick_core::{Argb, Joystick, PointerEvent};
use joystick_render::{DrawCommand, RenderContext};
use kurbo::{Point, Size};

use crate::sizing;

/// An on-screen joystick for egui.
///
/// ```ignore
/// let mut joystick = Joystick::new(JoystickConfig::default());
/// ui.add(JoystickWidget::new(&mut joystick));
/// let direction = joystick.direction();
/// ```
pub struct JoystickWidget<'a> {
    joystick: &'a mut Joystick,
    size: Option<Vec2>,
    draw_connector: bool,
}

impl<'a> JoystickWidget<'a> {
    pub fn new(joystick: &'a mut Joystick) -> Self {
        Self {
            joystick,
            size: None,
            draw_connector: false,
        }
    }

    /// Set the widget size. Defaults to the joystick's preferred size, or
    /// [`sizing::JOYSTICK`] when it has none.
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }

    /// Draw the line between thumb and center.
    pub fn connector(mut self, draw_connector: bool) -> Self {
        self.draw_connector = draw_connector;
        self
    }

    fn desired_size(&self) -> Vec2 {
        self.size.unwrap_or_else(|| match self.joystick.preferred_size() {
            Some(size) => vec2(size.width as f32, size.height as f32),
            None => vec2(sizing::JOYSTICK, sizing::JOYSTICK),
        })
    }
}

impl Widget for JoystickWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.desired_size(), Sense::drag());

        let size = Size::new(rect.width() as f64, rect.height() as f64);
        if self.joystick.layout().size != size {
            self.joystick.resize(size);
        }

        let pressed_at = if response.is_pointer_button_down_on() {
            response
                .interact_pointer_pos()
                .map(|pos| to_local(pos, rect))
        } else {
            None
        };
        let dragging = self.joystick.phase().is_dragging();

        // Raw pointer position from the previous frame, before clamping.
        let id = response.id;
        let last_pressed = ui.data(|d| d.get_temp::<Point>(id));
        ui.data_mut(|d| match pressed_at {
            Some(position) => d.insert_temp(id, position),
            None => d.remove::<Point>(id),
        });

        let mut changed = false;
        let transition =
            pointer_transition(dragging, self.joystick.thumb(), last_pressed, pressed_at);
        if let Some(event) = transition {
            if let Err(e) = self.joystick.handle_pointer_event(event) {
                log::warn!("Joystick rejected {:?}: {}", event, e);
            }
            changed = true;
        }

        if ui.is_rect_visible(rect) {
            let ctx = RenderContext::new(self.joystick).with_connector(self.draw_connector);
            paint(ui, rect.min, &ctx.commands());
        }

        let mut response = response;
        if changed {
            response.mark_changed();
        }
        response
    }
}

/// Decide which event the current pointer state amounts to.
///
/// `pressed_at` is the local pointer position while the primary button is
/// held on the widget, `last_pressed` the same value from the previous frame.
/// Moves are only reported when the raw pointer position changed, so a finger
/// resting outside the ring stays quiet even though the thumb is clamped.
pub fn pointer_transition(
    dragging: bool,
    thumb: Point,
    last_pressed: Option<Point>,
    pressed_at: Option<Point>,
) -> Option<PointerEvent> {
    match (dragging, pressed_at) {
        (false, Some(position)) => Some(PointerEvent::Down { position }),
        (true, Some(position)) if last_pressed != Some(position) => {
            Some(PointerEvent::Move { position })
        }
        (true, Some(_)) => None,
        (true, None) => Some(PointerEvent::Up { position: thumb }),
        (false, None) => None,
    }
}

/// Convert a screen position into widget-local coordinates.
pub fn to_local(pos: Pos2, rect: Rect) -> Point {
    Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64)
}

/// Convert a widget-local point back to screen coordinates.
pub fn to_screen(point: Point, origin: Pos2) -> Pos2 {
    pos2(origin.x + point.x as f32, origin.y + point.y as f32)
}

/// Convert an ARGB color to egui.
pub fn to_color32(color: Argb) -> Color32 {
    let [r, g, b, a] = color.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Paint draw commands with the widget origin at `origin`.
pub fn paint(ui: &Ui, origin: Pos2, commands: &[DrawCommand]) {
    let painter = ui.painter();
    for command in commands {
        match *command {
            DrawCommand::FillCircle { circle, color } => {
                painter.circle_filled(
                    to_screen(circle.center, origin),
                    circle.radius as f32,
                    to_color32(color),
                );
            }
            DrawCommand::StrokeLine { line, width, color } => {
                painter.line_segment(
                    [to_screen(line.p0, origin), to_screen(line.p1, origin)],
                    Stroke::new(width as f32, to_color32(color)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joystick_core::{JoystickConfig, JoystickEvent};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_press_starts_gesture() {
        let event = pointer_transition(false, Point::new(50.0, 50.0), None, Some(Point::new(10.0, 20.0)));
        assert_eq!(event, Some(PointerEvent::Down { position: Point::new(10.0, 20.0) }));
    }

    #[test]
    fn test_drag_moves() {
        let event = pointer_transition(
            true,
            Point::new(50.0, 50.0),
            Some(Point::new(50.0, 50.0)),
            Some(Point::new(60.0, 50.0)),
        );
        assert_eq!(event, Some(PointerEvent::Move { position: Point::new(60.0, 50.0) }));
    }

    #[test]
    fn test_still_pointer_is_quiet() {
        let finger = Point::new(60.0, 50.0);
        assert_eq!(pointer_transition(true, finger, Some(finger), Some(finger)), None);
        assert_eq!(pointer_transition(false, finger, None, None), None);
    }

    #[test]
    fn test_still_pointer_outside_ring_moves_once() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut joy = Joystick::new(JoystickConfig::default())
            .with_listener(move |event: JoystickEvent| sink.borrow_mut().push(event));
        joy.resize(Size::new(200.0, 200.0));

        // Outside the radius-60 ring, so the thumb is clamped away from the finger.
        let finger = Point::new(195.0, 100.0);
        let mut last_pressed = None;
        for _ in 0..10 {
            let transition =
                pointer_transition(joy.phase().is_dragging(), joy.thumb(), last_pressed, Some(finger));
            if let Some(event) = transition {
                joy.handle_pointer_event(event).unwrap();
            }
            last_pressed = Some(finger);
        }

        assert_ne!(joy.thumb(), finger);
        let moves = events
            .borrow()
            .iter()
            .filter(|e| matches!(e, JoystickEvent::Move(_)))
            .count();
        assert_eq!(moves, 1);
        assert_eq!(events.borrow()[0], JoystickEvent::Touch);
    }

    #[test]
    fn test_release_ends_gesture() {
        let thumb = Point::new(60.0, 50.0);
        assert_eq!(
            pointer_transition(true, thumb, Some(thumb), None),
            Some(PointerEvent::Up { position: thumb })
        );
    }

    #[test]
    fn test_coordinate_conversion() {
        let rect = Rect::from_min_size(pos2(100.0, 40.0), vec2(120.0, 120.0));
        let local = to_local(pos2(130.0, 50.0), rect);
        assert_eq!(local, Point::new(30.0, 10.0));
        assert_eq!(to_screen(local, rect.min), pos2(130.0, 50.0));
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(to_color32(Argb::RED), Color32::from_rgb(255, 0, 0));
        assert_eq!(to_color32(Argb::BLACK), Color32::BLACK);
    }
}
