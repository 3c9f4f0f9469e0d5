//! Circle layout derived from the widget's bounding box.

use kurbo::{Circle, Point, Size};
use serde::{Deserialize, Serialize};

use crate::config::JoystickConfig;

/// Thumb radius as a fraction of half the widget's shorter side.
pub const INNER_RADIUS_RATIO: f64 = 0.4;

/// Center and radii of the joystick for a given widget size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JoystickLayout {
    /// Size of the widget the layout was computed for.
    pub size: Size,
    /// Center of the outer ring, and resting position of the thumb.
    pub center: Point,
    /// Travel radius for the thumb center.
    pub outer_radius: f64,
    /// Radius of the thumb itself.
    pub inner_radius: f64,
}

impl JoystickLayout {
    /// Compute the layout for a widget of `size`.
    ///
    /// Half the shorter side is split into a thumb of [`INNER_RADIUS_RATIO`] and
    /// the remaining travel radius, so the thumb never leaves the widget.
    /// Non-zero radii in `config` replace the derived values.
    pub fn from_size(size: Size, config: &JoystickConfig) -> Self {
        let base = size.width.min(size.height).max(0.0) / 2.0;
        let auto_inner = INNER_RADIUS_RATIO * base;

        let inner_radius = if config.inner_circle_radius > 0.0 {
            config.inner_circle_radius
        } else {
            auto_inner
        };
        let outer_radius = if config.outer_circle_radius > 0.0 {
            config.outer_circle_radius
        } else {
            base - auto_inner
        };

        Self {
            size,
            center: Point::new(size.width / 2.0, size.height / 2.0),
            outer_radius,
            inner_radius,
        }
    }

    /// The circle the thumb center is confined to.
    pub fn outer_circle(&self) -> Circle {
        Circle::new(self.center, self.outer_radius)
    }

    /// The thumb circle when centered on `thumb`.
    pub fn inner_circle(&self, thumb: Point) -> Circle {
        Circle::new(thumb, self.inner_radius)
    }

    /// Whether `point` lies on the joystick's outer ring or inside it.
    pub fn contains(&self, point: Point) -> bool {
        point.distance(self.center) <= self.outer_radius
    }

    /// Preferred widget size when both radii are configured explicitly.
    pub fn preferred_size(config: &JoystickConfig) -> Option<Size> {
        if config.inner_circle_radius > 0.0 && config.outer_circle_radius > 0.0 {
            let side = 2.0 * (config.inner_circle_radius + config.outer_circle_radius);
            Some(Size::new(side, side))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_layout_square() {
        let layout = JoystickLayout::from_size(Size::new(200.0, 200.0), &JoystickConfig::default());
        assert_eq!(layout.center, Point::new(100.0, 100.0));
        assert!((layout.inner_radius - 40.0).abs() < 1e-9);
        assert!((layout.outer_radius - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_auto_layout_uses_shorter_side() {
        let layout = JoystickLayout::from_size(Size::new(300.0, 100.0), &JoystickConfig::default());
        assert_eq!(layout.center, Point::new(150.0, 50.0));
        assert!((layout.inner_radius - 20.0).abs() < 1e-9);
        assert!((layout.outer_radius - 30.0).abs() < 1e-9);
        // Thumb at the edge of travel stays inside the widget.
        assert!(layout.outer_radius + layout.inner_radius <= 50.0 + 1e-9);
    }

    #[test]
    fn test_configured_radii_override() {
        let config = JoystickConfig::default().with_radii(10.0, 0.0);
        let layout = JoystickLayout::from_size(Size::new(200.0, 200.0), &config);
        assert_eq!(layout.inner_radius, 10.0);
        assert!((layout.outer_radius - 60.0).abs() < 1e-9);

        let config = JoystickConfig::default().with_radii(0.0, 25.0);
        let layout = JoystickLayout::from_size(Size::new(200.0, 200.0), &config);
        assert!((layout.inner_radius - 40.0).abs() < 1e-9);
        assert_eq!(layout.outer_radius, 25.0);
    }

    #[test]
    fn test_zero_size() {
        let layout = JoystickLayout::from_size(Size::ZERO, &JoystickConfig::default());
        assert_eq!(layout.center, Point::ZERO);
        assert_eq!(layout.outer_radius, 0.0);
        assert_eq!(layout.inner_radius, 0.0);
    }

    #[test]
    fn test_contains() {
        let layout = JoystickLayout::from_size(Size::new(200.0, 200.0), &JoystickConfig::default());
        assert!(layout.contains(Point::new(100.0, 100.0)));
        assert!(layout.contains(Point::new(160.0, 100.0)));
        assert!(!layout.contains(Point::new(170.0, 100.0)));
    }

    #[test]
    fn test_preferred_size() {
        assert_eq!(JoystickLayout::preferred_size(&JoystickConfig::default()), None);
        let config = JoystickConfig::default().with_radii(10.0, 30.0);
        assert_eq!(
            JoystickLayout::preferred_size(&config),
            Some(Size::new(80.0, 80.0))
        );
    }

    #[test]
    fn test_circles() {
        let layout = JoystickLayout::from_size(Size::new(200.0, 200.0), &JoystickConfig::default());
        let outer = layout.outer_circle();
        assert_eq!(outer.center, Point::new(100.0, 100.0));
        let inner = layout.inner_circle(Point::new(120.0, 90.0));
        assert_eq!(inner.center, Point::new(120.0, 90.0));
        assert!((inner.radius - 40.0).abs() < 1e-9);
    }
}
