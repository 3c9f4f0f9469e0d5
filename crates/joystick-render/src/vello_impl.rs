//! Vello-based renderer implementation.

use crate::renderer::{DrawCommand, RenderContext, RenderResult, Renderer};
use kurbo::{Affine, Stroke};
use peniko::Fill;
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Widget origin within the target surface.
    transform: Affine,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a renderer drawing at the surface origin.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            transform: Affine::IDENTITY,
        }
    }

    /// Place the widget within the surface (translation, HiDPI scale).
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    fn draw(&mut self, command: &DrawCommand) {
        match *command {
            DrawCommand::FillCircle { circle, color } => {
                self.scene.fill(
                    Fill::NonZero,
                    self.transform,
                    color.to_color(),
                    None,
                    &circle,
                );
            }
            DrawCommand::StrokeLine { line, width, color } => {
                let stroke = Stroke::new(width);
                self.scene
                    .stroke(&stroke, self.transform, color.to_color(), None, &line);
            }
        }
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        self.scene.reset();
        for command in ctx.commands() {
            self.draw(&command);
        }
        Ok(())
    }
}
