//! Joystick Render Library
//!
//! Turns joystick state into drawing operations. Hosts either replay the
//! [`DrawCommand`]s on their own canvas or enable the `vello-renderer`
//! feature for GPU-accelerated rendering.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{
    CommandRecorder, DrawCommand, RenderContext, RenderResult, Renderer, RendererError,
};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
