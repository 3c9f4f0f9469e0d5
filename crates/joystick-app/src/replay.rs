//! Touch trace replay.

use std::cell::RefCell;
use std::fmt;
use std::path::Path;
use std::rc::Rc;

use joystick_core::{
    ConfigError, GeometryError, Joystick, JoystickConfig, JoystickEvent, PointerEvent,
};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Trace parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Event {index} failed: {source}")]
    Geometry {
        index: usize,
        #[source]
        source: GeometryError,
    },
}

/// One recorded touch sample, in widget-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceEvent {
    Down([f64; 2]),
    Move([f64; 2]),
    Up([f64; 2]),
    Cancel,
}

impl From<TraceEvent> for PointerEvent {
    fn from(event: TraceEvent) -> Self {
        let point = |[x, y]: [f64; 2]| Point::new(x, y);
        match event {
            TraceEvent::Down(p) => PointerEvent::Down { position: point(p) },
            TraceEvent::Move(p) => PointerEvent::Move { position: point(p) },
            TraceEvent::Up(p) => PointerEvent::Up { position: point(p) },
            TraceEvent::Cancel => PointerEvent::Cancel,
        }
    }
}

/// A recorded gesture session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub config: JoystickConfig,
    pub width: f64,
    pub height: f64,
    pub events: Vec<TraceEvent>,
}

impl Trace {
    /// Parse a trace from JSON.
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        let trace: Trace = serde_json::from_str(json)?;
        trace.config.validate()?;
        Ok(trace)
    }

    /// Read and parse a trace file.
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// A listener callback as printed by the replay tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Callback(pub JoystickEvent);

impl fmt::Display for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            JoystickEvent::Touch => write!(f, "onTouch"),
            JoystickEvent::Move(dir) => write!(
                f,
                "onMove x={:.3} y={:.3} deg={:.1}",
                dir.x, dir.y, dir.degrees
            ),
            JoystickEvent::Release => write!(f, "onRelease"),
        }
    }
}

/// Play `trace` through a fresh joystick and collect the listener callbacks.
pub fn replay(trace: &Trace) -> Result<Vec<Callback>, ReplayError> {
    let callbacks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&callbacks);

    let mut joystick = Joystick::new(trace.config.clone()).with_listener(
        move |event: JoystickEvent| {
            let callback = Callback(event);
            log::info!("{}", callback);
            sink.borrow_mut().push(callback);
        },
    );
    joystick.resize(Size::new(trace.width, trace.height));

    for (index, event) in trace.events.iter().enumerate() {
        joystick
            .handle_pointer_event((*event).into())
            .map_err(|source| ReplayError::Geometry { index, source })?;
    }

    log::debug!(
        "Replayed {} events, thumb ends at ({:.1}, {:.1})",
        trace.events.len(),
        joystick.thumb().x,
        joystick.thumb().y
    );

    drop(joystick);
    let callbacks = callbacks.take();
    Ok(callbacks)
}
