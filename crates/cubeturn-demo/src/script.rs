//! Scripted input timelines.
//!
//! A script is a RON list of timed inputs:
//!
//! ```ron
//! [
//!     (at_ms: 0, input: Key("ArrowRight")),
//!     (at_ms: 1500, input: Wheel(dx: 0.0, dy: 120.0, shift: false)),
//!     (at_ms: 3000, input: PointerStart(x: 400.0, y: 400.0)),
//!     (at_ms: 3050, input: PointerMove(x: 400.0, y: 340.0)),
//!     (at_ms: 3100, input: PointerEnd),
//! ]
//! ```

use std::path::{Path, PathBuf};

use cubeturn_input::Direction;
use serde::{Deserialize, Serialize};

/// Errors loading a script file.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// The file could not be read.
    #[error("failed to read script {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid script.
    #[error("failed to parse script: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// One host input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScriptedInput {
    Wheel { dx: f32, dy: f32, shift: bool },
    PointerStart { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerEnd,
    /// Key by name; non-arrow names are delivered and ignored.
    Key(String),
    /// On-screen arrow button.
    Rotate(Direction),
}

/// An input delivered once the simulated clock reaches `at_ms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    pub at_ms: u64,
    pub input: ScriptedInput,
}

/// A timeline ordered by `at_ms`; events sharing a time keep file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    events: Vec<ScriptedEvent>,
}

impl Script {
    /// Builds a script, sorting events by time.
    pub fn new(mut events: Vec<ScriptedEvent>) -> Self {
        events.sort_by_key(|event| event.at_ms);
        Self { events }
    }

    /// Parses RON text.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let events: Vec<ScriptedEvent> = ron::from_str(text)?;
        Ok(Self::new(events))
    }

    /// Reads and parses a RON file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// A short tour using every input source.
    pub fn tour() -> Self {
        use ScriptedInput::*;
        let at = |at_ms, input| ScriptedEvent { at_ms, input };
        Self::new(vec![
            at(0, Key("ArrowRight".into())),
            at(1500, Wheel { dx: 0.0, dy: 120.0, shift: false }),
            at(1520, Wheel { dx: 0.0, dy: 80.0, shift: false }),
            at(3000, PointerStart { x: 400.0, y: 400.0 }),
            at(3050, PointerMove { x: 400.0, y: 340.0 }),
            at(3100, PointerMove { x: 400.0, y: 200.0 }),
            at(3150, PointerEnd),
            at(4500, Key("ArrowLeft".into())),
            at(6000, Rotate(Direction::Down)),
            at(7500, Key("Enter".into())),
            at(7600, Wheel { dx: 0.0, dy: -120.0, shift: false }),
        ])
    }

    pub fn events(&self) -> &[ScriptedEvent] {
        &self.events
    }
}
