//! Replays a script against a controller on a simulated clock.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use cubeturn_cube::{ControllerSettings, CubeFace, CubeRotationController, FaceTopology};
use cubeturn_input::{Clock, Direction, ManualClock};
use tracing::{debug, info};

use crate::script::{Script, ScriptedInput};

/// Something the controller reported during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Rotated(Direction),
    FrontFace(CubeFace),
}

/// A report stamped with the simulated time it happened at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub at: Duration,
    pub report: Report,
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub steps: Vec<Step>,
    pub frames: u64,
    pub final_face: CubeFace,
}

impl RunSummary {
    /// Directions accepted, in order.
    pub fn directions(&self) -> Vec<Direction> {
        self.steps
            .iter()
            .filter_map(|step| match step.report {
                Report::Rotated(direction) => Some(direction),
                Report::FrontFace(_) => None,
            })
            .collect()
    }

    /// Front-face changes, in order.
    pub fn faces(&self) -> Vec<CubeFace> {
        self.steps
            .iter()
            .filter_map(|step| match step.report {
                Report::FrontFace(face) => Some(face),
                Report::Rotated(_) => None,
            })
            .collect()
    }
}

fn dispatch<T: FaceTopology, C: Clock>(
    cube: &mut CubeRotationController<T, C>,
    input: &ScriptedInput,
) {
    match input {
        ScriptedInput::Wheel { dx, dy, shift } => {
            cube.on_wheel(*dx, *dy, *shift);
        }
        ScriptedInput::PointerStart { x, y } => cube.on_pointer_start(*x, *y),
        ScriptedInput::PointerMove { x, y } => {
            cube.on_pointer_move(*x, *y);
        }
        ScriptedInput::PointerEnd => cube.on_pointer_end(),
        ScriptedInput::Key(name) => {
            cube.on_key_name(name);
        }
        ScriptedInput::Rotate(direction) => {
            cube.rotate(*direction);
        }
    }
}

/// Runs `script` frame by frame at `fps` until every event is delivered and
/// the last rotation has settled.
///
/// Inputs that land while a rotation is animating are rejected, so a low
/// frame rate can drop events a faster one would accept.
pub fn run<T: FaceTopology>(
    topology: T,
    settings: ControllerSettings,
    script: &Script,
    fps: u32,
) -> RunSummary {
    let clock = ManualClock::new();
    let mut cube = CubeRotationController::with_clock(topology, settings, clock.clone());

    let steps = Rc::new(RefCell::new(Vec::new()));
    {
        let steps = steps.clone();
        let clock = clock.clone();
        cube.on_direction(move |direction| {
            steps.borrow_mut().push(Step {
                at: clock.now(),
                report: Report::Rotated(direction),
            });
        });
    }
    {
        let steps = steps.clone();
        let clock = clock.clone();
        cube.on_front_face_changed(move |face| {
            steps.borrow_mut().push(Step {
                at: clock.now(),
                report: Report::FrontFace(face),
            });
        });
    }

    let frame = Duration::from_secs_f64(1.0 / f64::from(fps.max(1)));
    let mut pending = script.events().iter().peekable();
    let mut frames = 0;
    info!(events = script.events().len(), fps, "replay started");

    loop {
        let now = clock.now();
        while let Some(event) = pending.next_if(|e| Duration::from_millis(e.at_ms) <= now) {
            debug!(at_ms = event.at_ms, input = ?event.input, "delivering input");
            dispatch(&mut cube, &event.input);
        }
        cube.tick(frame.as_secs_f32());
        frames += 1;
        if pending.peek().is_none() && !cube.is_animating() {
            break;
        }
        clock.advance(frame);
    }

    info!(frames, face = %cube.front_face(), "replay finished");
    RunSummary {
        steps: steps.take(),
        frames,
        final_face: cube.front_face(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptedEvent;
    use cubeturn_cube::{CameraRelativeTopology, ParityEulerTopology};

    fn event(at_ms: u64, input: ScriptedInput) -> ScriptedEvent {
        ScriptedEvent { at_ms, input }
    }

    #[test]
    fn test_empty_script_runs_one_frame() {
        let summary = run(
            CameraRelativeTopology::default(),
            ControllerSettings::default(),
            &Script::default(),
            60,
        );
        assert_eq!(summary.frames, 1);
        assert!(summary.steps.is_empty());
        assert_eq!(summary.final_face, CubeFace::Front);
    }

    #[test]
    fn test_single_key_reports_direction_then_face() {
        let script = Script::new(vec![event(0, ScriptedInput::Key("ArrowRight".into()))]);
        let summary = run(
            CameraRelativeTopology::default(),
            ControllerSettings::default(),
            &script,
            60,
        );
        assert_eq!(summary.directions(), vec![Direction::Right]);
        assert_eq!(summary.faces(), vec![CubeFace::Right]);
        assert_eq!(summary.steps[0].at, Duration::ZERO);
        assert!(summary.steps[1].at > Duration::ZERO);
    }

    #[test]
    fn test_tour_quaternion() {
        let summary = run(
            CameraRelativeTopology::default(),
            ControllerSettings::default(),
            &Script::tour(),
            60,
        );
        assert_eq!(
            summary.directions(),
            vec![
                Direction::Right,
                Direction::Up,
                Direction::Up,
                Direction::Left,
                Direction::Down,
                Direction::Down,
            ]
        );
        let faces = summary.faces();
        assert_eq!(faces.len(), 6);
        assert_eq!(faces.last().copied(), Some(summary.final_face));
    }

    #[test]
    fn test_tour_parity_euler_accepts_same_inputs() {
        let summary = run(
            ParityEulerTopology::new(),
            ControllerSettings::default(),
            &Script::tour(),
            60,
        );
        assert_eq!(summary.directions().len(), 6);
    }

    #[test]
    fn test_input_during_animation_is_dropped() {
        let script = Script::new(vec![
            event(0, ScriptedInput::Rotate(Direction::Up)),
            event(100, ScriptedInput::Rotate(Direction::Left)),
        ]);
        let summary = run(
            CameraRelativeTopology::default(),
            ControllerSettings::default(),
            &script,
            60,
        );
        assert_eq!(summary.directions(), vec![Direction::Up]);
        assert_eq!(summary.final_face, CubeFace::Bottom);
    }
}
