//! The rotation controller: gesture intake, target selection, animation, and
//! front-face reporting behind one owner.
//!
//! # Usage
//!
//! 1. Build with [`CubeRotationController::with_clock`] (or `new` for the wall clock).
//! 2. [`attach`](CubeRotationController::attach) the body and its outline mirrors.
//! 3. Wire host input to the `on_*` methods.
//! 4. Call [`tick`](CubeRotationController::tick) once per display frame.
//!
//! New input is accepted only while no rotation is animating; an animation
//! always runs to completion.

use std::time::Duration;

use cubeturn_config::{Config, GestureConfig};
use cubeturn_input::{Clock, Direction, GestureRecognizer, GestureSettings, Key, MonotonicClock};
use glam::Quat;
use tracing::{debug, info};

use crate::animator::{AnimationSettings, RotationAnimator, TickOutcome};
use crate::face::{CubeFace, FaceIndexError};
use crate::front_face::{FACE_NORMALS, VIEW_DIRECTION, resolve_front_face};
use crate::orientation::Orientation;
use crate::render_target::RenderTarget;
use crate::topology::FaceTopology;

/// Everything tunable about a controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerSettings {
    /// Gesture thresholds and timeouts.
    pub gesture: GestureSettings,
    /// Interpolation speed and settle thresholds.
    pub animation: AnimationSettings,
}

/// Config values a controller cannot be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `topology.initial_front_face` is not a face index.
    #[error(transparent)]
    FaceIndex(#[from] FaceIndexError),

    /// `topology.initial_front_face` names a face the viewer does not see at rest.
    #[error("initial front face {configured} is not shown at rest, {resolved} is")]
    InitialFaceMismatch {
        configured: CubeFace,
        resolved: CubeFace,
    },
}

fn gesture_settings(config: &GestureConfig) -> GestureSettings {
    GestureSettings {
        wheel_timeout: Duration::from_millis(config.wheel_timeout_ms),
        wheel_min_delta: config.wheel_min_delta,
        swipe_threshold: config.swipe_threshold,
        touch_multiplier: config.touch_multiplier,
        dead_zone: config.dead_zone,
        key_debounce: Duration::from_millis(config.key_debounce_ms),
    }
}

impl ControllerSettings {
    /// Builds settings from a loaded config.
    ///
    /// The configured initial front face must be the face that looks at the
    /// viewer in the rest pose.
    pub fn from_config(config: &Config) -> Result<Self, SettingsError> {
        let configured = CubeFace::try_from(config.topology.initial_front_face)?;
        let resolved = resolve_front_face(Quat::IDENTITY, &FACE_NORMALS, VIEW_DIRECTION);
        if configured != resolved {
            return Err(SettingsError::InitialFaceMismatch {
                configured,
                resolved,
            });
        }
        Ok(Self {
            gesture: gesture_settings(&config.gesture),
            animation: AnimationSettings::from(&config.animation),
        })
    }
}

type DirectionListener = Box<dyn FnMut(Direction)>;
type FaceListener = Box<dyn FnMut(CubeFace)>;

/// Owns all rotation state for one cube.
pub struct CubeRotationController<T: FaceTopology, C: Clock = MonotonicClock> {
    recognizer: GestureRecognizer<C>,
    topology: T,
    animator: RotationAnimator<T::Orientation>,
    camera: Quat,
    front_face: CubeFace,
    body: Option<Box<dyn RenderTarget>>,
    mirrors: Vec<Box<dyn RenderTarget>>,
    direction_listeners: Vec<DirectionListener>,
    face_listeners: Vec<FaceListener>,
}

impl<T: FaceTopology> CubeRotationController<T, MonotonicClock> {
    /// Creates a controller on the wall clock.
    #[must_use]
    pub fn new(topology: T, settings: ControllerSettings) -> Self {
        Self::with_clock(topology, settings, MonotonicClock::new())
    }
}

impl<T: FaceTopology, C: Clock> CubeRotationController<T, C> {
    /// Creates a controller on the given clock.
    ///
    /// The reported front face starts as whatever the rest pose shows.
    #[must_use]
    pub fn with_clock(topology: T, settings: ControllerSettings, clock: C) -> Self {
        let mut controller = Self {
            recognizer: GestureRecognizer::with_clock(settings.gesture, clock),
            topology,
            animator: RotationAnimator::new(settings.animation),
            camera: Quat::IDENTITY,
            front_face: CubeFace::Front,
            body: None,
            mirrors: Vec::new(),
            direction_listeners: Vec::new(),
            face_listeners: Vec::new(),
        };
        controller.front_face = controller.resolve_front_face();
        controller
    }

    // ── Host wiring ─────────────────────────────────────────────────

    /// Registers the body and the mirrors that must copy its orientation.
    ///
    /// The current orientation is applied immediately.
    pub fn attach(&mut self, body: Box<dyn RenderTarget>, mirrors: Vec<Box<dyn RenderTarget>>) {
        self.body = Some(body);
        self.mirrors = mirrors;
        self.sync_targets();
    }

    /// Called once per accepted gesture with its direction.
    pub fn on_direction(&mut self, callback: impl FnMut(Direction) + 'static) {
        self.direction_listeners.push(Box::new(callback));
    }

    /// Called once per settle that changes the front face.
    pub fn on_front_face_changed(&mut self, callback: impl FnMut(CubeFace) + 'static) {
        self.face_listeners.push(Box::new(callback));
    }

    /// Sets the viewer orientation used for swipe axes and front-face resolution.
    ///
    /// At rest the front face is re-resolved at once; mid-rotation it is
    /// resolved when the rotation settles.
    pub fn set_camera_orientation(&mut self, camera: Quat) {
        self.camera = camera.normalize();
        self.topology.set_camera(self.camera);
        if !self.animator.is_animating() {
            self.refresh_front_face();
        }
    }

    /// Applies new gesture and animation settings; the gesture in progress is dropped.
    pub fn reconfigure(&mut self, settings: ControllerSettings) {
        self.recognizer.set_settings(settings.gesture);
        self.animator.set_settings(settings.animation);
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Whether a rotation is in flight; input is rejected while it is.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// The last reported front face.
    #[must_use]
    pub fn front_face(&self) -> CubeFace {
        self.front_face
    }

    /// Orientation shown this frame.
    #[must_use]
    pub fn orientation(&self) -> &T::Orientation {
        self.animator.current()
    }

    /// Orientation being approached.
    #[must_use]
    pub fn target_orientation(&self) -> &T::Orientation {
        self.animator.target()
    }

    /// Face strategy in use.
    #[must_use]
    pub fn topology(&self) -> &T {
        &self.topology
    }

    /// Resolves the face looking at the viewer for the current orientation.
    ///
    /// Callable at any time; does not notify listeners.
    #[must_use]
    pub fn resolve_front_face(&self) -> CubeFace {
        self.resolve(self.animator.current().to_quat())
    }

    // ── Input ───────────────────────────────────────────────────────

    /// Wheel event; positive `delta_y` scrolls down.
    pub fn on_wheel(&mut self, delta_x: f32, delta_y: f32, shift_held: bool) -> Option<Direction> {
        let direction = self.recognizer.on_wheel(delta_x, delta_y, shift_held)?;
        self.accept(direction).then_some(direction)
    }

    /// Pointer or touch start.
    pub fn on_pointer_start(&mut self, x: f32, y: f32) {
        self.recognizer.on_pointer_start(x, y);
    }

    /// Pointer or touch move.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Option<Direction> {
        let direction = self.recognizer.on_pointer_move(x, y)?;
        self.accept(direction).then_some(direction)
    }

    /// Pointer or touch end.
    pub fn on_pointer_end(&mut self) {
        self.recognizer.on_pointer_end();
    }

    /// Arrow key press.
    pub fn on_key(&mut self, key: Key) -> Option<Direction> {
        let direction = self.recognizer.on_key(key)?;
        self.accept(direction).then_some(direction)
    }

    /// Key press by name (e.g. `"ArrowUp"`); other keys are ignored.
    pub fn on_key_name(&mut self, name: &str) -> Option<Direction> {
        let direction = self.recognizer.on_key_name(name)?;
        self.accept(direction).then_some(direction)
    }

    /// Rotates without a gesture (e.g. on-screen arrow buttons).
    ///
    /// Returns `false` while a rotation is still animating.
    pub fn rotate(&mut self, direction: Direction) -> bool {
        if self.recognizer.is_suspended() {
            debug!(?direction, "rotation request rejected while animating");
            return false;
        }
        self.accept(direction)
    }

    // ── Frame ───────────────────────────────────────────────────────

    /// Advances the animation by one frame of `dt` seconds.
    ///
    /// Returns whether the body is still animating. On the frame the rotation
    /// settles, input is re-enabled and the front face is resolved once.
    pub fn tick(&mut self, dt: f32) -> bool {
        match self.animator.tick(dt) {
            TickOutcome::Idle => false,
            TickOutcome::Moving => {
                self.sync_targets();
                true
            }
            TickOutcome::Settled => {
                self.sync_targets();
                self.recognizer.resume();
                self.refresh_front_face();
                false
            }
        }
    }

    // ── Internals ───────────────────────────────────────────────────

    fn accept(&mut self, direction: Direction) -> bool {
        if self.animator.is_animating() {
            debug!(?direction, "direction dropped, rotation in flight");
            return false;
        }
        let target = self
            .topology
            .next_orientation(self.animator.target(), direction);
        self.animator.set_target(target);
        self.recognizer.suspend();
        info!(?direction, ?target, "rotation started");
        for listener in &mut self.direction_listeners {
            listener(direction);
        }
        true
    }

    fn refresh_front_face(&mut self) {
        let face = self.resolve_front_face();
        if face == self.front_face {
            debug!(%face, "front face unchanged");
            return;
        }
        info!(from = %self.front_face, to = %face, "front face changed");
        self.front_face = face;
        for listener in &mut self.face_listeners {
            listener(face);
        }
    }

    fn resolve(&self, orientation: Quat) -> CubeFace {
        resolve_front_face(orientation, &FACE_NORMALS, self.camera * VIEW_DIRECTION)
    }

    fn sync_targets(&mut self) {
        let rotation = self.animator.current().to_quat();
        if let Some(body) = self.body.as_mut() {
            body.set_rotation(rotation);
        }
        for mirror in &mut self.mirrors {
            mirror.set_rotation(rotation);
        }
    }
}

impl<T: FaceTopology + Clone, C: Clock> CubeRotationController<T, C> {
    /// The face that would end up in front if `direction` were applied now.
    ///
    /// Does not change any state.
    #[must_use]
    pub fn preview_front_face(&self, direction: Direction) -> CubeFace {
        let mut topology = self.topology.clone();
        let target = topology.next_orientation(self.animator.target(), direction);
        self.resolve(target.to_quat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_target::SharedRotation;
    use crate::topology::{CameraRelativeTopology, ParityEulerTopology};
    use cubeturn_input::ManualClock;
    use std::cell::RefCell;
    use std::rc::Rc;

    const FRAME: f32 = 1.0 / 60.0;

    type TestController = CubeRotationController<CameraRelativeTopology, ManualClock>;

    fn controller() -> (TestController, ManualClock) {
        let clock = ManualClock::new();
        let c = CubeRotationController::with_clock(
            CameraRelativeTopology::default(),
            ControllerSettings::default(),
            clock.clone(),
        );
        (c, clock)
    }

    fn settle<T: FaceTopology, C: Clock>(c: &mut CubeRotationController<T, C>) -> usize {
        for frame in 1..=10_000 {
            if !c.tick(FRAME) {
                return frame;
            }
        }
        panic!("rotation never settled");
    }

    #[test]
    fn test_initial_front_face_matches_resolver() {
        let (c, _) = controller();
        assert_eq!(c.front_face(), CubeFace::Front);
        assert_eq!(c.resolve_front_face(), CubeFace::Front);
    }

    #[test]
    fn test_settings_from_default_config() {
        let settings = ControllerSettings::from_config(&Config::default()).unwrap();
        assert_eq!(settings, ControllerSettings::default());
    }

    #[test]
    fn test_settings_reject_bad_face_index() {
        let mut config = Config::default();
        config.topology.initial_front_face = 9;
        assert_eq!(
            ControllerSettings::from_config(&config),
            Err(SettingsError::FaceIndex(FaceIndexError(9)))
        );
    }

    #[test]
    fn test_settings_reject_face_hidden_at_rest() {
        let mut config = Config::default();
        config.topology.initial_front_face = CubeFace::Left.index() as u8;
        assert_eq!(
            ControllerSettings::from_config(&config),
            Err(SettingsError::InitialFaceMismatch {
                configured: CubeFace::Left,
                resolved: CubeFace::Front,
            })
        );
    }

    #[test]
    fn test_front_face_seeded_from_rest_pose() {
        let (mut c, _) = controller();
        let faces = Rc::new(RefCell::new(Vec::new()));
        let sink = faces.clone();
        c.on_front_face_changed(move |face| sink.borrow_mut().push(face));

        assert_eq!(c.front_face(), c.resolve_front_face());
        c.rotate(Direction::Left);
        settle(&mut c);
        assert_eq!(c.front_face(), c.resolve_front_face());
        assert_eq!(*faces.borrow(), vec![CubeFace::Left]);
    }

    #[test]
    fn test_key_rotation_reports_new_face() {
        let (mut c, _) = controller();
        let faces = Rc::new(RefCell::new(Vec::new()));
        let sink = faces.clone();
        c.on_front_face_changed(move |face| sink.borrow_mut().push(face));

        assert_eq!(c.on_key(Key::ArrowRight), Some(Direction::Right));
        assert!(c.is_animating());
        settle(&mut c);
        assert_eq!(*faces.borrow(), vec![CubeFace::Right]);
        assert_eq!(c.front_face(), CubeFace::Right);
    }

    #[test]
    fn test_input_rejected_while_animating() {
        let (mut c, clock) = controller();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        c.on_direction(move |_| *sink.borrow_mut() += 1);

        assert!(c.on_key(Key::ArrowUp).is_some());
        clock.advance(Duration::from_secs(2));
        c.tick(FRAME);
        assert_eq!(c.on_key(Key::ArrowDown), None);
        assert_eq!(c.on_wheel(0.0, 200.0, false), None);
        c.on_pointer_start(0.0, 0.0);
        assert_eq!(c.on_pointer_move(0.0, 300.0), None);
        assert!(!c.rotate(Direction::Left));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_mirrors_copy_body_every_frame() {
        let (mut c, _) = controller();
        let body = SharedRotation::new();
        let outline = SharedRotation::new();
        let glow = SharedRotation::new();
        c.attach(
            Box::new(body.clone()),
            vec![Box::new(outline.clone()), Box::new(glow.clone())],
        );
        c.rotate(Direction::Down);
        while c.tick(FRAME) {
            assert_eq!(body.get(), outline.get());
            assert_eq!(body.get(), glow.get());
        }
        assert_eq!(body.get(), *c.orientation());
        assert_eq!(glow.get(), *c.orientation());
    }

    #[test]
    fn test_idle_tick_forever_is_noop() {
        let (mut c, _) = controller();
        let body = SharedRotation::new();
        c.attach(Box::new(body.clone()), Vec::new());
        for _ in 0..1000 {
            assert!(!c.tick(FRAME));
        }
        assert_eq!(body.get(), Quat::IDENTITY);
    }

    #[test]
    fn test_face_change_reported_only_when_different() {
        let (mut c, clock) = controller();
        let faces = Rc::new(RefCell::new(Vec::new()));
        let sink = faces.clone();
        c.on_front_face_changed(move |face| sink.borrow_mut().push(face));

        c.rotate(Direction::Left);
        settle(&mut c);
        clock.advance(Duration::from_secs(1));
        c.rotate(Direction::Right);
        settle(&mut c);
        assert_eq!(*faces.borrow(), vec![CubeFace::Left, CubeFace::Front]);
    }

    #[test]
    fn test_preview_does_not_mutate() {
        let (c, _) = controller();
        assert_eq!(c.preview_front_face(Direction::Up), CubeFace::Bottom);
        assert_eq!(c.preview_front_face(Direction::Down), CubeFace::Top);
        assert!(!c.is_animating());
        assert_eq!(*c.target_orientation(), Quat::IDENTITY);
    }

    #[test]
    fn test_parity_euler_controller() {
        let clock = ManualClock::new();
        let mut c = CubeRotationController::with_clock(
            ParityEulerTopology::new(),
            ControllerSettings::default(),
            clock,
        );
        assert!(c.rotate(Direction::Up));
        settle(&mut c);
        assert_eq!(c.front_face(), CubeFace::Bottom);
        assert_eq!(c.topology().vertical_index(), 1);
        assert!(c.rotate(Direction::Left));
        let _ = c.preview_front_face(Direction::Up);
        assert_eq!(c.topology().vertical_index(), 1);
        settle(&mut c);
        assert_eq!(c.front_face(), CubeFace::Left);
    }

    #[test]
    fn test_camera_orientation_changes_resolved_face() {
        let (mut c, _) = controller();
        // Camera turned to look along -X: the right face is now toward it.
        c.set_camera_orientation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        assert_eq!(c.resolve_front_face(), CubeFace::Right);
        assert_eq!(c.front_face(), CubeFace::Right);
    }

    #[test]
    fn test_reconfigure_applies_new_threshold() {
        let (mut c, _) = controller();
        c.reconfigure(ControllerSettings {
            gesture: GestureSettings {
                swipe_threshold: 10.0,
                ..GestureSettings::default()
            },
            ..ControllerSettings::default()
        });
        c.on_pointer_start(0.0, 0.0);
        assert_eq!(c.on_pointer_move(0.0, 12.0), Some(Direction::Down));
    }
}
