//! Discrete 90° cube rotation driven by swipe gestures.
//!
//! [`CubeRotationController`] owns all rotation state: it feeds input through a
//! [`GestureRecognizer`](cubeturn_input::GestureRecognizer), turns each
//! accepted [`Direction`](cubeturn_input::Direction) into a new target
//! orientation via a [`FaceTopology`] strategy, animates toward it with
//! [`RotationAnimator`], and reports the face that ends up facing the viewer.

mod animator;
mod controller;
mod face;
mod front_face;
mod orientation;
mod render_target;
mod topology;

pub use animator::{AnimationSettings, RotationAnimator, TickOutcome};
pub use controller::{ControllerSettings, CubeRotationController, SettingsError};
pub use face::{CubeFace, FaceIndexError};
pub use front_face::{FACE_NORMALS, VIEW_DIRECTION, resolve_front_face};
pub use orientation::{EulerDegrees, Orientation, SettleTolerance};
pub use render_target::{RenderTarget, SharedRotation};
pub use topology::{CameraRelativeTopology, FaceTopology, ParityEulerTopology};
