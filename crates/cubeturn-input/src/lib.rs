//! Gesture recognition: turns wheel, pointer, and arrow-key input into at most
//! one discrete swipe [`Direction`] per physical gesture.

pub mod clock;
pub mod direction;
pub mod gesture;
pub mod key;
pub mod recognizer;
pub mod winit_adapter;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use direction::Direction;
pub use gesture::{Axis, GestureId, GestureSource, GestureState};
pub use key::Key;
pub use recognizer::{GestureRecognizer, GestureSettings};
pub use winit_adapter::{LINE_HEIGHT_PX, wheel_delta};
