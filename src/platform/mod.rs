//! Platform abstraction layer
//!
//! Everything the simulation needs from the outside world, behind small traits:
//! - Time (monotonic clock and frame pacing)
//! - Input events
//! - Display size discovery (one implementation per target, resolved at startup)

pub mod display;
pub mod input;
pub mod time;

pub use display::{Display, HeadlessDisplay, Viewport};
pub use input::{Command, InputEvent, InputSource, KeyCode, ScriptedInput};
pub use time::{Clock, ManualClock, SystemClock};
