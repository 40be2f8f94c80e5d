//! The capability trait that decouples monfocus from any specific display
//! server tooling.
//!
//! The [`FocusChanger`](crate::focus::FocusChanger) only depends on this
//! abstraction; the X11 backend lives in [`xdotool`](crate::xdotool).

use crate::command::{MonitorInfo, Position, WindowId};

/// Abstraction over a window manager that can report geometry and move
/// focus.
///
/// An implementation might shell out to `xdotool`, or it might be a stub
/// used in tests.
pub trait WindowManager {
    /// The error type produced by this window manager.
    type Error: std::error::Error + Send + 'static;

    /// Position of the currently focused window's top-left corner.
    fn active_window_position(&self) -> Result<Position, Self::Error>;

    /// Return the list of monitors, in whatever order the backend reports
    /// them.
    fn monitors(&self) -> Result<Vec<MonitorInfo>, Self::Error>;

    /// Move the pointer to `point` and return the window underneath it.
    ///
    /// Backends may put the pointer back where it was afterwards.
    fn window_at(&self, point: Position) -> Result<WindowId, Self::Error>;

    /// Give keyboard focus to `window`.
    fn activate_window(&self, window: &WindowId) -> Result<(), Self::Error>;
}
