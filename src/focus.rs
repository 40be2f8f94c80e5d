//! The orchestrator that ties the layout geometry and the window manager
//! together.
//!
//! [`FocusChanger`] queries the window manager, works out the target
//! monitor with [`Layout`], and then moves focus there.

use crate::command::{Direction, WindowId};
use crate::layout::{center_of, Layout, LayoutError};
use crate::traits::WindowManager;
use log::{debug, info};

/// Possible errors from a focus change.
#[derive(Debug, thiserror::Error)]
pub enum FocusError {
    /// The window manager returned an error.
    #[error("window manager error: {0}")]
    WindowManager(String),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The focused window does not start on any monitor.
    #[error("window position x={x} is outside every monitor")]
    OutsideMonitors { x: i32 },
}

/// What a focus change did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusOutcome {
    /// Already on the outermost monitor in that direction; nothing was done.
    Unchanged { monitor: String },
    /// Focus moved to `window` on monitor `to`.
    Moved {
        from: String,
        to: String,
        window: WindowId,
    },
}

/// Moves keyboard focus between monitors.
///
/// Generic over any [`WindowManager`], so it can be driven by the X11
/// backend or by a test double.
///
/// ```ignore
/// let wm = XdotoolWm::default();
/// let outcome = FocusChanger::new(wm).change_focus(Direction::Right)?;
/// ```
pub struct FocusChanger<W: WindowManager> {
    wm: W,
}

impl<W: WindowManager> FocusChanger<W> {
    pub fn new(wm: W) -> Self {
        Self { wm }
    }

    /// Return a shared reference to the underlying window manager.
    pub fn wm(&self) -> &W {
        &self.wm
    }

    /// Query the window manager and build a sorted [`Layout`].
    pub fn layout(&self) -> Result<Layout, FocusError> {
        let monitors = self.wm.monitors().map_err(wm_error)?;
        let layout = Layout::new(monitors);
        debug!("found {} monitor(s)", layout.len());
        for (i, m) in layout.monitors().iter().enumerate() {
            debug!("  {}: {}", i, m);
        }
        Ok(layout)
    }

    /// Focus the window at the center of the monitor next to the current
    /// one in `direction`.
    ///
    /// When the current monitor is already the outermost one, the pointer
    /// and focus are left alone.
    pub fn change_focus(&self, direction: Direction) -> Result<FocusOutcome, FocusError> {
        let pos = self.wm.active_window_position().map_err(wm_error)?;
        debug!("active window at {}", pos);

        let layout = self.layout()?;
        if layout.is_empty() {
            return Err(LayoutError::NoMonitors.into());
        }

        let current = layout
            .locate(pos)
            .ok_or(FocusError::OutsideMonitors { x: pos.x })?;
        let (target, target_monitor) = layout.adjacent_monitor(current, direction)?;
        let from = monitor_name(&layout, current);

        if target == current {
            info!("no monitor {} of {}, focus unchanged", direction, from);
            return Ok(FocusOutcome::Unchanged { monitor: from });
        }

        let to = target_monitor.name.clone();
        let point = center_of(target_monitor);
        debug!("target monitor {} ({}), center {}", target, to, point);

        let window = self.wm.window_at(point).map_err(wm_error)?;
        self.wm.activate_window(&window).map_err(wm_error)?;
        info!("focus {}: {} -> {} (window {})", direction, from, to, window);

        Ok(FocusOutcome::Moved { from, to, window })
    }
}

fn wm_error<E: std::error::Error>(e: E) -> FocusError {
    FocusError::WindowManager(e.to_string())
}

fn monitor_name(layout: &Layout, index: usize) -> String {
    layout
        .get(index)
        .map(|m| m.name.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{MonitorInfo, Position};
    use std::cell::RefCell;

    //  Mock WindowManager

    /// A test double that records every pointer and activation call.
    #[derive(Debug, Default)]
    struct MockWm {
        position: Position,
        monitors: Vec<MonitorInfo>,
        fail_monitors: bool,
        probe_log: RefCell<Vec<Position>>,
        activate_log: RefCell<Vec<WindowId>>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    struct MockError;

    impl WindowManager for MockWm {
        type Error = MockError;

        fn active_window_position(&self) -> Result<Position, MockError> {
            Ok(self.position)
        }

        fn monitors(&self) -> Result<Vec<MonitorInfo>, MockError> {
            if self.fail_monitors {
                return Err(MockError);
            }
            Ok(self.monitors.clone())
        }

        fn window_at(&self, point: Position) -> Result<WindowId, MockError> {
            self.probe_log.borrow_mut().push(point);
            Ok(WindowId(format!("{}", 1000 + point.x)))
        }

        fn activate_window(&self, window: &WindowId) -> Result<(), MockError> {
            self.activate_log.borrow_mut().push(window.clone());
            Ok(())
        }
    }

    fn mon(name: &str, x: i32, y: i32, width: u32, height: u32) -> MonitorInfo {
        MonitorInfo {
            name: name.into(),
            width,
            height,
            x,
            y,
            primary: false,
        }
    }

    fn laptop_and_external(x: i32) -> MockWm {
        MockWm {
            position: Position::new(x, 300),
            monitors: vec![
                mon("HDMI-1-1", 1366, 0, 2560, 1440),
                mon("eDP-1-1", 0, 45, 1366, 768),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn moves_right_to_center_of_next_monitor() {
        let changer = FocusChanger::new(laptop_and_external(100));
        let outcome = changer.change_focus(Direction::Right).unwrap();
        assert_eq!(
            outcome,
            FocusOutcome::Moved {
                from: "eDP-1-1".into(),
                to: "HDMI-1-1".into(),
                window: WindowId("3646".into()),
            }
        );
        assert_eq!(*changer.wm().probe_log.borrow(), vec![Position::new(2646, 720)]);
        assert_eq!(*changer.wm().activate_log.borrow(), vec![WindowId("3646".into())]);
    }

    #[test]
    fn moves_left_from_external() {
        let changer = FocusChanger::new(laptop_and_external(2000));
        let outcome = changer.change_focus(Direction::Left).unwrap();
        assert!(matches!(outcome, FocusOutcome::Moved { ref to, .. } if to == "eDP-1-1"));
        assert_eq!(*changer.wm().probe_log.borrow(), vec![Position::new(683, 429)]);
    }

    #[test]
    fn outermost_monitor_leaves_focus_alone() {
        let changer = FocusChanger::new(laptop_and_external(100));
        let outcome = changer.change_focus(Direction::Left).unwrap();
        assert_eq!(
            outcome,
            FocusOutcome::Unchanged {
                monitor: "eDP-1-1".into()
            }
        );
        assert!(changer.wm().probe_log.borrow().is_empty());
        assert!(changer.wm().activate_log.borrow().is_empty());
    }

    #[test]
    fn single_monitor_is_always_unchanged() {
        let wm = MockWm {
            position: Position::new(10, 10),
            monitors: vec![mon("DP-1", 0, 0, 1920, 1080)],
            ..Default::default()
        };
        let changer = FocusChanger::new(wm);
        for dir in [Direction::Left, Direction::Right] {
            assert!(matches!(changer.change_focus(dir), Ok(FocusOutcome::Unchanged { .. })));
        }
        assert!(changer.wm().activate_log.borrow().is_empty());
    }

    #[test]
    fn position_outside_monitors_is_an_error() {
        let changer = FocusChanger::new(laptop_and_external(5000));
        let err = changer.change_focus(Direction::Right).unwrap_err();
        assert!(matches!(err, FocusError::OutsideMonitors { x: 5000 }));
        assert!(changer.wm().activate_log.borrow().is_empty());
    }

    #[test]
    fn no_monitors_is_an_error() {
        let changer = FocusChanger::new(MockWm::default());
        let err = changer.change_focus(Direction::Right).unwrap_err();
        assert!(matches!(err, FocusError::Layout(LayoutError::NoMonitors)));
        assert_eq!(err.to_string(), "invalid number of monitors: 0");
    }

    #[test]
    fn window_manager_errors_are_wrapped() {
        let wm = MockWm {
            fail_monitors: true,
            ..laptop_and_external(100)
        };
        let err = FocusChanger::new(wm).change_focus(Direction::Right).unwrap_err();
        assert_eq!(err.to_string(), "window manager error: mock error");
    }

    #[test]
    fn three_monitors_step_one_at_a_time() {
        let wm = MockWm {
            position: Position::new(2000, 0),
            monitors: vec![
                mon("DP-3", 4480, 0, 1920, 1080),
                mon("DP-1", 0, 0, 1920, 1080),
                mon("DP-2", 1920, 0, 2560, 1440),
            ],
            ..Default::default()
        };
        let changer = FocusChanger::new(wm);
        let outcome = changer.change_focus(Direction::Right).unwrap();
        assert!(matches!(outcome, FocusOutcome::Moved { ref from, ref to, .. } if from == "DP-2" && to == "DP-3"));
        assert_eq!(*changer.wm().probe_log.borrow(), vec![Position::new(4480 + 960, 540)]);
    }

    #[test]
    fn layout_is_sorted() {
        let changer = FocusChanger::new(laptop_and_external(100));
        let layout = changer.layout().unwrap();
        assert_eq!(layout.get(0).unwrap().name, "eDP-1-1");
        assert_eq!(layout.get(1).unwrap().name, "HDMI-1-1");
    }
}
