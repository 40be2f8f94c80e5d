//! [`WindowManager`] implementation backed by `xdotool` and `xrandr`.
//!
//! Each method spawns one short-lived child process with an explicit
//! argument vector (no shell) and parses its standard output.

use super::parse::{self, ParseError};
use crate::command::{MonitorInfo, Position, WindowId};
use crate::config::{FocusConfig, ToolsConfig};
use crate::traits::WindowManager;
use log::debug;
use std::process::Command;

/// X11 window manager driven through the `xdotool` and `xrandr` programs.
#[derive(Debug, Clone, Default)]
pub struct XdotoolWm {
    tools: ToolsConfig,
    focus: FocusConfig,
}

/// Errors that can occur when running the external programs.
#[derive(Debug, thiserror::Error)]
#[error("{program} {step}: {reason}")]
pub struct XdotoolError {
    program: String,
    step: &'static str,
    reason: String,
}

impl XdotoolError {
    fn new(program: &str, step: &'static str, reason: impl ToString) -> Self {
        Self {
            program: program.to_string(),
            step,
            reason: reason.to_string(),
        }
    }
}

impl XdotoolWm {
    /// Create a handle using the given program locations and focus options.
    pub fn new(tools: ToolsConfig, focus: FocusConfig) -> Self {
        Self { tools, focus }
    }

    fn xdotool(&self, step: &'static str, args: &[String]) -> Result<String, XdotoolError> {
        run(&self.tools.xdotool, step, args)
    }
}

//  Process helpers

/// Run `program` with `args` and return its standard output.
///
/// A spawn failure, a non-zero exit status or non-UTF-8 output is an error.
fn run(program: &str, step: &'static str, args: &[String]) -> Result<String, XdotoolError> {
    debug!("running {} {}", program, args.join(" "));
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| XdotoolError::new(program, step, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(XdotoolError::new(
            program,
            step,
            format!("{} ({})", output.status, stderr.trim()),
        ));
    }

    String::from_utf8(output.stdout).map_err(|e| XdotoolError::new(program, step, format!("utf-8: {}", e)))
}

fn parsed<T>(program: &str, step: &'static str, result: Result<T, ParseError>) -> Result<T, XdotoolError> {
    result.map_err(|e| XdotoolError::new(program, step, e))
}

fn to_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

//  Argument builders

fn active_window_args() -> Vec<String> {
    to_args(&["getactivewindow", "getwindowgeometry", "--shell"])
}

fn window_at_args(point: Position, restore_pointer: bool) -> Vec<String> {
    let mut args = vec![
        "mousemove".to_string(),
        point.x.to_string(),
        point.y.to_string(),
        "getmouselocation".to_string(),
        "--shell".to_string(),
    ];
    if restore_pointer {
        args.extend(to_args(&["mousemove", "restore"]));
    }
    args
}

fn activate_args(window: &WindowId, sync: bool) -> Vec<String> {
    let mut args = vec!["windowactivate".to_string()];
    if sync {
        args.push("--sync".to_string());
    }
    args.push(window.0.clone());
    args
}

//  WindowManager implementation

impl WindowManager for XdotoolWm {
    type Error = XdotoolError;

    fn active_window_position(&self) -> Result<Position, Self::Error> {
        let step = "active window geometry";
        let out = self.xdotool(step, &active_window_args())?;
        parsed(&self.tools.xdotool, step, parse::parse_position(&out))
    }

    fn monitors(&self) -> Result<Vec<MonitorInfo>, Self::Error> {
        let step = "list monitors";
        let out = run(&self.tools.xrandr, step, &to_args(&["--listmonitors"]))?;
        parsed(&self.tools.xrandr, step, parse::parse_list_monitors(&out))
    }

    fn window_at(&self, point: Position) -> Result<WindowId, Self::Error> {
        let step = "window under pointer";
        let out = self.xdotool(step, &window_at_args(point, self.focus.restore_pointer))?;
        parsed(&self.tools.xdotool, step, parse::parse_window_id(&out))
    }

    fn activate_window(&self, window: &WindowId) -> Result<(), Self::Error> {
        self.xdotool("activate window", &activate_args(window, self.focus.sync_activate))
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_at_args_with_restore() {
        assert_eq!(
            window_at_args(Position::new(2646, 720), true),
            vec!["mousemove", "2646", "720", "getmouselocation", "--shell", "mousemove", "restore"]
        );
    }

    #[test]
    fn window_at_args_without_restore() {
        assert_eq!(
            window_at_args(Position::new(-10, 5), false),
            vec!["mousemove", "-10", "5", "getmouselocation", "--shell"]
        );
    }

    #[test]
    fn activate_args_sync_flag() {
        let w = WindowId("4242".into());
        assert_eq!(activate_args(&w, false), vec!["windowactivate", "4242"]);
        assert_eq!(activate_args(&w, true), vec!["windowactivate", "--sync", "4242"]);
    }

    #[test]
    fn active_window_query() {
        assert_eq!(active_window_args(), vec!["getactivewindow", "getwindowgeometry", "--shell"]);
    }

    #[test]
    fn missing_program_is_an_error() {
        let wm = XdotoolWm::new(
            ToolsConfig {
                xdotool: "/nonexistent/monfocus-xdotool".into(),
                xrandr: "/nonexistent/monfocus-xrandr".into(),
            },
            FocusConfig::default(),
        );
        let err = wm.monitors().unwrap_err();
        assert!(err.to_string().starts_with("/nonexistent/monfocus-xrandr list monitors:"));
        assert!(wm.active_window_position().is_err());
    }

    #[test]
    fn non_zero_exit_is_an_error() {
        let err = run("false", "probe", &[]).unwrap_err();
        assert!(err.to_string().starts_with("false probe: "));
    }

    #[test]
    fn stdout_is_returned() {
        let out = run("echo", "probe", &to_args(&["X=1"])).unwrap();
        assert_eq!(out.trim(), "X=1");
    }

    #[test]
    fn parse_failures_name_the_program() {
        let err = parsed::<Position>("xdotool", "active window geometry", Err(ParseError::MissingKey("X")))
            .unwrap_err();
        assert_eq!(err.to_string(), "xdotool active window geometry: missing X in output");
    }
}
