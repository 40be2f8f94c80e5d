//! **monfocus** — move keyboard focus to the neighbouring monitor.
//!
//! Monitors are treated as a left-to-right row.  Given a direction, the
//! window occupying the middle of the adjacent monitor receives focus; at
//! either end of the row nothing happens.
//!
//! # Architecture
//!
//! The geometry in [`layout`] works on plain [`command::MonitorInfo`] and
//! [`command::Position`] values.  It is connected to the display server
//! through one trait:
//!
//! * [`traits::WindowManager`] — reports the active window position and the
//!   monitors, finds the window under a point, and activates windows.
//!
//! [`focus::FocusChanger`] runs one focus change against any
//! implementation.  The X11 backend lives in [`xdotool`].

pub mod cli;
pub mod command;
pub mod config;
pub mod focus;
pub mod layout;
pub mod traits;
pub mod xdotool;
