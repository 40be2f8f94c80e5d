//! Types shared by every part of monfocus.
//!
//! [`Direction`] is the only user intent the tool understands.
//! [`MonitorInfo`], [`Position`] and [`WindowId`] are the plain values that
//! the [`WindowManager`](crate::traits::WindowManager) hands to the geometry
//! code and receives back from it.

use std::fmt;

/// Direction in which focus moves between monitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Parse a direction string (case-insensitive, no surrounding whitespace).
pub fn parse_direction(s: &str) -> Option<Direction> {
    match s.to_lowercase().as_str() {
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        _ => None,
    }
}

/// Static information about a monitor reported by the display server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorInfo {
    /// Output name (e.g. `"HDMI-1-1"`).
    pub name: String,
    /// Horizontal resolution in pixels.
    pub width: u32,
    /// Vertical resolution in pixels.
    pub height: u32,
    /// X offset on the virtual desktop (pixels).
    pub x: i32,
    /// Y offset on the virtual desktop (pixels).
    pub y: i32,
    /// Whether the display server marks this monitor as primary.
    pub primary: bool,
}

impl MonitorInfo {
    /// Whether `x` lies in this monitor's half-open span `[x, x + width)`.
    pub fn contains_x(&self, x: i32) -> bool {
        let start = i64::from(self.x);
        let end = start + i64::from(self.width);
        (start..end).contains(&i64::from(x))
    }

    /// Exclusive right edge of the horizontal span.
    pub fn right_edge(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }
}

impl fmt::Display for MonitorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}x{}{:+}{:+}",
            self.name, self.width, self.height, self.x, self.y
        )?;
        if self.primary {
            write!(f, " (primary)")?;
        }
        Ok(())
    }
}

/// A point on the virtual desktop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Opaque window identifier as understood by the window manager.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowId(pub String);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
