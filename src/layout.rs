//! Monitor layout geometry.
//!
//! The [`Layout`] struct holds the monitors ordered left-to-right by their
//! horizontal offset.  It answers the three questions monfocus needs:
//! which monitor contains an x-coordinate, which monitor is next in a
//! given [`Direction`], and where the middle of a monitor is.

use crate::command::{Direction, MonitorInfo, Position};
use log::warn;

/// Errors from layout queries.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LayoutError {
    /// The display server reported no monitors at all.
    #[error("invalid number of monitors: 0")]
    NoMonitors,
}

/// Monitors sorted by ascending horizontal offset.
#[derive(Debug, Clone)]
pub struct Layout {
    monitors: Vec<MonitorInfo>,
}

impl Layout {
    /// Build a layout from monitors in any order.
    ///
    /// The sort is stable, so monitors sharing an offset keep the order the
    /// display server reported them in.  Overlapping neighbours are kept but
    /// logged, since the locator then resolves to the leftmost candidate.
    pub fn new(mut monitors: Vec<MonitorInfo>) -> Self {
        monitors.sort_by_key(|m| m.x);
        for pair in monitors.windows(2) {
            if pair[0].right_edge() > i64::from(pair[1].x) {
                warn!("monitors {} and {} overlap horizontally", pair[0], pair[1]);
            }
        }
        Self { monitors }
    }

    //  Accessors

    /// All monitors, left to right.
    pub fn monitors(&self) -> &[MonitorInfo] {
        &self.monitors
    }

    /// Monitor at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&MonitorInfo> {
        self.monitors.get(index)
    }

    /// Number of monitors.
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Whether the layout has no monitors.
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    //  Geometry

    /// Index of the monitor whose span `[x, x + width)` contains `pos.x`.
    pub fn locate(&self, pos: Position) -> Option<usize> {
        self.monitors.iter().position(|m| m.contains_x(pos.x))
    }

    /// Index of the neighbouring monitor in `direction` from `current`.
    pub fn adjacent(&self, current: usize, direction: Direction) -> Result<usize, LayoutError> {
        adjacent_index(current, direction, self.monitors.len())
    }

    /// The neighbouring monitor in `direction` from `current`, with its index.
    pub fn adjacent_monitor(
        &self,
        current: usize,
        direction: Direction,
    ) -> Result<(usize, &MonitorInfo), LayoutError> {
        let index = self.adjacent(current, direction)?;
        // `adjacent` only fails on an empty layout and otherwise stays in range.
        self.monitors
            .get(index)
            .map(|m| (index, m))
            .ok_or(LayoutError::NoMonitors)
    }
}

/// Step one monitor in `direction`, clamped to `[0, count - 1]`.
///
/// `current` beyond the end is treated as the last monitor.
pub fn adjacent_index(current: usize, direction: Direction, count: usize) -> Result<usize, LayoutError> {
    if count == 0 {
        return Err(LayoutError::NoMonitors);
    }
    let last = count - 1;
    let current = current.min(last);
    Ok(match direction {
        Direction::Left => current.saturating_sub(1),
        Direction::Right => (current + 1).min(last),
    })
}

/// Middle of the monitor's rectangle, rounding half-pixels down.
pub fn center_of(monitor: &MonitorInfo) -> Position {
    let half = |offset: i32, size: u32| -> i32 {
        let c = i64::from(offset) + i64::from(size / 2);
        c.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    };
    Position {
        x: half(monitor.x, monitor.width),
        y: half(monitor.y, monitor.height),
    }
}

//  Tests
