//! X11 implementation of the
//! [`WindowManager`](crate::traits::WindowManager) trait.
//!
//! Geometry comes from `xdotool` and `xrandr`, and pointer moves and
//! activation go through `xdotool`.  The text those programs print is
//! turned into plain values by [`parse`].
//!
//! Nothing outside this module should reference either program directly.

pub mod parse;
pub mod wm;
