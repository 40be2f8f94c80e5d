//! Parsers for the text printed by `xdotool` and `xrandr`.
//!
//! All functions are pure so they can be tested against captured output.

use crate::command::{MonitorInfo, Position, WindowId};
use std::collections::HashMap;

/// Errors produced while interpreting tool output.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing {0} in output")]
    MissingKey(&'static str),
    #[error("invalid {key} value: {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("malformed monitor line {line:?}: {reason}")]
    MalformedMonitor { line: String, reason: &'static str },
    #[error("expected {expected} monitor(s), found {found}")]
    MonitorCount { expected: usize, found: usize },
}

/// Parse `KEY=VALUE` lines as printed by `xdotool ... --shell`.
///
/// Lines without `=` are skipped.  Later keys overwrite earlier ones, which
/// matters when several commands are chained in one invocation.
pub fn parse_shell_vars(text: &str) -> HashMap<String, String> {
    text.lines()
        .filter_map(|line| line.trim().split_once('='))
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect()
}

fn number(vars: &HashMap<String, String>, key: &'static str) -> Result<i32, ParseError> {
    let raw = vars.get(key).ok_or(ParseError::MissingKey(key))?;
    raw.parse().map_err(|_| ParseError::InvalidNumber {
        key,
        value: raw.clone(),
    })
}

/// Read the `X`/`Y` pair from `getwindowgeometry --shell` output.
pub fn parse_position(text: &str) -> Result<Position, ParseError> {
    let vars = parse_shell_vars(text);
    Ok(Position {
        x: number(&vars, "X")?,
        y: number(&vars, "Y")?,
    })
}

/// Read the `WINDOW` id from `getmouselocation --shell` output.
pub fn parse_window_id(text: &str) -> Result<WindowId, ParseError> {
    let vars = parse_shell_vars(text);
    let raw = vars.get("WINDOW").ok_or(ParseError::MissingKey("WINDOW"))?;
    // X11 ids are unsigned integers; reject anything else before handing it
    // back to `windowactivate`.
    if raw.parse::<u64>().is_err() {
        return Err(ParseError::InvalidNumber {
            key: "WINDOW",
            value: raw.clone(),
        });
    }
    Ok(WindowId(raw.clone()))
}

/// Parse the output of `xrandr --listmonitors`.
///
/// ```text
/// Monitors: 2
///  0: +*HDMI-1-1 2560/621x1440/341+1366+0  HDMI-1-1
///  1: +eDP-1-1 1366/309x768/174+0+45  eDP-1-1
/// ```
///
/// Monitors are returned in the order listed.
pub fn parse_list_monitors(text: &str) -> Result<Vec<MonitorInfo>, ParseError> {
    let mut expected: Option<usize> = None;
    let mut monitors = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(count) = line.strip_prefix("Monitors:") {
            let count = count.trim();
            expected = Some(count.parse().map_err(|_| ParseError::InvalidNumber {
                key: "Monitors",
                value: count.to_string(),
            })?);
            continue;
        }
        monitors.push(parse_monitor_line(line)?);
    }

    match expected {
        Some(n) if n != monitors.len() => Err(ParseError::MonitorCount {
            expected: n,
            found: monitors.len(),
        }),
        _ => Ok(monitors),
    }
}

fn parse_monitor_line(line: &str) -> Result<MonitorInfo, ParseError> {
    let malformed = |reason| ParseError::MalformedMonitor {
        line: line.to_string(),
        reason,
    };

    let mut tokens = line.split_whitespace();
    let index = tokens.next().ok_or_else(|| malformed("empty line"))?;
    if !index.ends_with(':') {
        return Err(malformed("missing index"));
    }
    let flagged_name = tokens.next().ok_or_else(|| malformed("missing name"))?;
    let geometry = tokens.next().ok_or_else(|| malformed("missing geometry"))?;

    let flags_end = flagged_name
        .find(|c: char| c != '+' && c != '*')
        .ok_or_else(|| malformed("missing name"))?;
    let (flags, name) = flagged_name.split_at(flags_end);

    let (width, height, x, y) = parse_geometry(geometry).ok_or_else(|| malformed("bad geometry"))?;

    Ok(MonitorInfo {
        name: name.to_string(),
        width,
        height,
        x,
        y,
        primary: flags.contains('*'),
    })
}

/// Split `W/mmWxH/mmH+X+Y` into its pixel components.
///
/// The physical-size parts are optional and ignored.
fn parse_geometry(token: &str) -> Option<(u32, u32, i32, i32)> {
    let (w_part, rest) = token.split_once('x')?;
    let offsets_at = rest.find(['+', '-'])?;
    let (h_part, offsets) = rest.split_at(offsets_at);

    let pixels = |part: &str| -> Option<u32> { part.split('/').next()?.parse().ok() };
    let width = pixels(w_part)?;
    let height = pixels(h_part)?;

    let (x, y) = parse_offsets(offsets)?;
    Some((width, height, x, y))
}

/// Parse two signed offsets such as `+1366+0`, `-1920+0` or `+-1920+0`.
fn parse_offsets(s: &str) -> Option<(i32, i32)> {
    let mut values = Vec::with_capacity(2);
    let mut rest = s;
    while !rest.is_empty() {
        let sign_len = rest
            .find(|c: char| c.is_ascii_digit())
            .filter(|&n| n > 0 && rest[..n].chars().all(|c| c == '+' || c == '-'))?;
        let negative = rest[..sign_len].contains('-');
        let digits_end = rest[sign_len..]
            .find(|c: char| !c.is_ascii_digit())
            .map_or(rest.len(), |n| sign_len + n);
        let magnitude: i64 = rest[sign_len..digits_end].parse().ok()?;
        let value = if negative { -magnitude } else { magnitude };
        values.push(i32::try_from(value).ok()?);
        rest = &rest[digits_end..];
    }
    match values[..] {
        [x, y] => Some((x, y)),
        _ => None,
    }
}
