//! ANSI color helper utilities for terminal output.

use crate::models::rows::Rest;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Rest color:
/// n/a → grey
/// 0 → red
/// \>0 → green
pub fn color_for_rest(rest: &Rest) -> &'static str {
    match rest {
        Rest::NotApplicable => GREY,
        Rest::Days(0) => RED,
        Rest::Days(_) => GREEN,
    }
}

/// Zero day counts are dimmed, everything else is left as is.
pub fn color_for_days(days: u32) -> &'static str {
    if days == 0 { GREY } else { RESET }
}

/// Truecolor foreground escape for a `#rrggbb` category color.
/// Anything else (empty, short form, garbage) yields no color.
pub fn fg_from_hex(hex: &str) -> Option<String> {
    let h = hex.strip_prefix('#')?;
    if h.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(h.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(h.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(h.get(4..6)?, 16).ok()?;
    Some(format!("\x1b[38;2;{};{};{}m", r, g, b))
}
