//! Slider ⇄ numeric-entry synchronization.
//!
//! Each measurement has a free-form entry and a range slider. Moving the
//! slider copies its value into the entry; typing a number into the entry
//! clamps it into the slider. Anything that does not parse leaves the slider
//! alone and skips the illustration refresh until a number shows up.
//!
//! Parsing is deliberately lenient: the longest numeric prefix wins, so
//! `"12cm"` reads as 12, matching how browsers coerce form input.

#[cfg(test)]
#[path = "input_sync_test.rs"]
mod input_sync_test;

use crate::state::measurements::FieldControl;

/// Whether an input event should trigger an illustration refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    Refresh,
    Skip,
}

/// Slider moved: mirror the value into the entry field.
pub fn apply_slider_input(control: &mut FieldControl, raw: &str) -> SyncOutcome {
    let Some(value) = parse_float_lenient(raw) else {
        return SyncOutcome::Skip;
    };
    control.slider = control.bounds.clamp(value);
    control.entry = raw.trim().to_owned();
    SyncOutcome::Refresh
}

/// Entry edited: keep the raw text, clamp a parsed number into the slider.
pub fn apply_entry_input(control: &mut FieldControl, raw: &str) -> SyncOutcome {
    control.entry = raw.to_owned();
    if raw.is_empty() {
        return SyncOutcome::Skip;
    }
    match parse_float_lenient(raw) {
        Some(value) => {
            control.slider = control.bounds.clamp(value);
            SyncOutcome::Refresh
        }
        None => SyncOutcome::Skip,
    }
}

/// Parse the longest leading decimal number (`parseFloat` rules).
///
/// Leading whitespace is skipped; an optional sign, digits with an optional
/// fraction, and an optional exponent are accepted. `Infinity` is honored.
pub fn parse_float_lenient(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(if bytes.first() == Some(&b'-') { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parse the longest leading base-10 integer (`parseInt` rules).
///
/// Saturates instead of overflowing on absurdly long digit runs.
pub fn parse_int_lenient(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in rest.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}
