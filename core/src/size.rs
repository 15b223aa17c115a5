//! Human-readable byte sizes ("500 B", "12.3 KB").

use crate::locale::Locale;

const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const BASE: f64 = 1024.0;

/// Formats a byte count with base-1024 units.
///
/// At most two decimals are kept and trailing zeros are dropped, so
/// 1024 bytes is `"1 KB"` and 1536 bytes is `"1.5 KB"` (`"1,5 KB"` in pt-BR).
pub fn readable_size(bytes: u64, locale: Locale) -> String {
    if bytes == 0 {
        return format!("0 {}", UNITS[0]);
    }

    let mut exponent = 0;
    let mut whole = bytes;
    while whole >= 1024 && exponent < UNITS.len() - 1 {
        whole /= 1024;
        exponent += 1;
    }
    let mut value = round2(bytes as f64 / BASE.powi(exponent as i32));

    // 1023.999 KB rounds up to the next unit
    if value >= BASE && exponent < UNITS.len() - 1 {
        value = round2(value / BASE);
        exponent += 1;
    }

    let number = format!("{:.2}", value);
    let number = number.trim_end_matches('0').trim_end_matches('.');
    let number = match locale.decimal_separator() {
        '.' => number.to_string(),
        sep => number.replace('.', &sep.to_string()),
    };

    format!("{} {}", number, UNITS[exponent])
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
