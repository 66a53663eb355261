/// Extra digits inspected when checking for an exact tie. Any f64 that is not
/// exactly on a tie shows a non-zero digit well within this window.
const TIE_DIGITS: usize = 25;

/// Fixed-point string with `decimals` places (`12.345` -> `"12.35"` for 2).
///
/// Exact ties round away from zero (`0.125` -> `"0.13"`, `2.5` -> `"3"`),
/// matching JavaScript's `toFixed`; `format!` alone would round them to even.
pub fn fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() || value == 0.0 {
        return format!("{:.*}", decimals, value);
    }

    let magnitude = value.abs();
    let exact = format!("{:.*}", decimals + TIE_DIGITS, magnitude);
    let tail = &exact[exact.len() - TIE_DIGITS..];
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{:.*}", decimals, value);
    }

    // Step one ulp past the tie so exact rounding picks the upper neighbour
    let above = f64::from_bits(magnitude.to_bits() + 1);
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{:.*}", sign, decimals, above)
}

/// Compact number for the results grid: `1.50M`, `12.35K`, `3.14`, `0.042`,
/// or exponent form for anything smaller.
pub fn format_number(num: f64) -> String {
    if num >= 1_000_000.0 {
        format!("{}M", fixed(num / 1_000_000.0, 2))
    } else if num >= 1000.0 {
        format!("{}K", fixed(num / 1000.0, 2))
    } else if num >= 1.0 {
        fixed(num, 2)
    } else if num >= 0.01 {
        fixed(num, 3)
    } else {
        format!("{:.2e}", num)
    }
}

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const BIT_UNITS: [&str; 5] = ["bits", "Kb", "Mb", "Gb", "Tb"];

/// Byte count scaled by 1024, with the decimal bit equivalent appended once
/// it reaches a kilobit: `100.00 MB (838.86 Mb)`.
pub fn format_file_size(bytes: f64) -> String {
    let mut size = bytes;
    let mut unit_index = 0;
    while size >= 1024.0 && unit_index < BYTE_UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    let mut bit_size = bytes * 8.0;
    let mut bit_unit_index = 0;
    while bit_size >= 1000.0 && bit_unit_index < BIT_UNITS.len() - 1 {
        bit_size /= 1000.0;
        bit_unit_index += 1;
    }

    if bit_unit_index > 0 {
        format!(
            "{} {} ({} {})",
            fixed(size, 2),
            BYTE_UNITS[unit_index],
            fixed(bit_size, 2),
            BIT_UNITS[bit_unit_index]
        )
    } else {
        format!("{} {}", fixed(size, 2), BYTE_UNITS[unit_index])
    }
}

/// Duration as `12.34 seconds`, `5m 3s` or `2h 15m`
pub fn format_time(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{} seconds", fixed(seconds, 2))
    } else if seconds < 3600.0 {
        let minutes = (seconds / 60.0).floor();
        let remaining = seconds % 60.0;
        format!("{}m {}s", minutes, fixed(remaining, 0))
    } else {
        let hours = (seconds / 3600.0).floor();
        let minutes = ((seconds % 3600.0) / 60.0).floor();
        format!("{}h {}m", hours, minutes)
    }
}
