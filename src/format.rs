//! Human-readable number formatting for resource and cost displays.

/// Suffixes for successive powers of 1000, up to decillions.
const SUFFIXES: &[&str] = &[
    "", "K", "M", "B", "T", "Qa", "Qi", "Sx", "Sp", "Oc", "No", "Dc",
];

/// Format a magnitude as an abbreviated string (e.g. 1_234_567 → "1.23M").
///
/// Values below 1000 are printed as-is; larger values are scaled to the
/// nearest power-of-1000 suffix with at most two decimal places, trailing
/// zeros trimmed.
pub fn format_number(num: f64) -> String {
    if num == 0.0 {
        return "0".to_string();
    }
    if num < 0.0 {
        return format!("-{}", format_number(-num));
    }

    let magnitude = (num.log10() / 3.0).floor().max(0.0) as usize;
    let magnitude = magnitude.min(SUFFIXES.len() - 1);
    let scaled = num / 10f64.powi(magnitude as i32 * 3);

    let formatted = if scaled == scaled.floor() {
        format!("{}", scaled as u64)
    } else {
        let s = format!("{scaled:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    };

    format!("{}{}", formatted, SUFFIXES[magnitude])
}
