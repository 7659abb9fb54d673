/// Formats a number the way a browser prints it (`Number.prototype.toString`).
///
/// Shortest round-trip digits, plain notation for `1e-6 <= |v| < 1e21` and
/// exponent notation with an explicit sign otherwise (`1e+21`, `1.5e-7`).
/// `-0` prints as `0`; non-finite values print as `NaN` / `Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    // `{:e}` already yields shortest digits ("1.5e-7", "1e21"); only the sign differs
    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exp,
    }
}
