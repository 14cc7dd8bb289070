//! Display formatting shared by the renderers.

/// Format a power value in kW the way the API reports it: whole numbers
/// without a fractional part, others as-is.
pub fn format_kw(kw: f64) -> String {
    format!("{kw}")
}

/// Format a distance in metres as kilometres to one decimal place.
pub fn format_distance(meters: f64) -> String {
    format!("Distance: {}km", to_fixed_1(meters / 1000.0))
}

/// One fractional digit, rounded like `Number.prototype.toFixed(1)`.
///
/// `{:.1}` already rounds the exact binary value; the two differ only when
/// that value lies exactly halfway between two tenths, where `toFixed` rounds
/// away from zero and `{:.1}` rounds to even.
fn to_fixed_1(value: f64) -> String {
    let tenths = value * 10.0;
    let exact = value.mul_add(10.0, -tenths) == 0.0;
    if exact && tenths.fract().abs() == 0.5 {
        let rounded = tenths.trunc() + tenths.signum();
        return format!("{:.1}", rounded / 10.0);
    }
    format!("{value:.1}")
}
