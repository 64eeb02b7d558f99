//! Reynolds number derivation from raw form inputs.
//!
//! Invalid input is a representable outcome, not a failure: any unparseable
//! quantity, or a zero viscosity, yields the explicit marker string.

/// Marker emitted when the Reynolds number cannot be derived.
pub const NOT_CALCULATED: &str = "Not calculated (missing inputs).";

/// Derive `Re = rho * V * L / mu` from the four numeric strings and format
/// it as `~1.23e+5`, or return [`NOT_CALCULATED`].
pub fn reynolds_text(density: &str, velocity: &str, length: &str, viscosity: &str) -> String {
    let (Some(rho), Some(v), Some(l), Some(mu)) = (
        parse_quantity(density),
        parse_quantity(velocity),
        parse_quantity(length),
        parse_quantity(viscosity),
    ) else {
        return NOT_CALCULATED.to_string();
    };
    if mu == 0.0 {
        return NOT_CALCULATED.to_string();
    }
    let reynolds = rho * v * l / mu;
    if !reynolds.is_finite() {
        // overflow degrades to the marker like any other unusable input
        return NOT_CALCULATED.to_string();
    }
    format_scientific(reynolds)
}

fn parse_quantity(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Normalized scientific notation with two fractional digits and an explicit
/// exponent sign, e.g. `~9.96e+5`.
fn format_scientific(value: f64) -> String {
    if value == 0.0 {
        return "~0.00e+0".to_string();
    }
    let mut exponent = value.abs().log10().floor() as i32;
    let mut mantissa = value / 10f64.powi(exponent);
    // rounding to two digits can carry the mantissa to 10.00
    if format!("{:.2}", mantissa.abs()) == "10.00" {
        mantissa /= 10.0;
        exponent += 1;
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("~{:.2}e{}{}", mantissa, sign, exponent.abs())
}
