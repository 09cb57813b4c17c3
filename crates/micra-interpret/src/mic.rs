//! MIC string parsing under CLSI notational conventions.

/// Lower bound of the physically plausible MIC range (µg/mL).
pub const PLAUSIBLE_MIN: f64 = 0.001;
/// Upper bound of the physically plausible MIC range (µg/mL).
pub const PLAUSIBLE_MAX: f64 = 1024.0;

enum Bound {
    Exact,
    Below,
    Above,
}

/// Parse a reported MIC value.
///
/// Tolerates leading `≤`/`≥`/`<=`/`>=`/`<`/`>` operators and
/// combination-drug notation (`"8/4"` reads as 8). An inclusive bound is
/// taken at face value; a strict `<X` is treated conservatively as `X/2`
/// and `>X` as `X*2`, since the true value is unknown but bounded.
///
/// Returns `None` for anything that does not contain a positive number.
pub fn parse(input: &str) -> Option<f64> {
    let s = input.trim();

    let (bound, rest) = if let Some(r) = s.strip_prefix('≤') {
        (Bound::Exact, r)
    } else if let Some(r) = s.strip_prefix('≥') {
        (Bound::Exact, r)
    } else if let Some(r) = s.strip_prefix("<=") {
        (Bound::Exact, r)
    } else if let Some(r) = s.strip_prefix(">=") {
        (Bound::Exact, r)
    } else if let Some(r) = s.strip_prefix('<') {
        (Bound::Below, r)
    } else if let Some(r) = s.strip_prefix('>') {
        (Bound::Above, r)
    } else {
        (Bound::Exact, s)
    };

    let first = rest.trim().split('/').next()?.trim();
    let value: f64 = first.parse().ok()?;
    if !value.is_finite() || value <= 0.0 {
        return None;
    }

    Some(match bound {
        Bound::Exact => value,
        Bound::Below => value / 2.0,
        Bound::Above => value * 2.0,
    })
}

/// Quality-control check: values outside the plausible range are flagged
/// without altering the interpretation.
pub fn plausibility_warning(value: f64) -> Option<String> {
    if value > PLAUSIBLE_MAX {
        Some(format!(
            "MIC {value} exceeds the plausible maximum of {PLAUSIBLE_MAX}; verify the reported value"
        ))
    } else if value < PLAUSIBLE_MIN {
        Some(format!(
            "MIC {value} is below the plausible minimum of {PLAUSIBLE_MIN}; verify the reported value"
        ))
    } else {
        None
    }
}
