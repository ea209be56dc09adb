//! Shared numeric helpers for chart calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}

/// Round to one decimal place, half away from zero.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Make a provider longitude usable: missing or non-finite becomes 0,
/// everything else is wrapped into [0, 360).
pub fn sanitize_longitude(lon: Option<f64>) -> f64 {
    match lon {
        Some(v) if v.is_finite() => normalize_360(v),
        Some(v) => {
            tracing::warn!(target: "kundali::input", longitude = %v, "non-finite longitude, using 0");
            0.0
        }
        None => 0.0,
    }
}
