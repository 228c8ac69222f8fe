//! Viewport-fit math.
//!
//! Pure functions mapping real-world millimeter extents into a bounded
//! drawing viewport: uniform scale, centering, clamping. Everything that
//! draws an object inside a fixed cell goes through these, so the
//! no-overflow and centering guarantees hold engine-wide.

/// Scale substituted when an object has no usable extents, so degenerate
/// input degrades to a tiny placeholder instead of NaN/Infinity coordinates.
pub const FALLBACK_SCALE: f64 = 0.1;

/// Uniform scale fitting an `object_w x object_h` mm object into a
/// `viewport_w x viewport_h` px viewport, shrunk by `margin_factor`
/// (1.0 = fill the viewport exactly).
///
/// Zero, negative or non-finite object extents yield [`FALLBACK_SCALE`].
pub fn fit_scale(
    object_w: f64,
    object_h: f64,
    viewport_w: f64,
    viewport_h: f64,
    margin_factor: f64,
) -> f64 {
    if !(object_w.is_finite() && object_w > 0.0 && object_h.is_finite() && object_h > 0.0) {
        return FALLBACK_SCALE;
    }
    (viewport_w / object_w).min(viewport_h / object_h) * margin_factor
}

/// [`fit_scale`] with an upper clamp, so very small objects are not blown up
/// to a distorting size (step-diagram pieces cap at 0.15).
pub fn fit_scale_capped(
    object_w: f64,
    object_h: f64,
    viewport_w: f64,
    viewport_h: f64,
    margin_factor: f64,
    max_scale: f64,
) -> f64 {
    fit_scale(object_w, object_h, viewport_w, viewport_h, margin_factor).min(max_scale)
}

/// Offsets centering a drawn `drawn_w x drawn_h` object inside the viewport.
pub fn center_offsets(drawn_w: f64, drawn_h: f64, viewport_w: f64, viewport_h: f64) -> (f64, f64) {
    let ox = if drawn_w.is_finite() {
        (viewport_w - drawn_w) / 2.0
    } else {
        0.0
    };
    let oy = if drawn_h.is_finite() {
        (viewport_h - drawn_h) / 2.0
    } else {
        0.0
    };
    (ox, oy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_on_degenerate_extents() {
        assert_eq!(fit_scale(0.0, 100.0, 400.0, 300.0, 0.82), FALLBACK_SCALE);
        assert_eq!(fit_scale(100.0, -5.0, 400.0, 300.0, 0.82), FALLBACK_SCALE);
        assert_eq!(fit_scale(f64::NAN, 100.0, 400.0, 300.0, 0.82), FALLBACK_SCALE);
    }

    #[test]
    fn cap_applies_after_fit() {
        // A tiny piece would fit at a huge scale; the cap wins.
        let scale = fit_scale_capped(40.0, 20.0, 160.0, 80.0, 1.0, 0.15);
        assert_eq!(scale, 0.15);
    }
}
