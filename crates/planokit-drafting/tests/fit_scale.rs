use planokit_drafting::{center_offsets, fit_scale, fit_scale_capped, FALLBACK_SCALE};
use proptest::prelude::*;

#[test]
fn assembly_view_fits_its_viewport() {
    // 1200x1800 mm front view in a 440x300 cell at margin factor 0.82.
    let scale = fit_scale(1200.0, 1800.0, 440.0, 300.0, 0.82);
    assert!((scale - 0.136_67).abs() < 1e-3, "scale was {}", scale);

    let drawn_w = 1200.0 * scale;
    let drawn_h = 1800.0 * scale;
    assert!((drawn_w - 164.0).abs() < 0.5);
    assert!((drawn_h - 246.0).abs() < 0.5);
    assert!(drawn_w <= 440.0);
    assert!(drawn_h <= 300.0);
}

#[test]
fn piece_front_face_scale_is_uncapped() {
    // 600x400 mm piece face in a 190x120 cell with a 30 mm margin per axis.
    let scale = fit_scale(600.0, 400.0, 160.0, 90.0, 1.0);
    assert!((scale - 0.225).abs() < 1e-9);
    assert!((600.0 * scale - 135.0).abs() < 1e-9);
    assert!((400.0 * scale - 90.0).abs() < 1e-9);
}

#[test]
fn degenerate_extents_fall_back() {
    assert_eq!(fit_scale(0.0, 1800.0, 440.0, 300.0, 0.82), FALLBACK_SCALE);
    assert_eq!(fit_scale(1200.0, 0.0, 440.0, 300.0, 0.82), FALLBACK_SCALE);
    assert_eq!(
        fit_scale(f64::INFINITY, 100.0, 440.0, 300.0, 0.82),
        FALLBACK_SCALE
    );
}

#[test]
fn capped_scale_never_exceeds_cap() {
    let scale = fit_scale_capped(120.0, 60.0, 160.0, 80.0, 1.0, 0.15);
    assert_eq!(scale, 0.15);
    // Large pieces are unaffected by the cap.
    let scale = fit_scale_capped(6000.0, 4000.0, 160.0, 80.0, 1.0, 0.15);
    assert!(scale < 0.15);
}

#[test]
fn centering_splits_leftover_space_evenly() {
    let (ox, oy) = center_offsets(164.0, 246.0, 440.0, 300.0);
    assert!((ox - 138.0).abs() < 1e-9);
    assert!((oy - 27.0).abs() < 1e-9);
}

proptest! {
    /// For any positive object and viewport, the scaled object never
    /// overflows the viewport (margin factor <= 1).
    #[test]
    fn scaled_object_never_overflows(
        w in 1.0f64..5000.0,
        h in 1.0f64..5000.0,
        vw in 50.0f64..2000.0,
        vh in 50.0f64..2000.0,
        margin in 0.5f64..1.0,
    ) {
        let scale = fit_scale(w, h, vw, vh, margin);
        prop_assert!(scale * w <= vw + 1e-9);
        prop_assert!(scale * h <= vh + 1e-9);
    }

    /// The centered object sits symmetrically in the viewport.
    #[test]
    fn centering_is_symmetric(
        w in 1.0f64..5000.0,
        h in 1.0f64..5000.0,
        vw in 50.0f64..2000.0,
        vh in 50.0f64..2000.0,
    ) {
        let scale = fit_scale(w, h, vw, vh, 0.82);
        let (ox, oy) = center_offsets(w * scale, h * scale, vw, vh);
        prop_assert!((ox * 2.0 + w * scale - vw).abs() < 1e-6);
        prop_assert!((oy * 2.0 + h * scale - vh).abs() < 1e-6);
    }
}
