use planokit_core::model::{Axis, Dimension};
use planokit_drafting::dimension::annotate;
use planokit_drafting::{DimensionStyle, Scene};

fn dim(axis: Axis, from: f64, to: f64, label: &str) -> Dimension {
    Dimension {
        axis,
        from,
        to,
        label: label.to_string(),
        description: None,
    }
}

/// Y coordinates of the horizontal span lines (the arrowed ones), in order.
fn span_line_ys(scene: &Scene) -> Vec<f64> {
    scene
        .lines()
        .filter(|l| l.arrow_start && l.arrow_end && l.y1 == l.y2)
        .map(|l| l.y1)
        .collect()
}

#[test]
fn stacked_offsets_increase_by_the_fixed_gap() {
    let style = DimensionStyle::default();
    let dims: Vec<Dimension> = (0..5)
        .map(|i| dim(Axis::Horizontal, 0.0, 100.0 + i as f64, "x"))
        .collect();

    let mut scene = Scene::new(600.0, 600.0);
    annotate(&mut scene, &dims, 10.0, 10.0, 200.0, 1.0, &style);

    let ys = span_line_ys(&scene);
    assert_eq!(ys.len(), 5);
    for pair in ys.windows(2) {
        assert!(
            (pair[1] - pair[0] - style.gap).abs() < 1e-9,
            "offsets {:?} not spaced by {}",
            ys,
            style.gap
        );
    }
    // First line sits ext + lead beyond the object edge.
    assert!((ys[0] - (10.0 + 200.0 + style.ext + style.lead)).abs() < 1e-9);
}

#[test]
fn empty_dimension_list_draws_nothing() {
    let mut scene = Scene::new(600.0, 600.0);
    annotate(&mut scene, &[], 10.0, 10.0, 200.0, 1.0, &DimensionStyle::default());
    assert!(scene.items.is_empty());
}

#[test]
fn duplicate_spans_both_render_at_distinct_offsets() {
    // Two identical spans may annotate different semantic aspects; both stay.
    let dims = vec![
        dim(Axis::Horizontal, 0.0, 500.0, "500"),
        dim(Axis::Horizontal, 0.0, 500.0, "500"),
    ];
    let mut scene = Scene::new(600.0, 600.0);
    annotate(&mut scene, &dims, 0.0, 0.0, 100.0, 1.0, &DimensionStyle::default());

    let ys = span_line_ys(&scene);
    assert_eq!(ys.len(), 2);
    assert!(ys[0] != ys[1]);
}

#[test]
fn reversed_and_zero_spans_render_nothing_and_hold_no_slot() {
    let dims = vec![
        dim(Axis::Horizontal, 300.0, 100.0, "reversed"),
        dim(Axis::Horizontal, 100.0, 100.0, "zero"),
        dim(Axis::Horizontal, 0.0, 400.0, "400"),
    ];
    let mut scene = Scene::new(600.0, 600.0);
    let style = DimensionStyle::default();
    annotate(&mut scene, &dims, 0.0, 0.0, 100.0, 1.0, &style);

    let ys = span_line_ys(&scene);
    assert_eq!(ys.len(), 1);
    // The surviving dimension takes the first slot.
    assert!((ys[0] - (100.0 + style.stacked_offset(0))).abs() < 1e-9);
}

#[test]
fn vertical_labels_are_rotated() {
    let dims = vec![dim(Axis::Vertical, 0.0, 300.0, "300")];
    let mut scene = Scene::new(600.0, 600.0);
    annotate(&mut scene, &dims, 200.0, 10.0, 100.0, 1.0, &DimensionStyle::default());

    let label = scene.texts().find(|t| t.content == "300").unwrap();
    let rotation = label.rotation.expect("vertical label should be rotated");
    assert_eq!(rotation.degrees, -90.0);
    // Dimension line runs left of the object edge.
    assert!(label.x < 200.0);
}
