//! Dimension annotation.
//!
//! Lays out parallel measurement lines stacked outward from the drawn
//! object's edge: horizontal dimensions below the object, vertical dimensions
//! to its left, each successive line one [`DimensionStyle::gap`] further out
//! so stacked dimensions never overlap.
//!
//! Spans with `to <= from` (or non-finite endpoints) render nothing and
//! consume no stacking slot. Duplicate spans are NOT deduplicated; they may
//! annotate different semantic aspects and simply stack.

use planokit_core::model::{Axis, Dimension};

use crate::config::DimensionStyle;
use crate::scene::{Color, Scene, Stroke, TextAnchor, TextItem};

/// Annotate both axes of a drawn object.
///
/// `(ox, oy)` is the top-left of the drawn object in sheet pixels, `drawn_h`
/// its drawn height (horizontal dimensions hang below the bottom edge),
/// `scale` the mm→px factor used to draw it.
pub fn annotate(
    scene: &mut Scene,
    dims: &[Dimension],
    ox: f64,
    oy: f64,
    drawn_h: f64,
    scale: f64,
    style: &DimensionStyle,
) {
    annotate_horizontal(scene, dims, ox, oy, drawn_h, scale, style);
    annotate_vertical(scene, dims, ox, oy, scale, style);
}

/// Horizontal dimensions, stacked below the object edge.
pub fn annotate_horizontal(
    scene: &mut Scene,
    dims: &[Dimension],
    ox: f64,
    oy: f64,
    drawn_h: f64,
    scale: f64,
    style: &DimensionStyle,
) {
    let drawable = dims
        .iter()
        .filter(|d| d.axis == Axis::Horizontal && d.is_drawable());
    for (i, dim) in drawable.enumerate() {
        let x1 = ox + dim.from * scale;
        let x2 = ox + dim.to * scale;
        let edge = oy + drawn_h;
        let cy = edge + style.stacked_offset(i);

        // Extension lines drop from the object edge past the span line.
        let ext = Stroke::dashed(Color::Dim, 0.6, "3,2");
        scene.line(x1, edge, x1, cy + 4.0, ext);
        scene.line(x2, edge, x2, cy + 4.0, ext);

        scene.arrow_line(x1 + 2.0, cy, x2 - 2.0, cy, Stroke::solid(Color::Dim, 0.9));

        let mid = (x1 + x2) / 2.0;
        scene.text(
            TextItem::new(mid, cy - 4.0, dim.label.clone(), style.label_size, Color::Dim)
                .anchored(TextAnchor::Middle)
                .bold(),
        );
        if let Some(caption) = &dim.description {
            scene.text(
                TextItem::new(mid, cy + 11.0, caption.clone(), style.caption_size, Color::Muted)
                    .anchored(TextAnchor::Middle),
            );
        }
    }
}

/// Vertical dimensions, stacked left of the object edge, labels rotated 90°.
pub fn annotate_vertical(
    scene: &mut Scene,
    dims: &[Dimension],
    ox: f64,
    oy: f64,
    scale: f64,
    style: &DimensionStyle,
) {
    let drawable = dims
        .iter()
        .filter(|d| d.axis == Axis::Vertical && d.is_drawable());
    for (i, dim) in drawable.enumerate() {
        let y1 = oy + dim.from * scale;
        let y2 = oy + dim.to * scale;
        let cx = ox - style.stacked_offset(i);

        let ext = Stroke::dashed(Color::Dim, 0.6, "3,2");
        scene.line(ox, y1, cx - 4.0, y1, ext);
        scene.line(ox, y2, cx - 4.0, y2, ext);

        scene.arrow_line(cx, y1 + 2.0, cx, y2 - 2.0, Stroke::solid(Color::Dim, 0.9));

        let mid = (y1 + y2) / 2.0;
        scene.text(
            TextItem::new(cx - 7.0, mid, dim.label.clone(), style.label_size, Color::Dim)
                .anchored(TextAnchor::Middle)
                .bold()
                .rotated(-90.0, cx - 7.0, mid),
        );
    }
}
