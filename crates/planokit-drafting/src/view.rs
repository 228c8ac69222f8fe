//! Single orthographic view rendering.
//!
//! Draws one view (bounding frame, fitted object outline, named elements,
//! both dimension axes, caption) into a fixed cell of a sheet scene. The view
//! auto-scales independently of its neighbors, so unrelated aspect ratios
//! never distort each other.

use planokit_core::model::{Element, ElementKind, View};

use crate::config::DimensionStyle;
use crate::dimension;
use crate::fit::{center_offsets, fit_scale};
use crate::scene::{ellipsize, Color, Scene, Stroke, TextAnchor, TextItem};

/// Drawn element labels are omitted below this size so small parts stay
/// legible.
const LABEL_MIN_W: f64 = 36.0;
const LABEL_MIN_H: f64 = 16.0;
const LABEL_MAX_CHARS: usize = 14;

/// Render `view` into the cell at `(ox, oy)` of size `cell_w x cell_h`.
///
/// `gutter` is the cell space reserved per axis for dimension stacks;
/// `margin_factor` shrinks the fit inside what remains. Degenerate views
/// render a placeholder at the fallback scale instead of failing.
pub fn render_view(
    scene: &mut Scene,
    view: &View,
    ox: f64,
    oy: f64,
    cell_w: f64,
    cell_h: f64,
    label: &str,
    margin_factor: f64,
    gutter: f64,
    dims: &DimensionStyle,
) {
    // Cell frame.
    scene.rect(ox, oy, cell_w, cell_h, None, Some(Stroke::solid(Color::Frame, 0.7)));

    let scale = fit_scale(
        view.total_width,
        view.total_height,
        cell_w - gutter,
        cell_h - gutter,
        margin_factor,
    );
    let drawn_w = view.total_width.max(0.0) * scale;
    let drawn_h = view.total_height.max(0.0) * scale;
    let (cx, cy) = center_offsets(drawn_w, drawn_h, cell_w, cell_h);
    let x0 = ox + cx;
    let y0 = oy + cy;

    // Object bounding box.
    scene.rect(x0, y0, drawn_w, drawn_h, None, Some(Stroke::solid(Color::Line, 1.4)));

    render_elements(scene, &view.elements, x0, y0, scale);
    dimension::annotate(scene, &view.dimensions, x0, y0, drawn_h, scale, dims);

    scene.text(
        TextItem::new(ox + cell_w / 2.0, oy + cell_h - 6.0, label, 8.0, Color::Gold)
            .anchored(TextAnchor::Middle)
            .bold(),
    );
}

/// Render a list of elements scaled/offset consistently with their view.
/// Shared with the cross-section and construction-detail renderers.
pub(crate) fn render_elements(
    scene: &mut Scene,
    elements: &[Element],
    x0: f64,
    y0: f64,
    scale: f64,
) {
    for el in elements {
        let ex = x0 + el.x * scale;
        let ey = y0 + el.y * scale;
        let ew = (el.width * scale).max(1.0);
        let eh = (el.height * scale).max(1.0);

        let stroke = if el.kind == ElementKind::Mirror {
            Stroke::dashed(Color::Line, 0.9, "5,2")
        } else {
            Stroke::solid(Color::Line, 0.9)
        };
        scene.rect(ex, ey, ew, eh, Some(Color::ElementFill(el.kind)), Some(stroke));

        if ew > LABEL_MIN_W && eh > LABEL_MIN_H && !el.name.is_empty() {
            scene.text(
                TextItem::new(
                    ex + ew / 2.0,
                    ey + eh / 2.0 + 3.0,
                    ellipsize(&el.name, LABEL_MAX_CHARS),
                    7.0,
                    Color::Muted,
                )
                .anchored(TextAnchor::Middle),
            );
        }
    }
}
