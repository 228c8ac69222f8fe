//! Per-step assembly illustration.
//!
//! Draws the pieces selected by [`crate::associate`] as simple 2.5D boxes
//! (front face plus slanted top/side faces), a tick-dimension with the cut
//! size under each, and a dashed assembly arrow from the first piece to the
//! second. Purely illustrative; the geometry is not a projection.

use planokit_core::model::{AssemblyStep, Piece};
use planokit_core::units::format_mm;

use crate::associate::associate;
use crate::config::StepDiagramLayout;
use crate::fit::fit_scale_capped;
use crate::scene::{ellipsize, Color, Scene, Stroke, TextAnchor, TextItem};

pub fn compose_step_diagram(
    step: &AssemblyStep,
    pieces: &[Piece],
    layout: &StepDiagramLayout,
) -> Scene {
    let matched = associate(step, pieces);
    let mut scene = Scene::with_grid(layout.width, layout.height, layout.grid_step);

    // Faint center guide.
    scene.line(
        layout.width / 2.0,
        0.0,
        layout.width / 2.0,
        layout.height,
        Stroke::dashed(Color::Grid, 0.5, "4,4"),
    );

    let slots: &[(f64, f64)] = match matched.len() {
        0 => &[],
        1 => &[(120.0, 60.0)],
        2 => &[(60.0, 60.0), (300.0, 60.0)],
        _ => &[(30.0, 60.0), (200.0, 60.0), (370.0, 60.0)],
    };
    let slot_w = match matched.len() {
        1 => layout.slot_width_single,
        2 => layout.slot_width_pair,
        _ => layout.slot_width_triple,
    };

    for (i, piece) in matched.iter().enumerate() {
        let (x, y) = slots[i];
        let (w, h, d) = drawn_box(piece, slot_w, layout);
        render_piece_box(&mut scene, *piece, x, y, w, h, d, i as u8);
    }

    // Assembly arrow from the first piece to the second. The arrow anchors
    // use the pair slot width regardless of count.
    if matched.len() >= 2 {
        let (w0, h0, _) = drawn_box(matched[0], layout.slot_width_pair, layout);
        let (_, h1, _) = drawn_box(matched[1], layout.slot_width_pair, layout);
        let mid_y0 = slots[0].1 + h0 / 2.0;
        let mid_y1 = slots[1].1 + h1 / 2.0;
        render_arrow(
            &mut scene,
            slots[0].0 + w0 + 4.0,
            mid_y0,
            slots[1].0 - 8.0,
            mid_y1,
        );
    }

    // Step number watermark.
    scene.text(
        TextItem::new(
            layout.width - 10.0,
            layout.height - 8.0,
            format!("{:02}", step.number),
            28.0,
            Color::Grid,
        )
        .anchored(TextAnchor::End)
        .bold(),
    );

    scene
}

/// Drawn footprint of a piece in a slot: width, height and screen depth.
fn drawn_box(piece: &Piece, slot_w: f64, layout: &StepDiagramLayout) -> (f64, f64, f64) {
    let scale = fit_scale_capped(
        piece.length,
        piece.width,
        slot_w,
        layout.max_piece_height,
        1.0,
        layout.max_scale,
    );
    let w = (piece.length * scale).max(layout.min_drawn_width);
    let h = (piece.width * scale).max(layout.min_drawn_height);
    let d = (piece.thickness * scale * 3.0).max(6.0);
    (w, h, d)
}

fn render_piece_box(
    scene: &mut Scene,
    piece: &Piece,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    d: f64,
    index: u8,
) {
    let dp = (d * 0.4).min(20.0);
    let fill = Color::StepFill(index % 3);

    // Top face.
    scene.polygon(
        vec![(x, y), (x + w, y), (x + w + dp, y - dp), (x + dp, y - dp)],
        Some(fill),
        Some(Stroke::solid(Color::Line, 0.8)),
        0.7,
    );
    // Front face.
    scene.rect(x, y, w, h, Some(fill), Some(Stroke::solid(Color::Line, 1.0)));
    // Side face.
    scene.polygon(
        vec![
            (x + w, y),
            (x + w + dp, y - dp),
            (x + w + dp, y + h - dp),
            (x + w, y + h),
        ],
        Some(fill),
        Some(Stroke::solid(Color::Line, 0.8)),
        0.6,
    );

    if w > 30.0 && h > 14.0 {
        scene.text(
            TextItem::new(
                x + w / 2.0,
                y + h / 2.0 + 4.0,
                ellipsize(&piece.name, 10),
                8.0,
                Color::Label,
            )
            .anchored(TextAnchor::Middle)
            .bold(),
        );
    }

    // Cut-size dimension with end ticks.
    let dim = Stroke::solid(Color::Dim, 0.8);
    scene.line(x, y + h + 10.0, x + w, y + h + 10.0, dim);
    scene.line(x, y + h + 6.0, x, y + h + 14.0, dim);
    scene.line(x + w, y + h + 6.0, x + w, y + h + 14.0, dim);
    scene.text(
        TextItem::new(
            x + w / 2.0,
            y + h + 22.0,
            format!(
                "{}×{}×{}",
                format_mm(piece.length),
                format_mm(piece.width),
                format_mm(piece.thickness)
            ),
            7.0,
            Color::Dim,
        )
        .anchored(TextAnchor::Middle),
    );
}

/// Dashed gold arrow with a solid triangular head.
fn render_arrow(scene: &mut Scene, x1: f64, y1: f64, x2: f64, y2: f64) {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1.0 {
        return;
    }
    let ux = dx / len;
    let uy = dy / len;
    // Shaft stops where the head begins.
    let bx = x2 - 8.0 * ux;
    let by = y2 - 8.0 * uy;
    scene.line(x1, y1, bx, by, Stroke::dashed(Color::Gold, 1.5, "4,2"));
    // Perpendicular for the head base.
    let px = -uy;
    let py = ux;
    scene.polygon(
        vec![
            (x2, y2),
            (bx + 4.0 * px, by + 4.0 * py),
            (bx - 4.0 * px, by - 4.0 * py),
        ],
        Some(Color::Gold),
        None,
        1.0,
    );
}
