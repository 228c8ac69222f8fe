//! Sheet 2: per-piece breakdown.
//!
//! A 3-column grid of piece blocks, each showing three small orthographic
//! projections (front = length x width, side = thickness x width, top =
//! length x thickness) with per-face dimension callouts. Hole and groove
//! detail is projected onto the front face only.
//!
//! The sheet holds at most [`BreakdownLayout::max_pieces`] pieces; overflow
//! is dropped silently (there is no continuation sheet).

use planokit_core::model::{ElementKind, Piece, PieceDetail, ProjectMeta};
use planokit_core::units::format_mm;
use tracing::debug;

use crate::config::{BreakdownLayout, TitleLayout};
use crate::fit::fit_scale;
use crate::scene::{ellipsize, Color, Scene, Stroke, TextAnchor, TextItem};
use crate::title_block::{render_title_block, TitleBlockInfo};

pub fn compose_breakdown(
    pieces: &[Piece],
    details: &[PieceDetail],
    meta: &ProjectMeta,
    sheet: u32,
    total_sheets: u32,
    layout: &BreakdownLayout,
) -> Scene {
    let shown = &pieces[..pieces.len().min(layout.max_pieces)];
    if pieces.len() > shown.len() {
        debug!(
            shown = shown.len(),
            dropped = pieces.len() - shown.len(),
            "piece breakdown truncated to sheet capacity"
        );
    }

    let cols = layout.columns.max(1);
    let rows = shown.len().div_ceil(cols);
    let title = TitleLayout::default();
    let sheet_w = layout.pad * 2.0
        + cols as f64 * layout.cell_width
        + (cols as f64 - 1.0) * layout.cell_gap;
    let sheet_h = layout.pad * 2.0 + rows as f64 * layout.cell_height + title.height;

    let mut scene = Scene::with_grid(sheet_w, sheet_h, layout.grid_step);

    for (i, piece) in shown.iter().enumerate() {
        let col = i % cols;
        let row = i / cols;
        let ox = layout.pad + col as f64 * (layout.cell_width + layout.cell_gap);
        let oy = layout.pad + row as f64 * layout.cell_height;
        let detail = details.iter().find(|d| d.piece == piece.name);
        render_piece_block(&mut scene, piece, detail, ox, oy, layout);
    }

    render_title_block(
        &mut scene,
        0.0,
        sheet_h - title.height,
        sheet_w,
        &TitleBlockInfo {
            project: &meta.title,
            folio: &meta.folio,
            studio: &meta.studio,
            piece: None,
            scale_label: "VARIAS",
            sheet,
            total_sheets,
        },
        &title,
    );

    scene
}

/// One piece block: name/material header, bordered body, three projections.
fn render_piece_block(
    scene: &mut Scene,
    piece: &Piece,
    detail: Option<&PieceDetail>,
    ox: f64,
    oy: f64,
    layout: &BreakdownLayout,
) {
    let length = piece.length;
    let width = piece.width;
    let thickness = piece.thickness;

    // Each face fits its own cell independently.
    let face_w = layout.face_cell_width - layout.face_margin;
    let face_h = layout.face_cell_height - layout.face_margin;
    let sc_front = fit_scale(length, width, face_w, face_h, 1.0);
    let sc_side = fit_scale(
        thickness,
        width,
        layout.face_cell_width * layout.side_width_fraction,
        face_h,
        1.0,
    );
    let sc_top = fit_scale(
        length,
        thickness,
        face_w,
        layout.face_cell_height * layout.top_height_fraction,
        1.0,
    );

    let f_w = length.max(0.0) * sc_front;
    let f_h = width.max(0.0) * sc_front;
    let l_w = thickness.max(0.0) * sc_side;
    let l_h = width.max(0.0) * sc_side;
    let s_w = length.max(0.0) * sc_top;
    let s_h = thickness.max(0.0) * sc_top;

    let bx = ox;
    let by = oy + 18.0;

    // Header: piece name, quantity and material.
    scene.text(
        TextItem::new(bx + 4.0, oy + 13.0, ellipsize(&piece.name, 22), 8.5, Color::Gold).bold(),
    );
    scene.text(TextItem::new(
        bx + 4.0,
        oy + 24.0,
        format!("×{}  {}", piece.quantity, piece.material),
        6.5,
        Color::Muted,
    ));

    let block_w = layout.face_cell_width * 1.35 + layout.face_gap;
    let block_h = (f_h + s_h + 40.0).max(l_h + 30.0) + 30.0;
    scene.rect(
        bx,
        by,
        block_w,
        block_h,
        Some(Color::Bg),
        Some(Stroke::solid(Color::Frame, 0.6)),
    );

    // Front view: top-left of the block.
    let fx = bx + 4.0;
    let fy = by + 4.0;
    scene.rect(
        fx,
        fy,
        f_w,
        f_h,
        Some(Color::ElementFill(ElementKind::Panel)),
        Some(Stroke::solid(Color::Line, 1.0)),
    );
    if let Some(detail) = detail {
        render_front_face_detail(scene, detail, fx, fy, f_w, f_h, sc_front);
    }
    face_dim_h(scene, fx, fy + f_h + 8.0, f_w, &format_mm(length));
    face_dim_v(scene, fx - 8.0, fy, f_h, &format_mm(width));
    face_caption(scene, fx + f_w / 2.0, fy + f_h - 4.0, "FRONTAL");

    // Side view: right of the front.
    let lx = bx + layout.face_cell_width + layout.face_gap;
    let ly = by + 4.0;
    scene.rect(
        lx,
        ly,
        l_w,
        l_h,
        Some(Color::ElementFill(ElementKind::Panel)),
        Some(Stroke::solid(Color::Line, 1.0)),
    );
    face_dim_h(scene, lx, ly + l_h + 8.0, l_w, &format_mm(thickness));
    face_caption(scene, lx + l_w / 2.0, ly + l_h - 4.0, "LAT.");

    // Top view: below the front, drawn dashed (hidden face convention).
    let sx = bx + 4.0;
    let sy = by + f_h + 20.0;
    scene.rect(
        sx,
        sy,
        s_w,
        s_h,
        Some(Color::ElementFill(ElementKind::Base)),
        Some(Stroke::dashed(Color::Line, 1.0, "4,2")),
    );
    face_dim_h(scene, sx, sy + s_h + 7.0, s_w, &format_mm(length));
    face_dim_v(scene, sx - 7.0, sy, s_h, &format_mm(thickness));
    face_caption(scene, sx + s_w / 2.0, sy + (s_h - 2.0).max(6.0), "PLANTA");

    // Thickness tag above the side view.
    scene.text(TextItem::new(
        lx,
        fy - 4.0,
        format!("e={}mm", format_mm(thickness)),
        6.5,
        Color::Dim,
    ));

    // First edge-banding note, if any.
    if let Some(note) = detail.and_then(|d| d.edge_banding.first()) {
        scene.text(TextItem::new(
            bx + 4.0,
            by + block_h - 6.0,
            format!("▸ {}", ellipsize(note, 38)),
            6.0,
            Color::Muted,
        ));
    }
}

/// Holes as circles with crosshair centerlines, grooves as shaded notches.
/// Only the front face carries detail; positions clamp into the drawn face.
fn render_front_face_detail(
    scene: &mut Scene,
    detail: &PieceDetail,
    fx: f64,
    fy: f64,
    f_w: f64,
    f_h: f64,
    scale: f64,
) {
    for hole in &detail.holes {
        let ax = fx + (hole.x * scale).min(f_w - 4.0);
        let ay = fy + (hole.y * scale).min(f_h - 4.0);
        let r = (hole.diameter * scale / 2.0).max(2.0);
        scene.circle(ax, ay, r, None, Some(Stroke::solid(Color::Dim, 0.7)));
        let center = Stroke::dashed(Color::Center, 0.5, "3,2");
        scene.line(ax - r - 2.0, ay, ax + r + 2.0, ay, center);
        scene.line(ax, ay - r - 2.0, ax, ay + r + 2.0, center);
    }

    for groove in detail
        .grooves
        .iter()
        .filter(|g| g.orientation == planokit_core::model::GrooveOrientation::Horizontal)
    {
        let gx = fx + (groove.x * scale).min(f_w - 4.0);
        let g_len = (groove.length * scale).min(f_w - 4.0);
        let g_h = (groove.width * scale).max(1.5);
        scene.rect(
            gx,
            fy + f_h - g_h - 2.0,
            g_len,
            g_h,
            Some(Color::GrooveFill),
            Some(Stroke::dashed(Color::Dim, 0.6, "2,1")),
        );
    }
}

fn face_dim_h(scene: &mut Scene, x: f64, y: f64, span: f64, label: &str) {
    scene.arrow_line(x, y, x + span, y, Stroke::solid(Color::Dim, 0.7));
    scene.text(
        TextItem::new(x + span / 2.0, y - 2.0, label, 6.5, Color::Dim)
            .anchored(TextAnchor::Middle)
            .bold(),
    );
}

fn face_dim_v(scene: &mut Scene, x: f64, y: f64, span: f64, label: &str) {
    scene.arrow_line(x, y, x, y + span, Stroke::solid(Color::Dim, 0.7));
    let mid = y + span / 2.0;
    scene.text(
        TextItem::new(x - 6.0, mid, label, 6.5, Color::Dim)
            .anchored(TextAnchor::Middle)
            .bold()
            .rotated(-90.0, x - 6.0, mid),
    );
}

fn face_caption(scene: &mut Scene, x: f64, y: f64, caption: &str) {
    scene.text(TextItem::new(x, y, caption, 6.0, Color::Muted).anchored(TextAnchor::Middle));
}
