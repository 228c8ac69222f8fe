//! Sheet 1: general assembly.
//!
//! Front, side and top views side by side in fixed-width columns, shared
//! notes below, one title block. Each view auto-scales independently; an
//! absent view leaves its column empty without shifting the others.

use planokit_core::model::{Drawings, ProjectMeta};
use tracing::debug;

use crate::config::{AssemblyLayout, TitleLayout};
use crate::scene::{Color, Scene, TextItem};
use crate::title_block::{render_title_block, TitleBlockInfo};
use crate::view::render_view;

pub fn compose_assembly(
    drawings: &Drawings,
    meta: &ProjectMeta,
    sheet: u32,
    total_sheets: u32,
    layout: &AssemblyLayout,
) -> Scene {
    let mut scene = Scene::with_grid(layout.sheet_width, layout.sheet_height, layout.grid_step);

    let front_x = layout.pad_left;
    let side_x = front_x + layout.front_width + layout.column_gap;
    let top_x = side_x + layout.side_width + layout.column_gap;

    let mut present = 0;
    if let Some(view) = &drawings.front_view {
        present += 1;
        render_view(
            &mut scene,
            view,
            front_x,
            layout.pad_top,
            layout.front_width,
            layout.view_height,
            "VISTA FRONTAL",
            layout.margin_factor,
            layout.dimension_gutter,
            &layout.dims,
        );
    }
    if let Some(view) = &drawings.side_view {
        present += 1;
        render_view(
            &mut scene,
            view,
            side_x,
            layout.pad_top,
            layout.side_width,
            layout.view_height,
            "VISTA LATERAL DERECHA",
            layout.margin_factor,
            layout.dimension_gutter,
            &layout.dims,
        );
    }
    if let Some(view) = &drawings.top_view {
        present += 1;
        render_view(
            &mut scene,
            view,
            top_x,
            layout.pad_top,
            layout.top_width,
            layout.view_height,
            "VISTA SUPERIOR / PLANTA",
            layout.margin_factor,
            layout.dimension_gutter,
            &layout.dims,
        );
    }
    debug!(views = present, notes = drawings.notes.len(), "composed assembly sheet");

    let notes_y = layout.view_height + layout.pad_top + 36.0;
    for (i, note) in drawings.notes.iter().take(layout.max_notes).enumerate() {
        scene.text(TextItem::new(
            layout.pad_left,
            notes_y + i as f64 * 14.0,
            format!("{}. {}", i + 1, note),
            8.0,
            Color::Muted,
        ));
    }

    let title = TitleLayout::default();
    render_title_block(
        &mut scene,
        0.0,
        layout.sheet_height - title.height,
        layout.sheet_width,
        &TitleBlockInfo {
            project: &meta.title,
            folio: &meta.folio,
            studio: &meta.studio,
            piece: None,
            scale_label: drawings.scale_or_default(),
            sheet,
            total_sheets,
        },
        &title,
    );

    scene
}
