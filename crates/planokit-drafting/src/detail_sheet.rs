//! Sheet 3: cross-sections and construction details.
//!
//! Two stacked rows: row A holds up to three joint cross-sections with
//! cut-line markers, row B up to four construction-detail close-ups with
//! tolerance and tool captions. Every item fits its own local scale,
//! independent of its neighbors.

use planokit_core::model::{ConstructionDetail, CrossSection, Element, ProjectMeta};
use tracing::debug;

use crate::config::{DetailLayout, TitleLayout};
use crate::dimension;
use crate::fit::fit_scale;
use crate::scene::{ellipsize, Color, Scene, Stroke, TextAnchor, TextItem};
use crate::title_block::{render_title_block, TitleBlockInfo};
use crate::view::render_elements;

pub fn compose_details(
    sections: &[CrossSection],
    details: &[ConstructionDetail],
    meta: &ProjectMeta,
    sheet: u32,
    total_sheets: u32,
    layout: &DetailLayout,
) -> Scene {
    let sections = &sections[..sections.len().min(layout.max_sections)];
    let details = &details[..details.len().min(layout.max_details)];
    debug!(
        sections = sections.len(),
        details = details.len(),
        "composed joint-details sheet"
    );

    let title = TitleLayout::default();
    let sheet_w = layout.sheet_width;
    let details_y = layout.top + layout.section_height + 36.0;
    let sheet_h = details_y + layout.detail_height + title.height + layout.bottom_pad;

    let mut scene = Scene::with_grid(sheet_w, sheet_h, layout.grid_step);

    // Row A header.
    scene.text(
        TextItem::new(layout.pad, 18.0, "A ── CORTES TRANSVERSALES", 9.0, Color::Gold).bold(),
    );
    scene.line(
        layout.pad,
        22.0,
        sheet_w - layout.pad,
        22.0,
        Stroke::dashed(Color::Cut, 0.6, "4,3"),
    );

    let section_w = (sheet_w - layout.pad * 2.0) / sections.len().max(1) as f64;
    for (i, section) in sections.iter().enumerate() {
        render_cross_section(
            &mut scene,
            section,
            layout.pad + i as f64 * (section_w + 4.0),
            layout.top,
            section_w - 4.0,
            layout.section_height,
            layout,
        );
    }

    // Row B header.
    let header_y = layout.top + layout.section_height + 24.0;
    scene.text(
        TextItem::new(layout.pad, header_y, "B ── DETALLES CONSTRUCTIVOS", 9.0, Color::Dim).bold(),
    );
    scene.line(
        layout.pad,
        header_y + 4.0,
        sheet_w - layout.pad,
        header_y + 4.0,
        Stroke::dashed(Color::Dim, 0.6, "4,3"),
    );

    let detail_w = (sheet_w - layout.pad * 2.0) / details.len().max(1) as f64;
    for (i, detail) in details.iter().enumerate() {
        render_construction_detail(
            &mut scene,
            detail,
            layout.pad + i as f64 * (detail_w + 4.0),
            details_y,
            detail_w - 4.0,
            layout.detail_height,
            layout,
        );
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

/// Object-space extents of a mini-view's element list, with a floor so empty
/// lists still produce a sane local scale.
fn local_extents(elements: &[Element], floor: f64) -> (f64, f64) {
    let max_x = elements
        .iter()
        .map(|e| e.x + e.width)
        .fold(floor, f64::max);
    let max_y = elements
        .iter()
        .map(|e| e.y + e.height)
        .fold(floor, f64::max);
    (max_x, max_y)
}

fn render_header_band(scene: &mut Scene, ox: f64, oy: f64, w: f64, text: TextItem) {
    scene.rect(ox, oy - 16.0, w, 16.0, Some(Color::Surface), None);
    scene.text(text);
}

fn render_cross_section(
    scene: &mut Scene,
    section: &CrossSection,
    ox: f64,
    oy: f64,
    w: f64,
    h: f64,
    layout: &DetailLayout,
) {
    render_header_band(
        scene,
        ox,
        oy,
        w,
        TextItem::new(
            ox + 5.0,
            oy - 4.0,
            format!("[{}] {}", section.id, section.name),
            8.0,
            Color::Gold,
        )
        .bold(),
    );
    let scale_label = if section.scale_label.is_empty() {
        "1:2"
    } else {
        section.scale_label.as_str()
    };
    scene.text(
        TextItem::new(
            ox + w - 5.0,
            oy - 4.0,
            format!("Escala {}", scale_label),
            7.0,
            Color::Muted,
        )
        .anchored(TextAnchor::End),
    );

    scene.rect(ox, oy, w, h, Some(Color::Bg), Some(Stroke::solid(Color::Frame, 0.7)));

    let (max_x, max_y) = local_extents(&section.elements, 100.0);
    let scale = fit_scale(max_x, max_y, w - 40.0, h - 60.0, layout.margin_factor);
    let drawn_w = max_x * scale;
    let drawn_h = max_y * scale;
    let x0 = ox + (w - drawn_w) / 2.0;
    let y0 = oy + 20.0;

    render_elements(scene, &section.elements, x0, y0, scale);
    dimension::annotate(scene, &section.dimensions, x0, y0, drawn_h, scale, &layout.dims);

    // Cut-line markers at the view edges.
    let cut = Stroke::dashed(Color::Cut, 0.8, "6,3,1,3");
    let mid = y0 + drawn_h / 2.0;
    scene.line(ox, mid, x0 - 4.0, mid, cut);
    scene.line(x0 + drawn_w + 4.0, mid, ox + w, mid, cut);

    for (i, note) in section.notes.iter().enumerate() {
        scene.text(TextItem::new(
            ox + 5.0,
            oy + h - 6.0 - i as f64 * 11.0,
            format!("▸ {}", note),
            6.5,
            Color::Muted,
        ));
    }

    if !section.description.is_empty() {
        scene.text(
            TextItem::new(
                ox + w / 2.0,
                oy + h - 4.0,
                ellipsize(&section.description, 55),
                7.0,
                Color::Dim,
            )
            .anchored(TextAnchor::Middle),
        );
    }
}

fn render_construction_detail(
    scene: &mut Scene,
    detail: &ConstructionDetail,
    ox: f64,
    oy: f64,
    w: f64,
    h: f64,
    layout: &DetailLayout,
) {
    render_header_band(
        scene,
        ox,
        oy,
        w,
        TextItem::new(
            ox + 5.0,
            oy - 4.0,
            format!("[{}] {}", detail.id, detail.name),
            8.0,
            Color::Dim,
        )
        .bold(),
    );

    scene.rect(ox, oy, w, h, Some(Color::Bg), Some(Stroke::solid(Color::Frame, 0.7)));

    let (max_x, max_y) = local_extents(&detail.elements, 80.0);
    let scale = fit_scale(max_x, max_y, w - 40.0, h - 70.0, layout.margin_factor);
    let drawn_h = max_y * scale;
    let x0 = ox + (w - max_x * scale) / 2.0;
    let y0 = oy + 22.0;

    render_elements(scene, &detail.elements, x0, y0, scale);
    dimension::annotate(scene, &detail.dimensions, x0, y0, drawn_h, scale, &layout.dims);

    if !detail.description.is_empty() {
        scene.text(TextItem::new(
            ox + 5.0,
            oy + h - 28.0,
            ellipsize(&detail.description, 48),
            7.0,
            Color::Muted,
        ));
    }
    if let Some(tolerance) = &detail.tolerance {
        scene.text(TextItem::new(
            ox + 5.0,
            oy + h - 16.0,
            format!("TOL: {}", tolerance),
            6.5,
            Color::Dim,
        ));
    }
    if !detail.tools.is_empty() {
        scene.text(TextItem::new(
            ox + 5.0,
            oy + h - 5.0,
            ellipsize(&detail.tools.join(" · "), 60),
            6.0,
            Color::Muted,
        ));
    }
}
