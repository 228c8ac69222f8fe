//! DXF serialization (R2000 / AC1015).
//!
//! Walks the drawing model directly — not the rendered scene — and emits a
//! minimal AutoCAD-compatible document in real millimeters: HEADER declaring
//! decimal mm units, a layer table, closed 4-vertex LWPOLYLINEs for every
//! rectangle, plain LINEs for dimension work, TEXT entities for labels, and
//! the EOF marker.
//!
//! The three views keep the same relative arrangement as the on-screen sheet:
//! front view at a base offset, side view to its right, top view below at the
//! bottom margin.
//!
//! Known quirk, kept on purpose: the model's Y axis grows downward (screen
//! convention) and is written as-is, while CAD viewers interpret Y upward, so
//! drawings may appear vertically mirrored versus the SVG export. The
//! upstream data has always been authored against this behavior.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use planokit_core::model::{DrawingModel, View};
use planokit_core::units::fmt_num;
use tracing::debug;

/// Layer table: name and AutoCAD color index per logical group.
const LAYERS: [(&str, u8); 6] = [
    ("FRONTAL", 7),
    ("LATERAL", 3),
    ("PLANTA", 4),
    ("COTAS", 1),
    ("TEXTO", 2),
    ("TITULO", 6),
];

/// Margin between views, in mm.
const MARGIN: f64 = 50.0;

/// Serialization options.
#[derive(Debug, Clone)]
pub struct DxfOptions {
    /// Date stamped into the title block. Explicit so output is
    /// deterministic; defaults to today.
    pub date: NaiveDate,
}

impl Default for DxfOptions {
    fn default() -> Self {
        Self {
            date: Local::now().date_naive(),
        }
    }
}

fn pairs(codes: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (code, value) in codes {
        out.push_str(code);
        out.push('\n');
        out.push_str(value);
        out.push('\n');
    }
    out.pop();
    out
}

fn header() -> String {
    pairs(&[
        ("0", "SECTION"),
        ("2", "HEADER"),
        ("9", "$ACADVER"),
        ("1", "AC1015"),
        ("9", "$INSUNITS"),
        ("70", "4"), // 4 = millimeters
        ("9", "$LUNITS"),
        ("70", "2"), // 2 = decimal
        ("9", "$LUPREC"),
        ("70", "2"),
        ("9", "$ANGBASE"),
        ("50", "0.0"),
        ("9", "$ANGDIR"),
        ("70", "0"),
        ("0", "ENDSEC"),
    ])
}

fn tables() -> String {
    let count = LAYERS.len().to_string();
    let mut out = pairs(&[
        ("0", "SECTION"),
        ("2", "TABLES"),
        ("0", "TABLE"),
        ("2", "LAYER"),
        ("70", &count),
    ]);
    for (name, color) in LAYERS {
        out.push('\n');
        out.push_str(&pairs(&[
            ("0", "LAYER"),
            ("2", name),
            ("70", "0"),
            ("62", &color.to_string()),
            ("6", "Continuous"),
        ]));
    }
    out.push('\n');
    out.push_str(&pairs(&[("0", "ENDTAB"), ("0", "ENDSEC")]));
    out
}

/// Closed 4-vertex LWPOLYLINE rectangle.
fn rect(layer: &str, x: f64, y: f64, w: f64, h: f64) -> String {
    pairs(&[
        ("0", "LWPOLYLINE"),
        ("8", layer),
        ("70", "1"), // closed
        ("90", "4"), // 4 vertices
        ("10", &fmt_num(x)),
        ("20", &fmt_num(y)),
        ("10", &fmt_num(x + w)),
        ("20", &fmt_num(y)),
        ("10", &fmt_num(x + w)),
        ("20", &fmt_num(y + h)),
        ("10", &fmt_num(x)),
        ("20", &fmt_num(y + h)),
    ])
}

fn line(layer: &str, x1: f64, y1: f64, x2: f64, y2: f64) -> String {
    pairs(&[
        ("0", "LINE"),
        ("8", layer),
        ("10", &fmt_num(x1)),
        ("20", &fmt_num(y1)),
        ("11", &fmt_num(x2)),
        ("21", &fmt_num(y2)),
    ])
}

/// Center-aligned TEXT entity.
fn text(layer: &str, x: f64, y: f64, height: f64, content: &str) -> String {
    pairs(&[
        ("0", "TEXT"),
        ("8", layer),
        ("10", &fmt_num(x)),
        ("20", &fmt_num(y)),
        ("40", &fmt_num(height)),
        ("1", content),
        ("72", "1"),
        ("11", &fmt_num(x)),
        ("21", &fmt_num(y)),
    ])
}

fn take_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Witness lines + span line + value text standing in for a real DIMENSION
/// entity.
fn linear_dim(layer: &str, x1: f64, y1: f64, x2: f64, y2: f64, dy: f64, value: &str) -> String {
    [
        line(layer, x1, y1, x1, y1 + dy),
        line(layer, x2, y2, x2, y2 + dy),
        line(layer, x1, y1 + dy, x2, y2 + dy),
        text(layer, (x1 + x2) / 2.0, y1 + dy + 2.0, 3.0, value),
    ]
    .join("\n")
}

/// Emit one view's entities at `(ox, oy)` on `layer`.
fn draw_view(entities: &mut Vec<String>, view: &View, ox: f64, oy: f64, layer: &str) {
    entities.push(rect(layer, ox, oy, view.total_width, view.total_height));

    for el in &view.elements {
        entities.push(rect(layer, ox + el.x, oy + el.y, el.width, el.height));
        if el.width > 20.0 && el.height > 10.0 && !el.name.is_empty() {
            let cx = ox + el.x + el.width / 2.0;
            let cy = oy + el.y + el.height / 2.0;
            entities.push(text("TEXTO", cx, cy, 3.0, &take_chars(&el.name, 20)));
        }
    }

    // Horizontal dimensions stacked below the view.
    let horizontal = view
        .dimensions_along(planokit_core::model::Axis::Horizontal)
        .filter(|d| d.is_drawable());
    for (i, dim) in horizontal.enumerate() {
        let dy = -15.0 - i as f64 * 12.0;
        entities.push(linear_dim(
            "COTAS",
            ox + dim.from,
            oy,
            ox + dim.to,
            oy,
            dy,
            &dim.label,
        ));
    }

    // Vertical dimensions stacked to the left.
    let vertical = view
        .dimensions_along(planokit_core::model::Axis::Vertical)
        .filter(|d| d.is_drawable());
    for (i, dim) in vertical.enumerate() {
        let dx = -15.0 - i as f64 * 12.0;
        entities.push(line("COTAS", ox, oy + dim.from, ox + dx - 2.0, oy + dim.from));
        entities.push(line("COTAS", ox, oy + dim.to, ox + dx - 2.0, oy + dim.to));
        entities.push(line("COTAS", ox + dx, oy + dim.from, ox + dx, oy + dim.to));
        entities.push(text(
            "COTAS",
            ox + dx - 8.0,
            oy + (dim.from + dim.to) / 2.0,
            3.0,
            &dim.label,
        ));
    }
}

fn extent_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(default)
}

/// Serialize the model as a DXF document.
///
/// Absent views are simply omitted; the document stays structurally valid
/// for any input.
pub fn export_dxf(model: &DrawingModel, options: &DxfOptions) -> String {
    let drawings = model.drawings.as_ref();
    let front = drawings.and_then(|d| d.front_view.as_ref());
    let side = drawings.and_then(|d| d.side_view.as_ref());
    let top = drawings.and_then(|d| d.top_view.as_ref());

    // Layout in mm: front above the top view, side to the right of the
    // front. Absent views still reserve their slot so the arrangement is
    // stable.
    let front_w = extent_or(front.map(|v| v.total_width), 1200.0);
    let side_w = extent_or(side.map(|v| v.total_width), 500.0);
    let top_w = extent_or(top.map(|v| v.total_width), 1200.0);
    let top_h = extent_or(top.map(|v| v.total_height), 500.0);

    let front_x = MARGIN + 80.0;
    let front_y = MARGIN + top_h + MARGIN;
    let side_x = front_x + front_w + MARGIN;
    let side_y = front_y;
    let top_x = front_x;
    let top_y = MARGIN;

    let mut entities: Vec<String> = Vec::new();

    if let Some(view) = front {
        draw_view(&mut entities, view, front_x, front_y, "FRONTAL");
        entities.push(text(
            "TEXTO",
            front_x + front_w / 2.0 - 20.0,
            front_y - 10.0,
            5.0,
            "VISTA FRONTAL",
        ));
    }
    if let Some(view) = side {
        draw_view(&mut entities, view, side_x, side_y, "LATERAL");
        entities.push(text(
            "TEXTO",
            side_x + side_w / 2.0 - 20.0,
            side_y - 10.0,
            5.0,
            "VISTA LATERAL DERECHA",
        ));
    }
    if let Some(view) = top {
        draw_view(&mut entities, view, top_x, top_y, "PLANTA");
        entities.push(text(
            "TEXTO",
            top_x + top_w / 2.0 - 20.0,
            top_y - 10.0,
            5.0,
            "VISTA SUPERIOR (PLANTA)",
        ));
    }

    // Title block, bottom right.
    let tb_x = front_x + front_w + MARGIN;
    let tb_y = MARGIN;
    let tb_w = 180.0;
    let tb_h = 60.0;
    entities.push(rect("TITULO", tb_x, tb_y, tb_w, tb_h));
    entities.push(line(
        "TITULO",
        tb_x,
        tb_y + tb_h * 0.55,
        tb_x + tb_w,
        tb_y + tb_h * 0.55,
    ));
    entities.push(line(
        "TITULO",
        tb_x + tb_w * 0.65,
        tb_y,
        tb_x + tb_w * 0.65,
        tb_y + tb_h,
    ));

    let title = if model.project.title.is_empty() {
        "PROYECTO".to_string()
    } else {
        take_chars(&model.project.title, 30)
    };
    let scale_label = drawings
        .map(|d| d.scale_or_default().to_string())
        .unwrap_or_else(|| "1:10".to_string());

    if !model.project.studio.is_empty() {
        entities.push(text(
            "TITULO",
            tb_x + 3.0,
            tb_y + tb_h - 8.0,
            4.5,
            &take_chars(&model.project.studio, 28),
        ));
    }
    entities.push(text(
        "TITULO",
        tb_x + 3.0,
        tb_y + tb_h * 0.55 + tb_h * 0.12,
        3.5,
        &title,
    ));
    entities.push(text(
        "TITULO",
        tb_x + 3.0,
        tb_y + 5.0,
        3.0,
        &format!("FOLIO: {}", model.project.folio),
    ));
    entities.push(text(
        "TITULO",
        tb_x + tb_w * 0.67,
        tb_y + tb_h - 8.0,
        3.0,
        &format!("ESCALA: {}", scale_label),
    ));
    entities.push(text(
        "TITULO",
        tb_x + tb_w * 0.67,
        tb_y + tb_h * 0.55 + tb_h * 0.12,
        3.0,
        "UNIDADES: mm",
    ));
    entities.push(text(
        "TITULO",
        tb_x + tb_w * 0.67,
        tb_y + 5.0,
        3.0,
        &options.date.format("%d/%m/%Y").to_string(),
    ));

    // Sheet notes next to the title block.
    if let Some(drawings) = drawings {
        for (i, note) in drawings.notes.iter().take(5).enumerate() {
            entities.push(text(
                "TEXTO",
                tb_x,
                tb_y + tb_h + 10.0 + i as f64 * 8.0,
                3.0,
                &format!("{}. {}", i + 1, note),
            ));
        }
    }

    debug!(entities = entities.len(), folio = %model.project.folio, "exporting DXF");

    let mut doc: Vec<String> = Vec::with_capacity(entities.len() + 5);
    doc.push(header());
    doc.push(tables());
    doc.push(pairs(&[("0", "SECTION"), ("2", "ENTITIES")]));
    doc.extend(entities);
    doc.push(pairs(&[("0", "ENDSEC")]));
    doc.push(pairs(&[("0", "EOF")]));
    doc.join("\n")
}

/// Download filename for the CAD export.
pub fn dxf_file_name(folio: &str) -> String {
    format!("{folio}-planos.dxf")
}

/// Write the DXF document under `dir`, returning the file path.
pub fn write_dxf(model: &DrawingModel, options: &DxfOptions, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(dxf_file_name(&model.project.folio));
    let dxf = export_dxf(model, options);
    fs::write(&path, dxf).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
