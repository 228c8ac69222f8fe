//! SVG serialization.
//!
//! A thin adapter over the drafting scene graph: the exported file is built
//! from the same composed scenes as the on-screen document, so it visually
//! matches the live view by construction. One self-contained document per
//! sheet scene; [`export_svg`] stacks every present sheet into the single
//! downloadable file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use planokit_core::model::DrawingModel;
use planokit_core::units::fmt_num;
use planokit_drafting::scene::{Color, Item, Scene, Stroke, TextAnchor};
use planokit_drafting::{
    compose_assembly, compose_breakdown, compose_details, AssemblyLayout, BreakdownLayout,
    DetailLayout,
};
use tracing::debug;

/// Vertical spacing between stacked sheets in the combined document.
const SHEET_GAP: f64 = 24.0;

fn hex(color: Color) -> &'static str {
    use planokit_core::model::ElementKind::*;
    match color {
        Color::Bg => "#0D1117",
        Color::Surface => "#161B22",
        Color::Grid => "#1C2128",
        Color::Frame => "#30363D",
        Color::Line => "#C0C8D2",
        Color::Dim => "#58A6FF",
        Color::Gold => "#F5B800",
        Color::Muted => "#8B949E",
        Color::Label => "#E6EDF3",
        Color::Cut => "#FF6B6B",
        Color::Center => "#3FB950",
        Color::GrooveFill => "#0A0A0A",
        Color::ElementFill(kind) => match kind {
            Panel => "#1A2F1A",
            Base => "#2D2A1A",
            Drawer => "#1A2F45",
            Mirror => "#1A2535",
            Structure => "#2D1B1B",
            Joint => "#2A1F2A",
            Other => "#1C2128",
        },
        Color::StepFill(i) => match i % 3 {
            0 => "#1C2A1C",
            1 => "#1A2535",
            _ => "#2D1F1F",
        },
    }
}

/// Escape text content for XML.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut attrs = format!(
        " stroke=\"{}\" stroke-width=\"{}\"",
        hex(stroke.color),
        fmt_num(stroke.width)
    );
    if let Some(dash) = stroke.dash {
        attrs.push_str(&format!(" stroke-dasharray=\"{}\"", dash));
    }
    attrs
}

fn fill_attr(fill: Option<Color>) -> String {
    match fill {
        Some(color) => format!(" fill=\"{}\"", hex(color)),
        None => " fill=\"none\"".to_string(),
    }
}

/// Serialize one scene as a self-contained SVG document.
pub fn scene_to_svg(scene: &Scene) -> String {
    let w = fmt_num(scene.width);
    let h = fmt_num(scene.height);
    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
    ));

    // Arrowhead markers for dimension lines, plus the background grid.
    svg.push_str("<defs>\n");
    svg.push_str(&format!(
        "<marker id=\"arr\" markerWidth=\"6\" markerHeight=\"6\" refX=\"3\" refY=\"3\" orient=\"auto\"><path d=\"M0,0 L6,3 L0,6 Z\" fill=\"{}\"/></marker>\n",
        hex(Color::Dim)
    ));
    svg.push_str(&format!(
        "<marker id=\"arr-rev\" markerWidth=\"6\" markerHeight=\"6\" refX=\"3\" refY=\"3\" orient=\"auto-start-reverse\"><path d=\"M0,0 L6,3 L0,6 Z\" fill=\"{}\"/></marker>\n",
        hex(Color::Dim)
    ));
    if let Some(step) = scene.grid_step {
        let step = fmt_num(step);
        svg.push_str(&format!(
            "<pattern id=\"grid\" width=\"{step}\" height=\"{step}\" patternUnits=\"userSpaceOnUse\"><path d=\"M {step} 0 L 0 0 0 {step}\" fill=\"none\" stroke=\"#161B22\" stroke-width=\"0.5\"/></pattern>\n"
        ));
    }
    svg.push_str("</defs>\n");

    svg.push_str(&format!(
        "<rect width=\"{w}\" height=\"{h}\" fill=\"{}\"/>\n",
        hex(Color::Bg)
    ));
    if scene.grid_step.is_some() {
        svg.push_str(&format!(
            "<rect width=\"{w}\" height=\"{h}\" fill=\"url(#grid)\"/>\n"
        ));
    }

    for item in &scene.items {
        push_item(&mut svg, item);
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_item(svg: &mut String, item: &Item) {
    match item {
        Item::Rect(r) => {
            svg.push_str(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}{}/>\n",
                fmt_num(r.x),
                fmt_num(r.y),
                fmt_num(r.width.max(0.0)),
                fmt_num(r.height.max(0.0)),
                fill_attr(r.fill),
                r.stroke.as_ref().map(stroke_attrs).unwrap_or_default(),
            ));
        }
        Item::Line(l) => {
            let mut attrs = stroke_attrs(&l.stroke);
            if l.arrow_start {
                attrs.push_str(" marker-start=\"url(#arr-rev)\"");
            }
            if l.arrow_end {
                attrs.push_str(" marker-end=\"url(#arr)\"");
            }
            svg.push_str(&format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>\n",
                fmt_num(l.x1),
                fmt_num(l.y1),
                fmt_num(l.x2),
                fmt_num(l.y2),
                attrs,
            ));
        }
        Item::Circle(c) => {
            svg.push_str(&format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}{}/>\n",
                fmt_num(c.cx),
                fmt_num(c.cy),
                fmt_num(c.r.max(0.0)),
                fill_attr(c.fill),
                c.stroke.as_ref().map(stroke_attrs).unwrap_or_default(),
            ));
        }
        Item::Polygon(p) => {
            let points: Vec<String> = p
                .points
                .iter()
                .map(|(x, y)| format!("{},{}", fmt_num(*x), fmt_num(*y)))
                .collect();
            let opacity = if p.opacity < 1.0 {
                format!(" opacity=\"{}\"", fmt_num(p.opacity))
            } else {
                String::new()
            };
            svg.push_str(&format!(
                "<polygon points=\"{}\"{}{}{}/>\n",
                points.join(" "),
                fill_attr(p.fill),
                p.stroke.as_ref().map(stroke_attrs).unwrap_or_default(),
                opacity,
            ));
        }
        Item::Text(t) => {
            let anchor = match t.anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let mut attrs = format!(
                " font-family=\"monospace\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\"",
                fmt_num(t.size),
                hex(t.color),
                anchor,
            );
            if t.bold {
                attrs.push_str(" font-weight=\"700\"");
            }
            if let Some(rot) = &t.rotation {
                attrs.push_str(&format!(
                    " transform=\"rotate({} {} {})\"",
                    fmt_num(rot.degrees),
                    fmt_num(rot.cx),
                    fmt_num(rot.cy),
                ));
            }
            svg.push_str(&format!(
                "<text x=\"{}\" y=\"{}\"{}>{}</text>\n",
                fmt_num(t.x),
                fmt_num(t.y),
                attrs,
                escape(&t.content),
            ));
        }
    }
}

/// Compose every present sheet of the model, in sheet order.
pub fn compose_sheets(model: &DrawingModel) -> Vec<Scene> {
    let total = model.sheet_count();
    let mut sheet = 0;
    let mut scenes = Vec::new();
    if let Some(drawings) = &model.drawings {
        sheet += 1;
        scenes.push(compose_assembly(
            drawings,
            &model.project,
            sheet,
            total,
            &AssemblyLayout::default(),
        ));
    }
    if model.has_breakdown() {
        sheet += 1;
        scenes.push(compose_breakdown(
            &model.pieces,
            &model.piece_details,
            &model.project,
            sheet,
            total,
            &BreakdownLayout::default(),
        ));
    }
    if model.has_details() {
        sheet += 1;
        scenes.push(compose_details(
            &model.cross_sections,
            &model.construction_details,
            &model.project,
            sheet,
            total,
            &DetailLayout::default(),
        ));
    }
    scenes
}

/// Serialize the whole model as one SVG document, sheets stacked vertically.
/// A model with no present sheet still yields a small valid document.
pub fn export_svg(model: &DrawingModel) -> String {
    let scenes = compose_sheets(model);
    debug!(sheets = scenes.len(), folio = %model.project.folio, "exporting SVG");

    let mut combined = Scene::new(0.0, 0.0);
    combined.grid_step = Some(16.0);
    let mut y = 0.0;
    for scene in scenes {
        let height = scene.height;
        combined.merge_translated(scene, 0.0, y);
        y += height + SHEET_GAP;
    }
    if combined.width == 0.0 {
        // Nothing to draw; keep the document well-formed.
        combined.width = 100.0;
        combined.height = 100.0;
    }
    scene_to_svg(&combined)
}

/// Download filename for the vector-markup export.
pub fn drawing_file_name(folio: &str) -> String {
    format!("{folio}-planos.svg")
}

/// Write the combined SVG document under `dir`, returning the file path.
pub fn write_svg(model: &DrawingModel, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(drawing_file_name(&model.project.folio));
    let svg = export_svg(model);
    fs::write(&path, svg).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
