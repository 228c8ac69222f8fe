//! Intake of untrusted design-agent JSON.
//!
//! The upstream design agent is an LLM; its JSON is loosely typed and
//! occasionally wrong. This module is the single place where that output is
//! coerced into the strict [`crate::model`] types, so the rendering code can
//! assume a well-formed model and never re-validate.
//!
//! Defaulting rules:
//! - numbers are accepted as JSON numbers or numeric strings; anything else
//!   (including NaN/Infinity) coerces to the caller's default
//! - quantities clamp to at least 1
//! - absent or non-array sections become empty collections
//! - entries missing their identifying name are dropped with a warning
//!
//! Degenerate extents (zero/negative sizes) are deliberately kept: the fit
//! math downstream substitutes a fallback scale, which matches the contract
//! of "empty render rather than failure".

use serde_json::Value;
use tracing::warn;

use crate::model::{
    AssemblyStep, Axis, ConstructionDetail, CrossSection, Dimension, DrawingModel, Drawings,
    Element, ElementKind, Groove, GrooveOrientation, Hole, Piece, PieceDetail, ProjectMeta, View,
};

/// Number from `value[key]`, accepting numbers and numeric strings.
fn num(value: &Value, key: &str) -> Option<f64> {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_f64().filter(|f| f.is_finite()),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn num_or(value: &Value, key: &str, default: f64) -> f64 {
    num(value, key).unwrap_or(default)
}

/// String from `value[key]`, trimmed; `None` when absent or empty.
fn text(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn text_or(value: &Value, key: &str, default: &str) -> String {
    text(value, key).unwrap_or_else(|| default.to_string())
}

/// Array items of `value[key]`; empty when the key is absent or not an array.
fn items<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn string_items(value: &Value, key: &str) -> Vec<String> {
    items(value, key)
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

fn element_from_value(value: &Value) -> Element {
    Element {
        name: text_or(value, "name", ""),
        x: num_or(value, "x", 0.0),
        y: num_or(value, "y", 0.0),
        width: num_or(value, "width", 0.0),
        height: num_or(value, "height", 0.0),
        kind: text(value, "kind")
            .map(|tag| ElementKind::from_tag(&tag))
            .unwrap_or_default(),
    }
}

fn dimension_from_value(value: &Value) -> Option<Dimension> {
    let axis = match text(value, "axis")?.to_lowercase().as_str() {
        "horizontal" => Axis::Horizontal,
        "vertical" => Axis::Vertical,
        other => {
            warn!(axis = other, "dimension with unknown axis dropped");
            return None;
        }
    };
    Some(Dimension {
        axis,
        from: num_or(value, "from", 0.0),
        to: num_or(value, "to", 0.0),
        label: text_or(value, "label", ""),
        description: text(value, "description"),
    })
}

fn view_from_value(value: &Value) -> Option<View> {
    if !value.is_object() {
        return None;
    }
    Some(View {
        total_width: num_or(value, "totalWidth", 0.0),
        total_height: num_or(value, "totalHeight", 0.0),
        elements: items(value, "elements")
            .iter()
            .map(element_from_value)
            .collect(),
        dimensions: items(value, "dimensions")
            .iter()
            .filter_map(dimension_from_value)
            .collect(),
    })
}

/// Sheet-1 payload: `{scale, units, frontView, sideView, topView, notes}`.
pub fn drawings_from_value(value: &Value) -> Option<Drawings> {
    if !value.is_object() {
        return None;
    }
    Some(Drawings {
        scale_label: text_or(value, "scale", ""),
        units_label: text_or(value, "units", "mm"),
        front_view: value.get("frontView").and_then(view_from_value),
        side_view: value.get("sideView").and_then(view_from_value),
        top_view: value.get("topView").and_then(view_from_value),
        notes: string_items(value, "notes"),
    })
}

/// Cut-list rows. Rows without a name are dropped; quantities clamp to >= 1.
pub fn pieces_from_value(value: &Value) -> Vec<Piece> {
    let rows = value.as_array().map(Vec::as_slice).unwrap_or(&[]);
    rows.iter()
        .filter_map(|row| {
            let Some(name) = text(row, "name") else {
                warn!("cut-list row without a name dropped");
                return None;
            };
            Some(Piece {
                name,
                quantity: num_or(row, "quantity", 1.0).max(1.0) as u32,
                length: num_or(row, "length", 0.0),
                width: num_or(row, "width", 0.0),
                thickness: num_or(row, "thickness", 0.0),
                material: text_or(row, "material", ""),
                note: text(row, "note"),
            })
        })
        .collect()
}

fn hole_from_value(value: &Value) -> Hole {
    Hole {
        kind: text_or(value, "type", ""),
        diameter: num_or(value, "diameter", 0.0),
        depth: num_or(value, "depth", 0.0),
        x: num_or(value, "x", 0.0),
        y: num_or(value, "y", 0.0),
        description: text_or(value, "description", ""),
    }
}

fn groove_from_value(value: &Value) -> Groove {
    let orientation = match text(value, "orientation").as_deref() {
        Some("vertical") => GrooveOrientation::Vertical,
        _ => GrooveOrientation::Horizontal,
    };
    Groove {
        x: num_or(value, "x", 0.0),
        depth: num_or(value, "depth", 0.0),
        width: num_or(value, "width", 0.0),
        length: num_or(value, "length", 0.0),
        orientation,
        description: text_or(value, "description", ""),
    }
}

/// Per-piece hole/groove/edge-banding annotations.
pub fn piece_details_from_value(value: &Value) -> Vec<PieceDetail> {
    let rows = value.as_array().map(Vec::as_slice).unwrap_or(&[]);
    rows.iter()
        .filter_map(|row| {
            let Some(piece) = text(row, "piece") else {
                warn!("piece detail without a piece name dropped");
                return None;
            };
            Some(PieceDetail {
                piece,
                holes: items(row, "holes").iter().map(hole_from_value).collect(),
                grooves: items(row, "grooves")
                    .iter()
                    .map(groove_from_value)
                    .collect(),
                edge_banding: string_items(row, "edgeBanding"),
                grain_direction: text(row, "grainDirection"),
                cutting_notes: text(row, "cuttingNotes"),
            })
        })
        .collect()
}

/// Joint cross-sections for sheet 3.
pub fn cross_sections_from_value(value: &Value) -> Vec<CrossSection> {
    let rows = value.as_array().map(Vec::as_slice).unwrap_or(&[]);
    rows.iter()
        .enumerate()
        .map(|(i, row)| CrossSection {
            id: text_or(row, "id", &format!("A{}", i + 1)),
            name: text_or(row, "name", ""),
            description: text_or(row, "description", ""),
            scale_label: text_or(row, "scale", ""),
            elements: items(row, "elements")
                .iter()
                .map(element_from_value)
                .collect(),
            dimensions: items(row, "dimensions")
                .iter()
                .filter_map(dimension_from_value)
                .collect(),
            notes: string_items(row, "notes"),
        })
        .collect()
}

/// Construction details for sheet 3.
pub fn construction_details_from_value(value: &Value) -> Vec<ConstructionDetail> {
    let rows = value.as_array().map(Vec::as_slice).unwrap_or(&[]);
    rows.iter()
        .enumerate()
        .map(|(i, row)| ConstructionDetail {
            id: text_or(row, "id", &format!("D{}", i + 1)),
            kind: text_or(row, "type", ""),
            name: text_or(row, "name", ""),
            description: text_or(row, "description", ""),
            tools: string_items(row, "tools"),
            tolerance: text(row, "tolerance"),
            elements: items(row, "elements")
                .iter()
                .map(element_from_value)
                .collect(),
            dimensions: items(row, "dimensions")
                .iter()
                .filter_map(dimension_from_value)
                .collect(),
        })
        .collect()
}

/// Assembly-sequence steps, for the step diagrams.
pub fn assembly_steps_from_value(value: &Value) -> Vec<AssemblyStep> {
    let rows = value.as_array().map(Vec::as_slice).unwrap_or(&[]);
    rows.iter()
        .enumerate()
        .map(|(i, row)| AssemblyStep {
            number: num_or(row, "number", (i + 1) as f64).max(1.0) as u32,
            operation: text_or(row, "operation", ""),
            description: text_or(row, "description", ""),
            tools: string_items(row, "tools"),
            minutes: num(row, "minutes").map(|m| m.max(0.0) as u32),
        })
        .collect()
}

/// Assemble a full [`DrawingModel`] from the three input chunks the design
/// agent delivers: the sheet-1 drawings object, the cut list, and the details
/// object `{pieceDetails, crossSections, constructionDetails}`. Any chunk may
/// be absent.
pub fn model_from_parts(
    project: ProjectMeta,
    drawings: Option<&Value>,
    cut_list: Option<&Value>,
    details: Option<&Value>,
) -> DrawingModel {
    let drawings = drawings.and_then(drawings_from_value);
    let pieces = cut_list.map(pieces_from_value).unwrap_or_default();
    let (piece_details, cross_sections, construction_details) = match details {
        Some(value) => (
            value
                .get("pieceDetails")
                .map(piece_details_from_value)
                .unwrap_or_default(),
            value
                .get("crossSections")
                .map(cross_sections_from_value)
                .unwrap_or_default(),
            value
                .get("constructionDetails")
                .map(construction_details_from_value)
                .unwrap_or_default(),
        ),
        None => (Vec::new(), Vec::new(), Vec::new()),
    };

    DrawingModel {
        project,
        drawings,
        pieces,
        piece_details,
        cross_sections,
        construction_details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_accept_numeric_strings_and_reject_junk() {
        let v = json!({"a": 12.5, "b": "33", "c": "tall", "d": null});
        assert_eq!(num(&v, "a"), Some(12.5));
        assert_eq!(num(&v, "b"), Some(33.0));
        assert_eq!(num(&v, "c"), None);
        assert_eq!(num(&v, "d"), None);
        assert_eq!(num(&v, "missing"), None);
    }

    #[test]
    fn drawings_tolerate_missing_views() {
        let v = json!({
            "scale": "1:10",
            "units": "mm",
            "frontView": {"totalWidth": 1200, "totalHeight": 1800},
            "notes": ["Tornillos ocultos"]
        });
        let drawings = drawings_from_value(&v).unwrap();
        assert!(drawings.front_view.is_some());
        assert!(drawings.side_view.is_none());
        assert!(drawings.top_view.is_none());
        assert_eq!(drawings.notes.len(), 1);
    }

    #[test]
    fn piece_quantity_clamps_to_one() {
        let v = json!([
            {"name": "Base inferior", "quantity": 0, "length": 900, "width": 400, "thickness": 18, "material": "MDF"},
            {"name": "Panel trasero", "quantity": "2", "length": "900", "width": 1200, "thickness": 6, "material": "Fibracel"},
            {"length": 100, "width": 100, "thickness": 18, "material": "MDF"}
        ]);
        let pieces = pieces_from_value(&v);
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].quantity, 1);
        assert_eq!(pieces[1].quantity, 2);
        assert_eq!(pieces[1].length, 900.0);
    }

    #[test]
    fn dimension_with_unknown_axis_is_dropped() {
        let v = json!({
            "totalWidth": 100, "totalHeight": 100,
            "dimensions": [
                {"axis": "horizontal", "from": 0, "to": 100, "label": "100"},
                {"axis": "diagonal", "from": 0, "to": 100, "label": "?"}
            ]
        });
        let view = view_from_value(&v).unwrap();
        assert_eq!(view.dimensions.len(), 1);
    }

    #[test]
    fn cross_sections_get_fallback_ids() {
        let v = json!([{"name": "Union lateral"}]);
        let sections = cross_sections_from_value(&v);
        assert_eq!(sections[0].id, "A1");
    }

    #[test]
    fn model_from_parts_accepts_any_missing_chunk() {
        let model = model_from_parts(ProjectMeta::new("Buro", "FD-0042"), None, None, None);
        assert!(!model.has_assembly());
        assert!(!model.has_breakdown());
        assert!(!model.has_details());
        assert_eq!(model.sheet_count(), 0);
    }
}
