//! The drawing model.
//!
//! Every type here is plain immutable data in real-world millimeters. A model
//! is built once per drawing pass (normally through [`crate::intake`]) and
//! then shared read-only by the sheet composers and both serializers; nothing
//! in the engine mutates it in place.
//!
//! Field names serialize in camelCase to match the wire shape of the design
//! agent's JSON.

use serde::{Deserialize, Serialize};

/// Axis of a measurement annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Measured along X; drawn below the object.
    Horizontal,
    /// Measured along Y; drawn to the left of the object.
    Vertical,
}

/// One measurement annotation: extension lines, an arrowed span line and a
/// label, along one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub axis: Axis,
    /// Span start in mm along the axis.
    pub from: f64,
    /// Span end in mm along the axis. `from <= to` is expected but not
    /// enforced; reversed or equal spans render nothing.
    pub to: f64,
    /// Display text, e.g. `"1200"` or `"600 mm"`.
    pub label: String,
    /// Optional caption drawn under the span line.
    #[serde(default)]
    pub description: Option<String>,
}

impl Dimension {
    /// Whether the span is worth drawing: finite endpoints and a strictly
    /// positive extent.
    pub fn is_drawable(&self) -> bool {
        self.from.is_finite() && self.to.is_finite() && self.to > self.from
    }
}

/// Cosmetic classification of an element. Only drives fill/stroke styling,
/// never layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Panel,
    Base,
    Drawer,
    Mirror,
    Structure,
    Joint,
    #[serde(other)]
    #[default]
    Other,
}

impl ElementKind {
    /// Parse a free-form kind tag. Accepts the English tags and the legacy
    /// Spanish tags still produced by older design-agent prompts.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "panel" => Self::Panel,
            "base" => Self::Base,
            "drawer" | "cajones" | "cajon" | "cajón" => Self::Drawer,
            "mirror" | "espejo" => Self::Mirror,
            "structure" | "estructura" => Self::Structure,
            "joint" | "union" | "unión" => Self::Joint,
            _ => Self::Other,
        }
    }
}

/// One named rectangular part drawn within a view, in the view's object-space
/// millimeters. Elements may exceed or touch the view bounds; they are not
/// clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub kind: ElementKind,
}

/// One orthographic projection of the whole assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct View {
    /// Overall object width in mm. Expected > 0.
    pub total_width: f64,
    /// Overall object height in mm. Expected > 0.
    pub total_height: f64,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
}

impl View {
    /// Whether the view has usable extents. Non-drawable views still render a
    /// placeholder at the fallback scale rather than failing.
    pub fn is_drawable(&self) -> bool {
        self.total_width.is_finite()
            && self.total_height.is_finite()
            && self.total_width > 0.0
            && self.total_height > 0.0
    }

    /// Dimensions filtered by axis, in input order.
    pub fn dimensions_along(&self, axis: Axis) -> impl Iterator<Item = &Dimension> {
        self.dimensions.iter().filter(move |d| d.axis == axis)
    }
}

/// The general-assembly payload: the three orthographic views plus sheet-wide
/// notes and labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Drawings {
    /// Display scale label, e.g. `"1:10"`.
    #[serde(default)]
    pub scale_label: String,
    /// Display units label, e.g. `"mm"`.
    #[serde(default)]
    pub units_label: String,
    #[serde(default)]
    pub front_view: Option<View>,
    #[serde(default)]
    pub side_view: Option<View>,
    #[serde(default)]
    pub top_view: Option<View>,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl Drawings {
    /// Scale label with the `1:10` fallback used across sheets and exports.
    pub fn scale_or_default(&self) -> &str {
        if self.scale_label.is_empty() {
            "1:10"
        } else {
            &self.scale_label
        }
    }
}

/// One cut-list row: a physical part to be manufactured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    pub name: String,
    /// How many of this piece to cut. At least 1.
    pub quantity: u32,
    pub length: f64,
    pub width: f64,
    pub thickness: f64,
    pub material: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// One drilled hole on a piece's front face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hole {
    /// Hole type tag, e.g. `"pasante"` or `"ciego"`.
    #[serde(default)]
    pub kind: String,
    pub diameter: f64,
    pub depth: f64,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub description: String,
}

/// Orientation of a groove on a piece face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GrooveOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// One routed groove on a piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Groove {
    pub x: f64,
    pub depth: f64,
    pub width: f64,
    pub length: f64,
    #[serde(default)]
    pub orientation: GrooveOrientation,
    #[serde(default)]
    pub description: String,
}

/// Hole/groove/edge-banding/grain annotations for one piece, matched to the
/// cut list by piece name. Pieces without a detail entry simply render bare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PieceDetail {
    /// Name of the piece this detail belongs to.
    pub piece: String,
    #[serde(default)]
    pub holes: Vec<Hole>,
    #[serde(default)]
    pub grooves: Vec<Groove>,
    #[serde(default)]
    pub edge_banding: Vec<String>,
    #[serde(default)]
    pub grain_direction: Option<String>,
    #[serde(default)]
    pub cutting_notes: Option<String>,
}

/// A localized, independently scaled cut-away view of one joint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CrossSection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Local scale label, e.g. `"1:2"`.
    #[serde(default)]
    pub scale_label: String,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// A localized close-up of one structural union with tolerance/tool notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConstructionDetail {
    pub id: String,
    /// Union type tag, e.g. `"espiga"` or `"tornillo"`.
    #[serde(default)]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub tolerance: Option<String>,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
}

/// One assembly-sequence step, as produced by the design agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyStep {
    /// 1-based step number.
    pub number: u32,
    pub operation: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub minutes: Option<u32>,
}

/// Project identity shown in title blocks and used for export filenames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMeta {
    pub title: String,
    /// Unique order/document identifier; appears in filenames and title
    /// blocks.
    pub folio: String,
    /// Workshop/studio name printed in title blocks. May be empty.
    #[serde(default)]
    pub studio: String,
}

impl ProjectMeta {
    pub fn new(title: impl Into<String>, folio: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            folio: folio.into(),
            studio: String::new(),
        }
    }

    pub fn with_studio(mut self, studio: impl Into<String>) -> Self {
        self.studio = studio.into();
        self
    }
}

/// The aggregate input for one drawing pass: everything the three sheets and
/// both serializers need. Created fresh per render and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DrawingModel {
    pub project: ProjectMeta,
    #[serde(default)]
    pub drawings: Option<Drawings>,
    #[serde(default)]
    pub pieces: Vec<Piece>,
    #[serde(default)]
    pub piece_details: Vec<PieceDetail>,
    #[serde(default)]
    pub cross_sections: Vec<CrossSection>,
    #[serde(default)]
    pub construction_details: Vec<ConstructionDetail>,
}

impl DrawingModel {
    /// Detail record for the named piece, if any.
    pub fn detail_for(&self, piece_name: &str) -> Option<&PieceDetail> {
        self.piece_details.iter().find(|d| d.piece == piece_name)
    }

    /// Whether the general-assembly sheet has anything to show.
    pub fn has_assembly(&self) -> bool {
        self.drawings.is_some()
    }

    /// Whether the piece-breakdown sheet has anything to show.
    pub fn has_breakdown(&self) -> bool {
        !self.pieces.is_empty()
    }

    /// Whether the joint-details sheet has anything to show.
    pub fn has_details(&self) -> bool {
        !self.cross_sections.is_empty() || !self.construction_details.is_empty()
    }

    /// Optional pre-flight validation for callers that want to surface input
    /// gaps instead of rendering degraded output. Rendering never requires
    /// this to pass: every renderer degrades in place.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::DraftError;

        let Some(drawings) = &self.drawings else {
            return Err(DraftError::missing("drawings"));
        };
        let views = [
            ("frontView", &drawings.front_view),
            ("sideView", &drawings.side_view),
            ("topView", &drawings.top_view),
        ];
        if views.iter().all(|(_, v)| v.is_none()) {
            return Err(DraftError::missing("drawings views"));
        }
        for (name, view) in views {
            if let Some(view) = view {
                if !view.is_drawable() {
                    return Err(DraftError::DegenerateGeometry {
                        context: name.to_string(),
                        width: view.total_width,
                        height: view.total_height,
                    });
                }
            }
        }
        for piece in &self.pieces {
            if !(piece.length > 0.0 && piece.width > 0.0 && piece.thickness > 0.0) {
                return Err(DraftError::DegenerateGeometry {
                    context: format!("piece {}", piece.name),
                    width: piece.length,
                    height: piece.width,
                });
            }
        }
        Ok(())
    }

    /// Number of sheets that will actually be rendered.
    pub fn sheet_count(&self) -> u32 {
        [
            self.has_assembly(),
            self.has_breakdown(),
            self.has_details(),
        ]
        .iter()
        .filter(|present| **present)
        .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_drawable_rejects_reversed_and_equal_spans() {
        let dim = |from: f64, to: f64| Dimension {
            axis: Axis::Horizontal,
            from,
            to,
            label: "x".into(),
            description: None,
        };
        assert!(dim(0.0, 100.0).is_drawable());
        assert!(!dim(100.0, 100.0).is_drawable());
        assert!(!dim(100.0, 0.0).is_drawable());
        assert!(!dim(f64::NAN, 100.0).is_drawable());
    }

    #[test]
    fn element_kind_accepts_legacy_spanish_tags() {
        assert_eq!(ElementKind::from_tag("Cajones"), ElementKind::Drawer);
        assert_eq!(ElementKind::from_tag("espejo"), ElementKind::Mirror);
        assert_eq!(ElementKind::from_tag("panel"), ElementKind::Panel);
        assert_eq!(ElementKind::from_tag("whatever"), ElementKind::Other);
    }

    #[test]
    fn view_drawable_requires_positive_finite_totals() {
        let mut view = View {
            total_width: 1200.0,
            total_height: 1800.0,
            ..View::default()
        };
        assert!(view.is_drawable());
        view.total_height = 0.0;
        assert!(!view.is_drawable());
        view.total_height = f64::INFINITY;
        assert!(!view.is_drawable());
    }

    #[test]
    fn validate_reports_the_first_gap() {
        let mut model = DrawingModel::default();
        assert!(matches!(
            model.validate(),
            Err(crate::error::DraftError::MissingData { .. })
        ));

        model.drawings = Some(Drawings {
            front_view: Some(View {
                total_width: 1200.0,
                total_height: 0.0,
                ..View::default()
            }),
            ..Drawings::default()
        });
        assert!(matches!(
            model.validate(),
            Err(crate::error::DraftError::DegenerateGeometry { .. })
        ));

        model.drawings.as_mut().unwrap().front_view.as_mut().unwrap().total_height = 1800.0;
        assert!(model.validate().is_ok());
    }

    #[test]
    fn sheet_count_tracks_present_sections() {
        let mut model = DrawingModel::default();
        assert_eq!(model.sheet_count(), 0);
        model.drawings = Some(Drawings::default());
        model.pieces.push(Piece {
            name: "Panel lateral".into(),
            quantity: 2,
            length: 600.0,
            width: 400.0,
            thickness: 18.0,
            material: "MDF 18mm".into(),
            note: None,
        });
        assert_eq!(model.sheet_count(), 2);
    }
}
