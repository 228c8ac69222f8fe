//! Layout configuration, one named structure per sheet type.
//!
//! Every cell size, padding, column split and pagination cap the composers
//! use lives here, so a sheet can be retuned without touching rendering
//! logic. The defaults reproduce the shipped sheet formats.

/// Dimension-annotation geometry shared by every view.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionStyle {
    /// Offset step between stacked dimension lines on the same axis.
    pub gap: f64,
    /// Extension-line overshoot past the object edge.
    pub ext: f64,
    /// Distance from the object edge to the first dimension line, beyond
    /// `ext`.
    pub lead: f64,
    /// Label font size.
    pub label_size: f64,
    /// Caption font size.
    pub caption_size: f64,
}

impl Default for DimensionStyle {
    fn default() -> Self {
        Self {
            gap: 22.0,
            ext: 6.0,
            lead: 14.0,
            label_size: 7.5,
            caption_size: 6.0,
        }
    }
}

impl DimensionStyle {
    /// Distance from the object edge to stacked dimension line `index`.
    pub fn stacked_offset(&self, index: usize) -> f64 {
        self.ext + self.lead + index as f64 * self.gap
    }
}

/// Sheet 1: general assembly, three views side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyLayout {
    pub sheet_width: f64,
    pub sheet_height: f64,
    pub pad_left: f64,
    pub pad_top: f64,
    pub front_width: f64,
    pub side_width: f64,
    pub top_width: f64,
    pub view_height: f64,
    pub column_gap: f64,
    /// Cell space reserved per axis for dimension stacks around the object.
    pub dimension_gutter: f64,
    pub margin_factor: f64,
    /// Sheet notes rendered below the views; extras are dropped.
    pub max_notes: usize,
    pub grid_step: f64,
    pub dims: DimensionStyle,
}

impl Default for AssemblyLayout {
    fn default() -> Self {
        Self {
            sheet_width: 1060.0,
            sheet_height: 440.0,
            pad_left: 50.0,
            pad_top: 20.0,
            front_width: 440.0,
            side_width: 280.0,
            top_width: 290.0,
            view_height: 300.0,
            column_gap: 8.0,
            dimension_gutter: 60.0,
            margin_factor: 0.82,
            max_notes: 5,
            grid_step: 16.0,
            dims: DimensionStyle::default(),
        }
    }
}

/// Sheet 2: per-piece breakdown grid.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownLayout {
    pub columns: usize,
    pub cell_width: f64,
    pub cell_height: f64,
    pub pad: f64,
    pub cell_gap: f64,
    /// Pieces beyond this count are dropped from the sheet (no continuation
    /// sheet exists).
    pub max_pieces: usize,
    /// Inner cell hosting the front face of a piece.
    pub face_cell_width: f64,
    pub face_cell_height: f64,
    pub face_gap: f64,
    /// Margin subtracted from the face cell before fitting.
    pub face_margin: f64,
    /// Fraction of the face cell width available to the side (thickness)
    /// projection.
    pub side_width_fraction: f64,
    /// Fraction of the face cell height available to the top projection.
    pub top_height_fraction: f64,
    pub grid_step: f64,
}

impl Default for BreakdownLayout {
    fn default() -> Self {
        Self {
            columns: 3,
            cell_width: 290.0,
            cell_height: 200.0,
            pad: 20.0,
            cell_gap: 10.0,
            max_pieces: 12,
            face_cell_width: 190.0,
            face_cell_height: 120.0,
            face_gap: 14.0,
            face_margin: 30.0,
            side_width_fraction: 0.25,
            top_height_fraction: 0.22,
            grid_step: 16.0,
        }
    }
}

/// Sheet 3: cross-sections row plus construction-details row.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailLayout {
    pub sheet_width: f64,
    pub pad: f64,
    /// Y of the cross-section row.
    pub top: f64,
    pub section_height: f64,
    pub detail_height: f64,
    pub max_sections: usize,
    pub max_details: usize,
    pub margin_factor: f64,
    pub bottom_pad: f64,
    pub grid_step: f64,
    pub dims: DimensionStyle,
}

impl Default for DetailLayout {
    fn default() -> Self {
        Self {
            sheet_width: 1060.0,
            pad: 20.0,
            top: 30.0,
            section_height: 200.0,
            detail_height: 180.0,
            max_sections: 3,
            max_details: 4,
            margin_factor: 0.82,
            bottom_pad: 30.0,
            grid_step: 16.0,
            dims: DimensionStyle::default(),
        }
    }
}

/// Per-step assembly illustration.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDiagramLayout {
    pub width: f64,
    pub height: f64,
    /// Slot widths by how many pieces share the diagram (1, 2, 3).
    pub slot_width_single: f64,
    pub slot_width_pair: f64,
    pub slot_width_triple: f64,
    pub max_piece_height: f64,
    /// Upper scale clamp so tiny hardware pieces stay recognizable.
    pub max_scale: f64,
    /// Floor on the drawn footprint of a piece.
    pub min_drawn_width: f64,
    pub min_drawn_height: f64,
    pub grid_step: f64,
}

impl Default for StepDiagramLayout {
    fn default() -> Self {
        Self {
            width: 520.0,
            height: 200.0,
            slot_width_single: 160.0,
            slot_width_pair: 140.0,
            slot_width_triple: 110.0,
            max_piece_height: 80.0,
            max_scale: 0.15,
            min_drawn_width: 40.0,
            min_drawn_height: 25.0,
            grid_step: 15.0,
        }
    }
}

/// Title block geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleLayout {
    pub height: f64,
    /// First column divider as a fraction of the block width.
    pub col1_frac: f64,
    /// Second column divider as a fraction of the block width.
    pub col2_frac: f64,
}

impl Default for TitleLayout {
    fn default() -> Self {
        Self {
            height: 36.0,
            col1_frac: 0.45,
            col2_frac: 0.72,
        }
    }
}
