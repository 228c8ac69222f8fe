//! # PlanoKit
//!
//! Technical-drawing synthesis and CAD export engine for furniture designs.
//! Converts a loosely-structured furniture specification (orthographic views,
//! cut list, per-piece hole/groove detail, joint cross-sections) into
//! multi-sheet engineering drawings, and serializes the same model to SVG and
//! DXF.
//!
//! ## Architecture
//!
//! PlanoKit is organized as a workspace with multiple crates:
//!
//! 1. **planokit-core** - Drawing model, untrusted-input intake, errors
//! 2. **planokit-drafting** - Scene composition: fit math, dimensioning,
//!    sheet composers, step-piece associator
//! 3. **planokit-export** - SVG and DXF serialization
//! 4. **planokit** - This facade, re-exporting the public surface
//!
//! ## Usage
//!
//! ```rust,ignore
//! use planokit::{intake, DxfOptions, ProjectMeta};
//!
//! let project = ProjectMeta::new("Buro nocturno", "FD-0042");
//! let model = intake::model_from_parts(project, Some(&drawings), Some(&cut_list), None);
//!
//! let svg = planokit::export_svg(&model);
//! let dxf = planokit::export_dxf(&model, &DxfOptions::default());
//! ```

pub use planokit_core::{
    error, intake, model, units, AssemblyStep, Axis, ConstructionDetail, CrossSection, Dimension,
    DraftError, DrawingModel, Drawings, Element, ElementKind, Groove, GrooveOrientation, Hole,
    Piece, PieceDetail, ProjectMeta, View,
};
pub use planokit_drafting::{
    associate, compose_assembly, compose_breakdown, compose_details, compose_step_diagram,
    AssemblyLayout, BreakdownLayout, DetailLayout, DimensionStyle, Scene, StepDiagramLayout,
};
pub use planokit_export::{
    compose_sheets, drawing_file_name, dxf_file_name, export_dxf, export_svg, scene_to_svg,
    write_dxf, write_svg, DxfOptions,
};

/// Initialize logging for embedding applications.
///
/// Respects `RUST_LOG`, defaulting to `info`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let fmt_layer = fmt::layer().with_target(true).with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
