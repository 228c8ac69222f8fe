//! # PlanoKit Drafting
//!
//! Scene composition for technical furniture drawings. This crate turns the
//! immutable [`planokit_core`] model into framework-free scene graphs
//! (rectangles, lines, circles, polygons, text runs) that the export crate or
//! an on-screen canvas can render without repeating any layout math.
//!
//! ## Core Components
//!
//! - **Scene**: the intermediate drawing representation
//! - **Fit**: viewport-fit math (uniform scale, centering, clamping)
//! - **Dimension**: stacked measurement annotation
//! - **View**: one orthographic projection inside a sheet cell
//! - **Sheet composers**: general assembly, per-piece breakdown,
//!   cross-sections & construction details
//! - **Associate**: the step-piece pairing heuristic and its step diagram
//!
//! ## Architecture
//!
//! ```text
//! DrawingModel (planokit-core)
//!   ├── compose_assembly   ──┐
//!   ├── compose_breakdown  ──┼── Scene ── SVG / canvas (planokit-export)
//!   ├── compose_details    ──┘
//!   └── associate ── compose_step_diagram
//! ```
//!
//! Every composer is a pure function of its input subset: same model in,
//! byte-identical scene out. Absent data renders as an absent section, never
//! as an error.

pub mod assembly_sheet;
pub mod associate;
pub mod config;
pub mod detail_sheet;
pub mod dimension;
pub mod fit;
pub mod piece_sheet;
pub mod scene;
pub mod step_diagram;
pub mod title_block;
pub mod view;

pub use assembly_sheet::compose_assembly;
pub use associate::{associate, MAX_MATCHES, STEP_KEYWORDS};
pub use config::{
    AssemblyLayout, BreakdownLayout, DetailLayout, DimensionStyle, StepDiagramLayout, TitleLayout,
};
pub use detail_sheet::compose_details;
pub use fit::{center_offsets, fit_scale, fit_scale_capped, FALLBACK_SCALE};
pub use piece_sheet::compose_breakdown;
pub use scene::{
    ellipsize, CircleItem, Color, Item, LineItem, PolygonItem, RectItem, Scene, Stroke, TextAnchor,
    TextItem, TextRotation,
};
pub use step_diagram::compose_step_diagram;
pub use title_block::{render_title_block, TitleBlockInfo};
pub use view::render_view;
