//! # PlanoKit Export
//!
//! Serialization back ends for the PlanoKit drawing model.
//!
//! Two independent code paths walk the same model:
//!
//! - **SVG**: a thin adapter over the composed drafting scenes, so the
//!   exported file shares every coordinate with the live on-screen document
//! - **DXF**: direct model-to-entities emission in real millimeters for CAD
//!   interchange
//!
//! A fault in one format never blocks the other, and neither blocks the
//! on-screen render.

pub mod dxf;
pub mod svg;

pub use dxf::{dxf_file_name, export_dxf, write_dxf, DxfOptions};
pub use svg::{compose_sheets, drawing_file_name, export_svg, scene_to_svg, write_svg};
