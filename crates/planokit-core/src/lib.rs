//! # PlanoKit Core
//!
//! Core data model and input boundary for the PlanoKit drawing engine.
//!
//! This crate defines the strict, immutable [`DrawingModel`] that every other
//! PlanoKit crate consumes, plus the intake layer that coerces the
//! loosely-typed JSON produced by the upstream design agent into that model.
//!
//! ## Core Components
//!
//! - **Model**: views, elements, dimensions, the cut list, per-piece detail,
//!   cross-sections and construction details
//! - **Intake**: defensive conversion from untrusted `serde_json::Value`
//!   input with explicit defaulting rules
//! - **Errors**: the engine-wide error taxonomy
//! - **Units**: deterministic number formatting shared by the serializers
//!
//! All numeric fields entering through the intake layer are treated as
//! untrusted: missing, zero, negative or non-numeric values degrade to a safe
//! default instead of failing the whole document.

pub mod error;
pub mod intake;
pub mod model;
pub mod units;

pub use error::{DraftError, Result};
pub use model::{
    AssemblyStep, Axis, ConstructionDetail, CrossSection, Dimension, DrawingModel, Drawings,
    Element, ElementKind, Groove, GrooveOrientation, Hole, Piece, PieceDetail, ProjectMeta, View,
};
pub use units::{fmt_num, format_mm};
