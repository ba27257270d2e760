//! Panel detector orchestrating the gutter segmentation pipeline.
//!
//! Overview
//! - Classifies every pixel as gutter or ink with a per-channel brightness
//!   threshold ([`GutterClassifier`](crate::gutter::GutterClassifier)).
//! - Groups 4-connected ink pixels into components with a breadth-first flood
//!   fill and reduces each to its bounding rectangle ([`crate::segments`]).
//! - Drops components whose rectangle covers too little of the page
//!   ([`NoiseFilter`](crate::filter::NoiseFilter)) and converts survivors to
//!   fractional [`BoundingBox`](crate::types::BoundingBox)es.
//! - Orders boxes top-to-bottom, then left-to-right within a row band
//!   ([`ReadingOrder`](crate::order::ReadingOrder)).
//!
//! Modules
//! - [`params`] – configuration with documented defaults.
//! - `pipeline` – the [`PanelDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::PanelParams;
pub use pipeline::{detect_panels, PanelDetector};
