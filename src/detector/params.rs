//! Parameter types configuring the panel detector.
//!
//! Every knob has a documented default so a bare `{}` JSON object, or
//! `PanelParams::default()`, reproduces the reference behaviour. Field names
//! are snake_case; the camelCase spellings are accepted as aliases.

use crate::error::{PanelError, Result};
use crate::filter::{NoiseFilter, DEFAULT_MIN_AREA_FRACTION};
use crate::gutter::{GutterClassifier, DEFAULT_GUTTER_THRESHOLD};
use crate::order::{ReadingOrder, DEFAULT_ROW_TOLERANCE};
use serde::{Deserialize, Serialize};

/// Rows scanned between two polls of a cancellation flag.
pub const DEFAULT_CANCEL_CHECK_ROWS: usize = 64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelParams {
    /// Pixels with R, G and B all strictly above this are gutter (0–255).
    #[serde(alias = "gutterBrightnessThreshold")]
    pub gutter_brightness_threshold: u8,
    /// Components covering no more than this fraction of the page are noise.
    #[serde(alias = "minPanelAreaFraction")]
    pub min_panel_area_fraction: f64,
    /// Vertical distance (fraction of page height) under which two panels
    /// share a reading row.
    #[serde(alias = "rowToleranceFraction")]
    pub row_tolerance_fraction: f64,
    /// Cancellation polling interval in rows; only used by cancellable runs.
    #[serde(alias = "cancelCheckRows")]
    pub cancel_check_rows: usize,
}

impl Default for PanelParams {
    fn default() -> Self {
        Self {
            gutter_brightness_threshold: DEFAULT_GUTTER_THRESHOLD,
            min_panel_area_fraction: DEFAULT_MIN_AREA_FRACTION,
            row_tolerance_fraction: DEFAULT_ROW_TOLERANCE,
            cancel_check_rows: DEFAULT_CANCEL_CHECK_ROWS,
        }
    }
}

impl PanelParams {
    pub fn validate(&self) -> Result<()> {
        check_fraction("min_panel_area_fraction", self.min_panel_area_fraction)?;
        check_fraction("row_tolerance_fraction", self.row_tolerance_fraction)?;
        if self.cancel_check_rows == 0 {
            return Err(PanelError::invalid_parameter("cancel_check_rows", 0));
        }
        Ok(())
    }

    pub fn classifier(&self) -> GutterClassifier {
        GutterClassifier::new(self.gutter_brightness_threshold)
    }

    pub fn noise_filter(&self) -> NoiseFilter {
        NoiseFilter::new(self.min_panel_area_fraction)
    }

    pub fn reading_order(&self) -> ReadingOrder {
        ReadingOrder::new(self.row_tolerance_fraction)
    }
}

fn check_fraction(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(PanelError::invalid_parameter(name, value))
    }
}
