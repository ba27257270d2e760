use crate::segments::Component;
use serde::Serialize;

/// Summary of the connected-component stage.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationStage {
    /// Ink components found before noise filtering.
    pub components_found: usize,
    /// Components rejected by the area cutoff.
    pub discarded_as_noise: usize,
    /// Ink pixels across all components.
    pub ink_pixels: usize,
    /// Area of the largest component's bounding rectangle, in pixels.
    pub largest_component_area: usize,
}

impl SegmentationStage {
    pub fn from_components(components: &[Component], discarded: usize) -> Self {
        Self {
            components_found: components.len(),
            discarded_as_noise: discarded,
            ink_pixels: components.iter().map(|c| c.pixel_count).sum(),
            largest_component_area: components
                .iter()
                .map(|c| c.rect.area())
                .max()
                .unwrap_or(0),
        }
    }
}
