//! Measure - geometry snapshots of live DOM elements
//!
//! Only call after the host has committed layout (from `use_effect`);
//! during render the element may not exist yet and measures as zero.

use thiserror::Error;
use tracing::{debug, warn};

use crate::primitives::GeometrySnapshot;
use crate::swap::SwapHandle;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    #[error("no window (not running in a browser)")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element `{id}` is not mounted")]
    NotMounted { id: String },
}

/// Source of element geometry
pub trait Measure {
    fn snapshot(&self, handle: &SwapHandle) -> Result<GeometrySnapshot, MeasureError>;

    /// Degraded output instead of failure: a missing element measures as
    /// `GeometrySnapshot::ZERO`.
    fn snapshot_or_zero(&self, handle: &SwapHandle) -> GeometrySnapshot {
        match self.snapshot(handle) {
            Ok(rect) => {
                if rect.is_empty() {
                    debug!(id = handle.id(), "element has no layout yet");
                }
                rect
            }
            Err(err) => {
                warn!(id = handle.id(), %err, "measuring as zero");
                GeometrySnapshot::ZERO
            }
        }
    }
}

/// `getBoundingClientRect` on the element whose id the handle carries
#[derive(Debug, Clone, Copy, Default)]
pub struct DomMeasure;

impl Measure for DomMeasure {
    fn snapshot(&self, handle: &SwapHandle) -> Result<GeometrySnapshot, MeasureError> {
        let document = web_sys::window()
            .ok_or(MeasureError::NoWindow)?
            .document()
            .ok_or(MeasureError::NoDocument)?;
        let element = document
            .get_element_by_id(handle.id())
            .ok_or_else(|| MeasureError::NotMounted { id: handle.id().to_string() })?;
        Ok(GeometrySnapshot::from_dom_rect(&element.get_bounding_client_rect()))
    }
}
