//! Data model for detection inputs and outputs.
//!
//! Detection and classification elements are only ever built through their
//! factory traits; the orchestration layer in [`crate::detector`] populates
//! them but never constructs them directly.

mod bbox;
mod classification;
mod data;
mod detection;
mod memory;

pub use bbox::{BoundingBox, GeometryError};
pub use classification::{ClassificationElement, ClassificationElementFactory, ClassificationMap};
pub use data::DataElement;
pub use detection::{DetectionElement, DetectionElementFactory};
pub use memory::{
    MemoryClassificationElement, MemoryClassificationElementFactory, MemoryDetectionElement,
    MemoryDetectionElementFactory,
};
