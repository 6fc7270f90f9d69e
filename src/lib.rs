//! Pluggable object-detection interfaces.
//!
//! An object detector is anything that consumes a [`DataElement`] and yields
//! zero or more spatial detections, each pairing a [`BoundingBox`] with a
//! probability distribution over classification labels. This crate defines
//! the contracts those detectors plug into:
//!
//! - [`ObjectDetector`]: validates content types, invokes an
//!   implementation-specific raw detection hook, and lazily assembles the
//!   raw output into factory-built detection elements with deterministic,
//!   provenance-derived identifiers.
//! - [`ImageMatrixObjectDetector`]: the common specialization where the
//!   data must first be decoded into a pixel matrix by an [`ImageReader`].
//!
//! Concrete models, decoding backends, and element storage strategies live
//! outside this crate; implement the hook traits to connect them.

pub mod detector;
pub mod element;

pub use detector::{
    ConfigError, ContentTypeValidator, DETECTION_CLASSIFICATION_TYPE, DetectError,
    DetectionStream, FromConfig, ImageMatrixObjectDetector, ImageReader, ImageReaderRegistry,
    MatrixDetection, ObjectDetector, PixelMatrix, RawDetections, detection_uuid,
};
pub use element::{
    BoundingBox, ClassificationElement, ClassificationElementFactory, ClassificationMap,
    DataElement, DetectionElement, DetectionElementFactory, GeometryError,
    MemoryClassificationElement, MemoryClassificationElementFactory, MemoryDetectionElement,
    MemoryDetectionElementFactory,
};
