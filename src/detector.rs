//! Detection algorithm contracts.
//!
//! [`ObjectDetector`] defines the assembly and validation protocol around an
//! implementation-specific raw detection hook; [`ImageMatrixObjectDetector`]
//! specializes it for algorithms that operate on decoded pixel matrices.
//! [`ImageReaderRegistry`] supports selecting a reader implementation from a
//! JSON configuration block.

mod config;
mod image_matrix;
mod object;
mod reader;
mod uuid;
mod validator;

pub use config::{ConfigError, FromConfig, ImageReaderRegistry, IMAGE_READER_KEY, TYPE_KEY};
pub use image_matrix::{ImageMatrixObjectDetector, MatrixDetection};
pub use object::{
    DETECTION_CLASSIFICATION_TYPE, DetectionStream, ObjectDetector, RawDetections,
};
pub use reader::{ImageReader, PixelMatrix};
pub use uuid::detection_uuid;
pub use validator::{ContentTypeValidator, DetectError};
