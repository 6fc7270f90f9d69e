//! Object detectors that operate over the pixel matrix of an image.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::trace;

use crate::element::DataElement;

use super::config::{ConfigError, IMAGE_READER_KEY, ImageReaderRegistry};
use super::object::{ObjectDetector, RawDetections};
use super::reader::{ImageReader, PixelMatrix};
use super::validator::ContentTypeValidator;

/// Algorithm hook for detection over decoded pixel data.
///
/// Implement this to connect a matrix-based detection model; wrap it in an
/// [`ImageMatrixObjectDetector`] to obtain the full [`ObjectDetector`]
/// contract.
pub trait MatrixDetection {
    /// Yield (bounding box, classification map) pairs for objects detected
    /// in the given pixel matrix.
    ///
    /// The matrix is owned by this call; the detection layer never retains
    /// it across calls.
    fn detect_objects_matrix<'a>(&'a self, matrix: PixelMatrix) -> RawDetections<'a>;
}

/// Object detector running a [`MatrixDetection`] algorithm over images
/// decoded by an [`ImageReader`].
///
/// Content-type acceptance is delegated entirely to the reader; this
/// detector has no independent notion of valid types. An element the
/// reader cannot decode propagates as the "could not process" signal
/// (`Ok(None)` from [`ObjectDetector::detect_objects`]), distinct from a
/// decodable frame with no detections.
pub struct ImageMatrixObjectDetector<A: MatrixDetection> {
    image_reader: Box<dyn ImageReader>,
    reader_config: Option<Value>,
    algorithm: A,
}

impl<A: MatrixDetection> ImageMatrixObjectDetector<A> {
    /// Create a detector from an owned reader and algorithm.
    ///
    /// A reader supplied directly carries no registry type tag, so a
    /// detector built this way cannot render itself back to configuration;
    /// use [`from_config`](Self::from_config) when that is needed.
    pub fn new(image_reader: Box<dyn ImageReader>, algorithm: A) -> Self {
        Self {
            image_reader,
            reader_config: None,
            algorithm,
        }
    }

    /// Create a detector from a configuration dictionary.
    ///
    /// The reader block nested under the reserved `image_reader` key is
    /// resolved against `registry` before the detector is constructed.
    pub fn from_config(
        registry: &ImageReaderRegistry,
        config: &Value,
        algorithm: A,
    ) -> Result<Self, ConfigError> {
        let block = config
            .get(IMAGE_READER_KEY)
            .ok_or(ConfigError::MissingKey(IMAGE_READER_KEY))?;
        let (image_reader, reader_config) = registry.resolve_described(block)?;
        Ok(Self {
            image_reader,
            reader_config: Some(reader_config),
            algorithm,
        })
    }

    /// Configuration dictionary that could be passed back to
    /// [`from_config`](Self::from_config) to produce a detector with an
    /// identically configured reader, nested under the reserved
    /// `image_reader` key.
    ///
    /// The algorithm is expected to be supplied at runtime and is left
    /// out. `None` for detectors built from a directly supplied reader.
    pub fn config(&self) -> Option<Value> {
        self.reader_config.as_ref().map(|block| {
            let mut map = Map::new();
            map.insert(IMAGE_READER_KEY.to_owned(), block.clone());
            Value::Object(map)
        })
    }

    /// Reader used to decode elements and to define valid content types.
    pub fn image_reader(&self) -> &dyn ImageReader {
        self.image_reader.as_ref()
    }

    /// The wrapped detection algorithm.
    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }
}

impl<A: MatrixDetection> ContentTypeValidator for ImageMatrixObjectDetector<A> {
    fn valid_content_types(&self) -> HashSet<String> {
        self.image_reader.valid_content_types()
    }

    fn is_valid_element(&self, data: &dyn DataElement) -> bool {
        self.image_reader.is_valid_element(data)
    }
}

impl<A: MatrixDetection> ObjectDetector for ImageMatrixObjectDetector<A> {
    fn detect_objects_raw<'a>(&'a self, data: &'a dyn DataElement) -> Option<RawDetections<'a>> {
        let Some(matrix) = self.image_reader.load_as_matrix(data) else {
            trace!("image reader could not decode element");
            return None;
        };
        Some(self.algorithm.detect_objects_matrix(matrix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::validator::DetectError;
    use crate::element::{
        BoundingBox, ClassificationMap, DetectionElement, MemoryClassificationElementFactory,
        MemoryDetectionElementFactory,
    };
    use ndarray::Array3;
    use std::borrow::Cow;
    use std::collections::HashMap;

    struct TiffElement {
        content_type: &'static str,
    }

    impl DataElement for TiffElement {
        fn uuid(&self) -> String {
            "feedface".into()
        }

        fn content_type(&self) -> &str {
            self.content_type
        }

        fn bytes(&self) -> Cow<'_, [u8]> {
            Cow::Borrowed(&[])
        }
    }

    /// Reader decoding every valid element into a fixed-size matrix, or
    /// nothing at all.
    struct CannedReader {
        decodes: bool,
    }

    impl ContentTypeValidator for CannedReader {
        fn valid_content_types(&self) -> HashSet<String> {
            HashSet::from(["image/tiff".to_owned()])
        }
    }

    impl ImageReader for CannedReader {
        fn load_as_matrix(&self, _data: &dyn DataElement) -> Option<PixelMatrix> {
            self.decodes.then(|| Array3::zeros((4, 6, 3)))
        }
    }

    /// Algorithm reporting a single whole-frame detection.
    struct WholeFrame;

    impl MatrixDetection for WholeFrame {
        fn detect_objects_matrix<'a>(&'a self, matrix: PixelMatrix) -> RawDetections<'a> {
            let (height, width, _) = matrix.dim();
            let bbox = BoundingBox::rect(0.0, 0.0, width as f64, height as f64).unwrap();
            let map: ClassificationMap = HashMap::from([("frame".into(), 1.0)]);
            Box::new(std::iter::once((bbox, map)))
        }
    }

    fn detector(decodes: bool) -> ImageMatrixObjectDetector<WholeFrame> {
        ImageMatrixObjectDetector::new(Box::new(CannedReader { decodes }), WholeFrame)
    }

    #[test]
    fn test_content_types_delegated_to_reader() {
        let detector = detector(true);
        assert_eq!(
            detector.valid_content_types(),
            HashSet::from(["image/tiff".to_owned()])
        );
        assert!(detector.is_valid_element(&TiffElement {
            content_type: "image/tiff"
        }));
        assert!(!detector.is_valid_element(&TiffElement {
            content_type: "image/png"
        }));
    }

    #[test]
    fn test_decode_failure_propagates_as_none() {
        let detector = detector(false);
        let data = TiffElement {
            content_type: "image/tiff",
        };
        let de_factory = MemoryDetectionElementFactory;
        let ce_factory = MemoryClassificationElementFactory;

        let result = detector
            .detect_objects(&data, &de_factory, &ce_factory)
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_matrix_hook_receives_decoded_frame() {
        let records: Vec<_> = detector(true)
            .detect_objects(
                &TiffElement {
                    content_type: "image/tiff",
                },
                &MemoryDetectionElementFactory,
                &MemoryClassificationElementFactory,
            )
            .unwrap()
            .unwrap()
            .collect();
        assert_eq!(records.len(), 1);

        let (bbox, _) = records[0].detection().unwrap();
        assert_eq!(bbox.max_vertex(), [6.0, 4.0]);
    }

    #[test]
    fn test_directly_supplied_reader_has_no_config() {
        assert!(detector(true).config().is_none());
    }

    #[test]
    fn test_unsupported_type_rejected_before_decode() {
        let err = detector(true)
            .detect_objects(
                &TiffElement {
                    content_type: "video/mp4",
                },
                &MemoryDetectionElementFactory,
                &MemoryClassificationElementFactory,
            )
            .unwrap_err();
        assert!(matches!(err, DetectError::InvalidContentType { .. }));
    }
}
