//! Base object detector abstraction.

use tracing::debug;

use crate::element::{
    BoundingBox, ClassificationElement, ClassificationElementFactory, ClassificationMap,
    DataElement, DetectionElement, DetectionElementFactory,
};

use super::uuid::detection_uuid;
use super::validator::{ContentTypeValidator, DetectError};

/// Type tag given to every classification element assembled by
/// [`ObjectDetector::detect_objects`].
pub const DETECTION_CLASSIFICATION_TYPE: &str = "object detection classification";

/// Lazy, single-pass stream of raw detection output: paired bounding boxes
/// and classification maps, in the order the algorithm produced them.
pub type RawDetections<'a> = Box<dyn Iterator<Item = (BoundingBox, ClassificationMap)> + 'a>;

/// Abstract interface to an object detection algorithm.
///
/// An object detection algorithm takes in a data element and yields zero or
/// more detections, each a spatial region in the data with a probability
/// distribution over classification labels. Implementors supply only the
/// raw detection hook; the provided [`detect_objects`] method wraps it with
/// content-type validation and element assembly.
///
/// [`detect_objects`]: ObjectDetector::detect_objects
pub trait ObjectDetector: ContentTypeValidator {
    /// Algorithm-specific raw detection hook.
    ///
    /// Returns `None` when the algorithm cannot process this particular
    /// element (a decode or precondition failure, not an error); an
    /// algorithm that ran and found nothing returns an empty iterator
    /// instead. The two outcomes are deliberately distinct and must not be
    /// collapsed.
    fn detect_objects_raw<'a>(&'a self, data: &'a dyn DataElement) -> Option<RawDetections<'a>>;

    /// Detect objects in the given data element.
    ///
    /// The element's content type is validated eagerly, before any
    /// detection work, so a type mismatch surfaces immediately rather than
    /// mid-iteration. Raw output from [`detect_objects_raw`] is then
    /// lazily assembled: each (bounding box, classification map) pair gets
    /// an identifier derived via [`detection_uuid`] from the element's
    /// uuid, the box geometry, and the label set, and is wrapped into
    /// factory-built classification and detection elements sharing that
    /// identifier. Output order matches the raw order; nothing is
    /// buffered, reordered, or deduplicated.
    ///
    /// `Ok(None)` propagates the hook's "could not process" signal.
    ///
    /// [`detect_objects_raw`]: ObjectDetector::detect_objects_raw
    fn detect_objects<'a, DF, CF>(
        &'a self,
        data: &'a dyn DataElement,
        de_factory: &'a DF,
        ce_factory: &'a CF,
    ) -> Result<Option<DetectionStream<'a, DF, CF>>, DetectError>
    where
        DF: DetectionElementFactory,
        CF: ClassificationElementFactory,
        DF::Element: DetectionElement<Classification = CF::Element>,
    {
        self.ensure_valid_element(data)?;

        // The element uuid is a checksum of its content, so the string
        // rendering is unique-preserving.
        let data_uuid = data.uuid();

        match self.detect_objects_raw(data) {
            Some(raw) => Ok(Some(DetectionStream {
                raw,
                data_uuid,
                de_factory,
                ce_factory,
            })),
            None => {
                debug!(%data_uuid, "detector could not process element");
                Ok(None)
            }
        }
    }
}

/// Iterator assembling raw detection pairs into populated detection
/// elements.
///
/// Single-pass: it threads through the underlying raw detection iterator
/// and is not restartable.
pub struct DetectionStream<'a, DF, CF> {
    raw: RawDetections<'a>,
    data_uuid: String,
    de_factory: &'a DF,
    ce_factory: &'a CF,
}

impl<DF, CF> std::fmt::Debug for DetectionStream<'_, DF, CF> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectionStream")
            .field("data_uuid", &self.data_uuid)
            .finish_non_exhaustive()
    }
}

impl<DF, CF> Iterator for DetectionStream<'_, DF, CF>
where
    DF: DetectionElementFactory,
    CF: ClassificationElementFactory,
    DF::Element: DetectionElement<Classification = CF::Element>,
{
    type Item = DF::Element;

    fn next(&mut self) -> Option<Self::Item> {
        let (bbox, c_map) = self.raw.next()?;
        let det_uuid = detection_uuid(&self.data_uuid, &bbox, c_map.keys());

        let ce = self
            .ce_factory
            .new_classification(DETECTION_CLASSIFICATION_TYPE, &det_uuid)
            .set_classification(c_map);

        Some(
            self.de_factory
                .new_detection(&det_uuid)
                .set_detection(bbox, ce),
        )
    }
}
