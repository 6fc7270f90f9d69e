use super::bbox::BoundingBox;
use super::classification::ClassificationElement;

/// One detected object: a bounding box paired with a classification
/// element, held under a derived identifier.
///
/// Instances are only built through a [`DetectionElementFactory`] and start
/// out empty; `set_detection` populates them. A populated element always
/// carries exactly one classification.
pub trait DetectionElement {
    type Classification: ClassificationElement;

    /// Derived identifier this element was created under.
    fn uuid(&self) -> &str;

    /// Store the detection payload, returning the populated element.
    fn set_detection(self, bbox: BoundingBox, classification: Self::Classification) -> Self;

    /// The stored payload, if one has been set.
    fn detection(&self) -> Option<(&BoundingBox, &Self::Classification)>;
}

/// Factory for detection elements.
///
/// The concrete element type decides the storage strategy;
/// [`MemoryDetectionElementFactory`](crate::element::MemoryDetectionElementFactory)
/// is the documented memory-resident default a caller may construct at the
/// call site.
pub trait DetectionElementFactory {
    type Element: DetectionElement;

    /// Create a new, unpopulated element under the given identifier.
    fn new_detection(&self, uuid: &str) -> Self::Element;
}
