//! Memory-resident element implementations.
//!
//! These are the default storage strategy for detection output: everything
//! lives in the element itself and is dropped with it. Callers wanting a
//! persisted strategy implement the element and factory traits against
//! their own store.

use super::bbox::BoundingBox;
use super::classification::{
    ClassificationElement, ClassificationElementFactory, ClassificationMap,
};
use super::detection::{DetectionElement, DetectionElementFactory};

/// Classification element holding its label distribution in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryClassificationElement {
    type_tag: String,
    uuid: String,
    map: Option<ClassificationMap>,
}

impl ClassificationElement for MemoryClassificationElement {
    fn type_tag(&self) -> &str {
        &self.type_tag
    }

    fn uuid(&self) -> &str {
        &self.uuid
    }

    fn set_classification(mut self, map: ClassificationMap) -> Self {
        self.map = Some(map);
        self
    }

    fn classification(&self) -> Option<&ClassificationMap> {
        self.map.as_ref()
    }
}

/// Factory producing [`MemoryClassificationElement`] instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryClassificationElementFactory;

impl ClassificationElementFactory for MemoryClassificationElementFactory {
    type Element = MemoryClassificationElement;

    fn new_classification(&self, type_tag: &str, uuid: &str) -> Self::Element {
        MemoryClassificationElement {
            type_tag: type_tag.to_owned(),
            uuid: uuid.to_owned(),
            map: None,
        }
    }
}

/// Detection element holding its payload in memory.
///
/// Generic over the classification element type so it can wrap
/// classifications from any factory; defaults to the memory-resident one.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryDetectionElement<C = MemoryClassificationElement> {
    uuid: String,
    payload: Option<(BoundingBox, C)>,
}

impl<C: ClassificationElement> DetectionElement for MemoryDetectionElement<C> {
    type Classification = C;

    fn uuid(&self) -> &str {
        &self.uuid
    }

    fn set_detection(mut self, bbox: BoundingBox, classification: C) -> Self {
        self.payload = Some((bbox, classification));
        self
    }

    fn detection(&self) -> Option<(&BoundingBox, &C)> {
        self.payload.as_ref().map(|(bbox, c)| (bbox, c))
    }
}

/// Factory producing [`MemoryDetectionElement`] instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryDetectionElementFactory;

impl DetectionElementFactory for MemoryDetectionElementFactory {
    type Element = MemoryDetectionElement;

    fn new_detection(&self, uuid: &str) -> Self::Element {
        MemoryDetectionElement {
            uuid: uuid.to_owned(),
            payload: None,
        }
    }
}
